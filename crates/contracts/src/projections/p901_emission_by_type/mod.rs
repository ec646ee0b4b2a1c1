pub mod dto;

pub use dto::EmissionSummary;
