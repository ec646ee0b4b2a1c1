pub mod dto;

pub use dto::ValueChainBreakdown;
