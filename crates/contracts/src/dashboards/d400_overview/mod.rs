pub mod dto;

pub use dto::{OverviewResponse, TREND_SCOPE1, TREND_SCOPE2, TREND_SCOPE3};
