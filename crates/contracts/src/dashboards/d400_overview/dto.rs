use crate::shared::charts::{ChartPoint, TrendPoint};
use crate::shared::indicators::IndicatorValue;
use serde::{Deserialize, Serialize};

/// Series keys of the monthly emission trend chart
pub const TREND_SCOPE1: &str = "scope1";
pub const TREND_SCOPE2: &str = "scope2";
pub const TREND_SCOPE3: &str = "scope3";

/// Response for the main dashboard page.
///
/// Everything here is render-ready: the presentation layer draws the series
/// and cards without touching domain records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewResponse {
    /// Monthly greenhouse-gas trend, one `TrendPoint` per month with the
    /// scope1/scope2/scope3 series
    pub monthly_trend: Vec<TrendPoint>,
    /// Scope 1/2/3 shares of the latest trend month, as pie slices
    pub scope_share: Vec<ChartPoint>,
    /// Circular-economy achievement cards (recycling rate, landfill zero,
    /// resource recovery) with their configured targets
    pub circular_indicators: Vec<IndicatorValue>,
    /// Headline figures (total ideas, implemented ideas, year-over-year
    /// reduction, ...)
    pub key_figures: Vec<IndicatorValue>,
}
