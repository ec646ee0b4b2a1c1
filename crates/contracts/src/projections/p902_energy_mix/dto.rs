use crate::shared::charts::{ChartPoint, TrendPoint};
use serde::{Deserialize, Serialize};

/// Series keys of the monthly energy trend chart
pub const ENERGY_TOTAL: &str = "total";
pub const ENERGY_RENEWABLE: &str = "renewable";
pub const ENERGY_CONVENTIONAL: &str = "conventional";

/// Scope 2 page summary: renewable vs conventional split.
///
/// Amounts are summed as reported, across units: the ledger mixes kWh and
/// GJ, and the ratio inherits that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyMixSummary {
    /// Sum of all recorded amounts
    pub total: f64,
    /// Sum over records flagged renewable
    pub renewable: f64,
    /// `total - renewable`
    pub conventional: f64,
    /// Renewable share in percent; `None` when nothing is recorded
    pub renewable_share: Option<f64>,
    /// Two pie slices: 재생에너지 / 일반전력
    pub source_split: Vec<ChartPoint>,
    /// Fixed monthly usage history with total/renewable/conventional series
    pub monthly_history: Vec<TrendPoint>,
}
