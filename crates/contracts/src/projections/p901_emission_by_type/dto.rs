use crate::shared::charts::ChartPoint;
use serde::{Deserialize, Serialize};

/// Scope 1 page summary: totals plus the per-type bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionSummary {
    /// Sum of all recorded amounts, tCO2e
    pub total: f64,
    /// Number of registered records
    pub record_count: usize,
    /// One bar per emission type, in declared enum order, zero-filled
    pub by_type: Vec<ChartPoint>,
}
