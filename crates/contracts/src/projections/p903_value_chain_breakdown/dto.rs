use crate::shared::charts::ChartPoint;
use serde::{Deserialize, Serialize};

/// Scope 3 page summary: status partition and category bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueChainBreakdown {
    /// Sum of all recorded amounts, tCO2e
    pub total: f64,
    /// Sum over records with status `active`
    pub active_total: f64,
    /// Sum over records with status `reduced`
    pub reduced_total: f64,
    /// Sum over records with status `eliminated`
    pub eliminated_total: f64,
    /// `reduced_total / total`, percent; `None` when the ledger is empty
    pub reduction_rate: Option<f64>,
    /// One bar per category, in declared enum order, zero-filled
    pub by_category: Vec<ChartPoint>,
}
