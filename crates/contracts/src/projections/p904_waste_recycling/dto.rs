use crate::shared::charts::{ChartPoint, TrendPoint};
use serde::{Deserialize, Serialize};

/// Series keys of the monthly waste trend chart
pub const WASTE_RECYCLED: &str = "recycled";
pub const WASTE_COMPOSTED: &str = "composted";
pub const WASTE_ENERGY: &str = "energy";
pub const WASTE_LANDFILL: &str = "landfill";

/// Circular-economy page summary: disposal split and recycling ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteRecyclingSummary {
    /// Sum of all waste amounts, kg
    pub total_waste: f64,
    /// Sum over batches disposed via recycling
    pub recycled: f64,
    /// Sum over batches sent to landfill
    pub landfill: f64,
    /// `recycled / total_waste`, percent; `None` when no waste is recorded
    pub recycling_rate: Option<f64>,
    /// True when not a single kilogram went to landfill
    pub landfill_zero: bool,
    /// One slice per disposal method, in declared enum order, zero-filled
    pub by_disposal: Vec<ChartPoint>,
    /// Fixed monthly disposal history, one series per disposal method
    pub monthly_history: Vec<TrendPoint>,
}
