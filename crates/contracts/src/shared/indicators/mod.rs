use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, used as key on dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// A single computed indicator result shown on a summary card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub id: IndicatorId,
    /// Card title (e.g. "재활용률")
    pub label: String,
    /// Primary numeric value (`None` when there is no data to compute it)
    pub value: Option<f64>,
    /// Pre-formatted display string ("85.1%", "244.0", "N/A")
    pub display: String,
    /// Unit caption under the number (e.g. "tCO2e", "kWh", "건")
    pub unit: Option<String>,
    pub format: ValueFormat,
    pub status: IndicatorStatus,
    /// Target value when the indicator tracks one (e.g. 90 for 90%)
    pub target: Option<f64>,
}
