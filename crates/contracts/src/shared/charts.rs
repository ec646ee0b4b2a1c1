use serde::{Deserialize, Serialize};

/// One labeled value in a bar or pie chart.
///
/// This is the whole rendering contract with the presentation layer: the
/// core hands over lists of these and the chart library does the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One labeled count in a distribution chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountPoint {
    pub name: String,
    pub value: usize,
}

impl CountPoint {
    pub fn new(name: impl Into<String>, value: usize) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One point of a multi-series monthly trend line, keyed by series name.
///
/// `values` keeps the series order the dashboard declares (e.g. scope1,
/// scope2, scope3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Month label (e.g. "1월")
    pub name: String,
    pub values: Vec<(String, f64)>,
}

impl TrendPoint {
    pub fn new(name: impl Into<String>, values: Vec<(String, f64)>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Value of one named series, if present
    pub fn series(&self, key: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, v)| *v)
    }
}
