use serde::{Deserialize, Serialize};

/// Reduction status of a value-chain emission position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReductionStatus {
    #[default]
    Active,
    Reduced,
    Eliminated,
}

impl ReductionStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ReductionStatus::Active => "active",
            ReductionStatus::Reduced => "reduced",
            ReductionStatus::Eliminated => "eliminated",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReductionStatus::Active => "활성",
            ReductionStatus::Reduced => "감축",
            ReductionStatus::Eliminated => "제거",
        }
    }

    pub fn all() -> Vec<ReductionStatus> {
        vec![
            ReductionStatus::Active,
            ReductionStatus::Reduced,
            ReductionStatus::Eliminated,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl std::fmt::Display for ReductionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
