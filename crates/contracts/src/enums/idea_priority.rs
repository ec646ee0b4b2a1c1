use serde::{Deserialize, Serialize};

/// Priority assigned to an employee idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeaPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl IdeaPriority {
    pub fn code(&self) -> &'static str {
        match self {
            IdeaPriority::Low => "low",
            IdeaPriority::Medium => "medium",
            IdeaPriority::High => "high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IdeaPriority::Low => "낮음",
            IdeaPriority::Medium => "보통",
            IdeaPriority::High => "높음",
        }
    }

    pub fn all() -> Vec<IdeaPriority> {
        vec![IdeaPriority::Low, IdeaPriority::Medium, IdeaPriority::High]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.code() == code)
    }
}

impl std::fmt::Display for IdeaPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
