use serde::{Deserialize, Serialize};

/// Review lifecycle of an employee idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeaStatus {
    #[default]
    Submitted,
    Reviewing,
    Approved,
    Implemented,
    Rejected,
}

impl IdeaStatus {
    pub fn code(&self) -> &'static str {
        match self {
            IdeaStatus::Submitted => "submitted",
            IdeaStatus::Reviewing => "reviewing",
            IdeaStatus::Approved => "approved",
            IdeaStatus::Implemented => "implemented",
            IdeaStatus::Rejected => "rejected",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IdeaStatus::Submitted => "제출됨",
            IdeaStatus::Reviewing => "검토중",
            IdeaStatus::Approved => "승인됨",
            IdeaStatus::Implemented => "구현됨",
            IdeaStatus::Rejected => "거부됨",
        }
    }

    pub fn all() -> Vec<IdeaStatus> {
        vec![
            IdeaStatus::Submitted,
            IdeaStatus::Reviewing,
            IdeaStatus::Approved,
            IdeaStatus::Implemented,
            IdeaStatus::Rejected,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl std::fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
