use serde::{Deserialize, Serialize};

/// Topic an employee idea belongs to.
///
/// "Scope 1" here is a plain label, not a reference into the emission store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdeaCategory {
    Scope1,
    Scope2,
    Scope3,
    CircularEconomy,
    Other,
}

impl IdeaCategory {
    pub fn code(&self) -> &'static str {
        match self {
            IdeaCategory::Scope1 => "scope1",
            IdeaCategory::Scope2 => "scope2",
            IdeaCategory::Scope3 => "scope3",
            IdeaCategory::CircularEconomy => "circular-economy",
            IdeaCategory::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IdeaCategory::Scope1 => "Scope 1",
            IdeaCategory::Scope2 => "Scope 2",
            IdeaCategory::Scope3 => "Scope 3",
            IdeaCategory::CircularEconomy => "순환경제",
            IdeaCategory::Other => "기타",
        }
    }

    pub fn all() -> Vec<IdeaCategory> {
        vec![
            IdeaCategory::Scope1,
            IdeaCategory::Scope2,
            IdeaCategory::Scope3,
            IdeaCategory::CircularEconomy,
            IdeaCategory::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

impl std::fmt::Display for IdeaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
