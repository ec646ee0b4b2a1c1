use serde::{Deserialize, Serialize};

/// Purchased (Scope 2) energy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnergyType {
    Electricity,
    HeatingCooling,
    Steam,
    OtherEnergy,
}

impl EnergyType {
    pub fn code(&self) -> &'static str {
        match self {
            EnergyType::Electricity => "electricity",
            EnergyType::HeatingCooling => "heating-cooling",
            EnergyType::Steam => "steam",
            EnergyType::OtherEnergy => "other-energy",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EnergyType::Electricity => "전력",
            EnergyType::HeatingCooling => "냉난방",
            EnergyType::Steam => "증기",
            EnergyType::OtherEnergy => "기타 에너지",
        }
    }

    pub fn all() -> Vec<EnergyType> {
        vec![
            EnergyType::Electricity,
            EnergyType::HeatingCooling,
            EnergyType::Steam,
            EnergyType::OtherEnergy,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

impl std::fmt::Display for EnergyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
