use serde::{Deserialize, Serialize};

/// Direct (Scope 1) emission source types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmissionType {
    FuelCombustion,
    ProcessEmission,
    RefrigerantLeak,
    OtherDirect,
}

impl EmissionType {
    pub fn code(&self) -> &'static str {
        match self {
            EmissionType::FuelCombustion => "fuel-combustion",
            EmissionType::ProcessEmission => "process-emission",
            EmissionType::RefrigerantLeak => "refrigerant-leak",
            EmissionType::OtherDirect => "other-direct",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EmissionType::FuelCombustion => "연료 연소",
            EmissionType::ProcessEmission => "공정 배출",
            EmissionType::RefrigerantLeak => "냉매 누출",
            EmissionType::OtherDirect => "기타 직접 배출",
        }
    }

    pub fn all() -> Vec<EmissionType> {
        vec![
            EmissionType::FuelCombustion,
            EmissionType::ProcessEmission,
            EmissionType::RefrigerantLeak,
            EmissionType::OtherDirect,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

impl std::fmt::Display for EmissionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
