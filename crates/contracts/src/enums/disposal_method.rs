use serde::{Deserialize, Serialize};

/// How a waste batch was disposed of.
///
/// `Recycling` partitions the overall recycling ratio; `Landfill` drives the
/// landfill-zero indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisposalMethod {
    Recycling,
    Composting,
    EnergyRecovery,
    Landfill,
}

impl DisposalMethod {
    pub fn code(&self) -> &'static str {
        match self {
            DisposalMethod::Recycling => "recycling",
            DisposalMethod::Composting => "composting",
            DisposalMethod::EnergyRecovery => "energy-recovery",
            DisposalMethod::Landfill => "landfill",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DisposalMethod::Recycling => "재활용",
            DisposalMethod::Composting => "퇴비화",
            DisposalMethod::EnergyRecovery => "에너지 회수",
            DisposalMethod::Landfill => "매립",
        }
    }

    pub fn all() -> Vec<DisposalMethod> {
        vec![
            DisposalMethod::Recycling,
            DisposalMethod::Composting,
            DisposalMethod::EnergyRecovery,
            DisposalMethod::Landfill,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.code() == code)
    }
}

impl std::fmt::Display for DisposalMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
