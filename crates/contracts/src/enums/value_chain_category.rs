use serde::{Deserialize, Serialize};

/// Scope 3 value-chain categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueChainCategory {
    PurchasedGoods,
    Transport,
    BusinessTravel,
    WasteTreatment,
    EmployeeCommuting,
    Investments,
    LeasedAssets,
    Other,
}

impl ValueChainCategory {
    pub fn code(&self) -> &'static str {
        match self {
            ValueChainCategory::PurchasedGoods => "purchased-goods",
            ValueChainCategory::Transport => "transport",
            ValueChainCategory::BusinessTravel => "business-travel",
            ValueChainCategory::WasteTreatment => "waste-treatment",
            ValueChainCategory::EmployeeCommuting => "employee-commuting",
            ValueChainCategory::Investments => "investments",
            ValueChainCategory::LeasedAssets => "leased-assets",
            ValueChainCategory::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ValueChainCategory::PurchasedGoods => "구매 상품 및 서비스",
            ValueChainCategory::Transport => "운송 및 배송",
            ValueChainCategory::BusinessTravel => "출장",
            ValueChainCategory::WasteTreatment => "폐기물 처리",
            ValueChainCategory::EmployeeCommuting => "임직원 출퇴근",
            ValueChainCategory::Investments => "투자",
            ValueChainCategory::LeasedAssets => "임대 자산",
            ValueChainCategory::Other => "기타",
        }
    }

    pub fn all() -> Vec<ValueChainCategory> {
        vec![
            ValueChainCategory::PurchasedGoods,
            ValueChainCategory::Transport,
            ValueChainCategory::BusinessTravel,
            ValueChainCategory::WasteTreatment,
            ValueChainCategory::EmployeeCommuting,
            ValueChainCategory::Investments,
            ValueChainCategory::LeasedAssets,
            ValueChainCategory::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

impl std::fmt::Display for ValueChainCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
