use serde::{Deserialize, Serialize};

/// Waste stream types tracked by the circular-economy page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WasteType {
    Paper,
    Plastic,
    EWaste,
    FoodWaste,
    Glass,
    Metal,
    Other,
}

impl WasteType {
    pub fn code(&self) -> &'static str {
        match self {
            WasteType::Paper => "paper",
            WasteType::Plastic => "plastic",
            WasteType::EWaste => "e-waste",
            WasteType::FoodWaste => "food-waste",
            WasteType::Glass => "glass",
            WasteType::Metal => "metal",
            WasteType::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WasteType::Paper => "종이",
            WasteType::Plastic => "플라스틱",
            WasteType::EWaste => "전자폐기물",
            WasteType::FoodWaste => "음식물 쓰레기",
            WasteType::Glass => "유리",
            WasteType::Metal => "금속",
            WasteType::Other => "기타",
        }
    }

    pub fn all() -> Vec<WasteType> {
        vec![
            WasteType::Paper,
            WasteType::Plastic,
            WasteType::EWaste,
            WasteType::FoodWaste,
            WasteType::Glass,
            WasteType::Metal,
            WasteType::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

impl std::fmt::Display for WasteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
