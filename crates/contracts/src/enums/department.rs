use serde::{Deserialize, Serialize};

/// Departments ideas can come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Department {
    ItDevelopment,
    Facilities,
    Procurement,
    Environment,
    Marketing,
    HumanResources,
    Other,
}

impl Department {
    pub fn code(&self) -> &'static str {
        match self {
            Department::ItDevelopment => "it-development",
            Department::Facilities => "facilities",
            Department::Procurement => "procurement",
            Department::Environment => "environment",
            Department::Marketing => "marketing",
            Department::HumanResources => "human-resources",
            Department::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Department::ItDevelopment => "IT개발팀",
            Department::Facilities => "시설관리팀",
            Department::Procurement => "구매팀",
            Department::Environment => "환경팀",
            Department::Marketing => "마케팅팀",
            Department::HumanResources => "인사팀",
            Department::Other => "기타",
        }
    }

    pub fn all() -> Vec<Department> {
        vec![
            Department::ItDevelopment,
            Department::Facilities,
            Department::Procurement,
            Department::Environment,
            Department::Marketing,
            Department::HumanResources,
            Department::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|d| d.code() == code)
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
