use crate::domain::common::{BaseRecord, EntityMetadata, RecordId, RecordRoot};
use crate::enums::{Department, IdeaCategory, IdeaPriority, IdeaStatus};
use crate::shared::validation::{parse_required_text, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author assigned to ideas submitted through the dialog
pub const CURRENT_USER: &str = "현재 사용자";

/// Default impact/feasibility score for a fresh submission
pub const DEFAULT_SCORE: u8 = 3;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of an employee idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdeaId(pub Uuid);

impl IdeaId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl RecordId for IdeaId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(IdeaId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Employee improvement idea.
///
/// The dialog only edits title/description/category/department/priority;
/// review status, scores and engagement counters change through dedicated
/// actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    #[serde(flatten)]
    pub base: BaseRecord<IdeaId>,

    pub title: String,
    pub description: String,
    pub category: IdeaCategory,
    pub author: String,
    pub department: Department,
    pub status: IdeaStatus,
    pub priority: IdeaPriority,

    /// Estimated impact, 1..=5
    pub impact: u8,
    /// Estimated feasibility, 1..=5
    pub feasibility: u8,

    pub likes: u32,
    pub comments: u32,

    #[serde(rename = "implementationDate", skip_serializing_if = "Option::is_none")]
    pub implementation_date: Option<chrono::NaiveDate>,
}

/// Typed field set produced by a successfully parsed draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaFields {
    pub title: String,
    pub description: String,
    pub category: IdeaCategory,
    pub department: Department,
    pub priority: IdeaPriority,
}

impl Idea {
    /// Create a freshly submitted idea dated `date`
    pub fn new_for_insert(date: chrono::NaiveDate, fields: IdeaFields) -> Self {
        Self {
            base: BaseRecord::new(IdeaId::new_v4(), date),
            title: fields.title,
            description: fields.description,
            category: fields.category,
            author: CURRENT_USER.to_string(),
            department: fields.department,
            status: IdeaStatus::Submitted,
            priority: fields.priority,
            impact: DEFAULT_SCORE,
            feasibility: DEFAULT_SCORE,
            likes: 0,
            comments: 0,
            implementation_date: None,
        }
    }

    /// Replace the dialog-editable fields; everything else stays untouched
    pub fn update(&mut self, fields: IdeaFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.category = fields.category;
        self.department = fields.department;
        self.priority = fields.priority;
    }

    /// One thumbs-up from a reader
    pub fn like(&mut self) {
        self.likes += 1;
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::required("title"));
        }
        if !(1..=5).contains(&self.impact) {
            return Err(ValidationError::out_of_range(
                "impact",
                "impact must be between 1 and 5",
            ));
        }
        if !(1..=5).contains(&self.feasibility) {
            return Err(ValidationError::out_of_range(
                "feasibility",
                "feasibility must be between 1 and 5",
            ));
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl RecordRoot for Idea {
    type Id = IdeaId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn date(&self) -> chrono::NaiveDate {
        self.base.date
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn record_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "idea"
    }

    fn element_name() -> &'static str {
        "아이디어"
    }

    fn list_name() -> &'static str {
        "아이디어 목록"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Dialog draft for proposing or editing an idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaDraft {
    pub title: String,
    pub description: String,
    /// Selected [`IdeaCategory`] code
    pub category: String,
    /// Selected [`Department`] code
    pub department: String,
    /// Selected [`IdeaPriority`] code
    pub priority: String,
}

impl Default for IdeaDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            department: String::new(),
            priority: IdeaPriority::Medium.code().to_string(),
        }
    }
}

impl IdeaDraft {
    /// Stage an existing idea for editing
    pub fn from_record(idea: &Idea) -> Self {
        Self {
            title: idea.title.clone(),
            description: idea.description.clone(),
            category: idea.category.code().to_string(),
            department: idea.department.code().to_string(),
            priority: idea.priority.code().to_string(),
        }
    }

    /// Parse and validate the staged input
    pub fn parse(&self) -> ValidationResult<IdeaFields> {
        let title = parse_required_text("title", &self.title)?;
        let category = IdeaCategory::from_code(self.category.trim())
            .ok_or_else(|| ValidationError::unknown_code("category", &self.category))?;
        let department = Department::from_code(self.department.trim())
            .ok_or_else(|| ValidationError::unknown_code("department", &self.department))?;
        let priority = IdeaPriority::from_code(self.priority.trim())
            .ok_or_else(|| ValidationError::unknown_code("priority", &self.priority))?;
        Ok(IdeaFields {
            title,
            description: self.description.trim().to_string(),
            category,
            department,
            priority,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> IdeaDraft {
        IdeaDraft {
            title: "폐기물 업사이클링 프로그램".to_string(),
            description: "사무용품을 업사이클링하는 프로그램".to_string(),
            category: "circular-economy".to_string(),
            department: "environment".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_submission_defaults() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 18).unwrap();
        let idea = Idea::new_for_insert(date, draft().parse().unwrap());
        assert_eq!(idea.status, IdeaStatus::Submitted);
        assert_eq!(idea.priority, IdeaPriority::Medium);
        assert_eq!(idea.author, CURRENT_USER);
        assert_eq!((idea.impact, idea.feasibility), (3, 3));
        assert_eq!((idea.likes, idea.comments), (0, 0));
        assert_eq!(idea.implementation_date, None);
    }

    #[test]
    fn test_edit_keeps_engagement_and_status() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 18).unwrap();
        let mut idea = Idea::new_for_insert(date, draft().parse().unwrap());
        idea.like();
        idea.like();

        let mut edited = IdeaDraft::from_record(&idea);
        edited.priority = "high".to_string();
        idea.update(edited.parse().unwrap());

        assert_eq!(idea.likes, 2);
        assert_eq!(idea.status, IdeaStatus::Submitted);
        assert_eq!(idea.priority, IdeaPriority::High);
        assert_eq!(idea.date(), date);
    }

    #[test]
    fn test_validate_rejects_scores_outside_range() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 18).unwrap();
        let mut idea = Idea::new_for_insert(date, draft().parse().unwrap());
        assert!(idea.validate().is_ok());

        idea.impact = 0;
        assert_eq!(idea.validate().unwrap_err().field, "impact");

        idea.impact = 3;
        idea.feasibility = 6;
        assert_eq!(idea.validate().unwrap_err().field, "feasibility");
    }

    #[test]
    fn test_serde_field_names_match_wire_shape() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let mut idea = Idea::new_for_insert(date, draft().parse().unwrap());
        idea.implementation_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 20);

        let json = serde_json::to_value(&idea).unwrap();
        assert_eq!(json["category"], "circular-economy");
        assert_eq!(json["status"], "submitted");
        assert_eq!(json["implementationDate"], "2024-01-20");
        assert_eq!(json["date"], "2024-01-10");
    }
}
