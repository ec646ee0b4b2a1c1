use crate::domain::common::{BaseRecord, EntityMetadata, RecordId, RecordRoot};
use crate::enums::{DisposalMethod, WasteType};
use crate::shared::validation::{
    parse_non_negative, parse_required_text, ValidationError, ValidationResult,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default unit for waste batches
pub const DEFAULT_UNIT: &str = "kg";

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a waste record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WasteRecordId(pub Uuid);

impl WasteRecordId {
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

impl RecordId for WasteRecordId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(WasteRecordId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Waste batch handled by the circular-economy programme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteRecord {
    #[serde(flatten)]
    pub base: BaseRecord<WasteRecordId>,

    #[serde(rename = "type")]
    pub waste_type: WasteType,

    pub amount: f64,
    pub unit: String,
    pub disposal: DisposalMethod,

    /// Share of this batch actually recycled, 0..=100
    #[serde(rename = "recyclingRate")]
    pub recycling_rate: f64,

    pub location: String,
}

/// Typed field set produced by a successfully parsed draft
#[derive(Debug, Clone, PartialEq)]
pub struct WasteFields {
    pub waste_type: WasteType,
    pub amount: f64,
    pub unit: String,
    pub disposal: DisposalMethod,
    pub recycling_rate: f64,
    pub location: String,
}

impl WasteRecord {
    /// Create a new record dated `date`
    pub fn new_for_insert(date: chrono::NaiveDate, fields: WasteFields) -> Self {
        Self {
            base: BaseRecord::new(WasteRecordId::new_v4(), date),
            waste_type: fields.waste_type,
            amount: fields.amount,
            unit: fields.unit,
            disposal: fields.disposal,
            recycling_rate: fields.recycling_rate,
            location: fields.location,
        }
    }

    /// Replace the editable fields; id and date stay untouched
    pub fn update(&mut self, fields: WasteFields) {
        self.waste_type = fields.waste_type;
        self.amount = fields.amount;
        self.unit = fields.unit;
        self.disposal = fields.disposal;
        self.recycling_rate = fields.recycling_rate;
        self.location = fields.location;
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.amount.is_finite() && self.amount >= 0.0) {
            return Err(ValidationError::out_of_range(
                "amount",
                "amount must be a non-negative number",
            ));
        }
        if !(0.0..=100.0).contains(&self.recycling_rate) {
            return Err(ValidationError::out_of_range(
                "recyclingRate",
                "recycling rate must be between 0 and 100",
            ));
        }
        if self.unit.trim().is_empty() {
            return Err(ValidationError::required("unit"));
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl RecordRoot for WasteRecord {
    type Id = WasteRecordId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "waste_record"
    }

    fn element_name() -> &'static str {
        "폐기물 처리 기록"
    }

    fn list_name() -> &'static str {
        "폐기물 처리 기록 목록"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Dialog draft for creating/editing a waste record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteRecordDraft {
    /// Selected [`WasteType`] code
    #[serde(rename = "type")]
    pub waste_type: String,
    pub amount: String,
    pub unit: String,
    /// Selected [`DisposalMethod`] code
    pub disposal: String,
    #[serde(rename = "recyclingRate")]
    pub recycling_rate: String,
    pub location: String,
}

impl Default for WasteRecordDraft {
    fn default() -> Self {
        Self {
            waste_type: String::new(),
            amount: String::new(),
            unit: DEFAULT_UNIT.to_string(),
            disposal: String::new(),
            recycling_rate: String::new(),
            location: String::new(),
        }
    }
}

impl WasteRecordDraft {
    /// Stage an existing record for editing
    pub fn from_record(record: &WasteRecord) -> Self {
        Self {
            waste_type: record.waste_type.code().to_string(),
            amount: record.amount.to_string(),
            unit: record.unit.clone(),
            disposal: record.disposal.code().to_string(),
            recycling_rate: record.recycling_rate.to_string(),
            location: record.location.clone(),
        }
    }

    /// Parse and validate the staged input
    pub fn parse(&self) -> ValidationResult<WasteFields> {
        let waste_type = WasteType::from_code(self.waste_type.trim())
            .ok_or_else(|| ValidationError::unknown_code("type", &self.waste_type))?;
        let amount = parse_non_negative("amount", &self.amount)?;
        let unit = parse_required_text("unit", &self.unit)?;
        let disposal = DisposalMethod::from_code(self.disposal.trim())
            .ok_or_else(|| ValidationError::unknown_code("disposal", &self.disposal))?;
        let recycling_rate = parse_non_negative("recyclingRate", &self.recycling_rate)?;
        if recycling_rate > 100.0 {
            return Err(ValidationError::out_of_range(
                "recyclingRate",
                "recycling rate must be between 0 and 100",
            ));
        }
        Ok(WasteFields {
            waste_type,
            amount,
            unit,
            disposal,
            recycling_rate,
            location: self.location.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_draft() {
        let draft = WasteRecordDraft {
            waste_type: "paper".to_string(),
            amount: "2500".to_string(),
            disposal: "recycling".to_string(),
            recycling_rate: "95".to_string(),
            location: "본사".to_string(),
            ..Default::default()
        };
        let fields = draft.parse().unwrap();
        assert_eq!(fields.waste_type, WasteType::Paper);
        assert_eq!(fields.disposal, DisposalMethod::Recycling);
        assert_eq!(fields.recycling_rate, 95.0);
    }

    #[test]
    fn test_parse_rejects_rate_above_100() {
        let draft = WasteRecordDraft {
            waste_type: "glass".to_string(),
            amount: "10".to_string(),
            disposal: "recycling".to_string(),
            recycling_rate: "120".to_string(),
            ..Default::default()
        };
        let err = draft.parse().unwrap_err();
        assert_eq!(err.field, "recyclingRate");
    }
}
