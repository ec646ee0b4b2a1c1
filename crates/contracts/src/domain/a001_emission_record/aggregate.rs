use crate::domain::common::{BaseRecord, EntityMetadata, RecordId, RecordRoot};
use crate::enums::EmissionType;
use crate::shared::validation::{
    parse_non_negative, parse_required_text, ValidationError, ValidationResult,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default unit for direct emissions
pub const DEFAULT_UNIT: &str = "tCO2e";

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a Scope 1 emission record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmissionRecordId(pub Uuid);

impl EmissionRecordId {
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

impl RecordId for EmissionRecordId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(EmissionRecordId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Direct (Scope 1) emission record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionRecord {
    #[serde(flatten)]
    pub base: BaseRecord<EmissionRecordId>,

    /// Emission source ("보일러", "사무용 차량", ...)
    pub source: String,

    #[serde(rename = "type")]
    pub emission_type: EmissionType,

    /// Emitted amount in `unit`
    pub amount: f64,
    pub unit: String,
    pub location: String,
}

/// Typed field set produced by a successfully parsed draft
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionFields {
    pub source: String,
    pub emission_type: EmissionType,
    pub amount: f64,
    pub unit: String,
    pub location: String,
}

impl EmissionRecord {
    /// Create a new record dated `date`
    pub fn new_for_insert(date: chrono::NaiveDate, fields: EmissionFields) -> Self {
        Self {
            base: BaseRecord::new(EmissionRecordId::new_v4(), date),
            source: fields.source,
            emission_type: fields.emission_type,
            amount: fields.amount,
            unit: fields.unit,
            location: fields.location,
        }
    }

    /// Replace the editable fields; id and date stay untouched
    pub fn update(&mut self, fields: EmissionFields) {
        self.source = fields.source;
        self.emission_type = fields.emission_type;
        self.amount = fields.amount;
        self.unit = fields.unit;
        self.location = fields.location;
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.source.trim().is_empty() {
            return Err(ValidationError::required("source"));
        }
        if !(self.amount.is_finite() && self.amount >= 0.0) {
            return Err(ValidationError::out_of_range(
                "amount",
                "amount must be a non-negative number",
            ));
        }
        if self.unit.trim().is_empty() {
            return Err(ValidationError::required("unit"));
        }
        Ok(())
    }

    /// Hook before any write
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl RecordRoot for EmissionRecord {
    type Id = EmissionRecordId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "emission_record"
    }

    fn element_name() -> &'static str {
        "배출량 기록"
    }

    fn list_name() -> &'static str {
        "배출량 기록 목록"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Dialog draft for creating/editing an emission record.
///
/// Numeric input is staged as text and only becomes a number through
/// [`EmissionRecordDraft::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionRecordDraft {
    pub source: String,
    /// Selected [`EmissionType`] code
    #[serde(rename = "type")]
    pub emission_type: String,
    pub amount: String,
    pub unit: String,
    pub location: String,
}

impl Default for EmissionRecordDraft {
    fn default() -> Self {
        Self {
            source: String::new(),
            emission_type: String::new(),
            amount: String::new(),
            unit: DEFAULT_UNIT.to_string(),
            location: String::new(),
        }
    }
}

impl EmissionRecordDraft {
    /// Stage an existing record for editing
    pub fn from_record(record: &EmissionRecord) -> Self {
        Self {
            source: record.source.clone(),
            emission_type: record.emission_type.code().to_string(),
            amount: record.amount.to_string(),
            unit: record.unit.clone(),
            location: record.location.clone(),
        }
    }

    /// Parse and validate the staged input
    pub fn parse(&self) -> ValidationResult<EmissionFields> {
        let source = parse_required_text("source", &self.source)?;
        let emission_type = EmissionType::from_code(self.emission_type.trim())
            .ok_or_else(|| ValidationError::unknown_code("type", &self.emission_type))?;
        let amount = parse_non_negative("amount", &self.amount)?;
        let unit = parse_required_text("unit", &self.unit)?;
        Ok(EmissionFields {
            source,
            emission_type,
            amount,
            unit,
            location: self.location.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EmissionRecordDraft {
        EmissionRecordDraft {
            source: "보일러".to_string(),
            emission_type: "fuel-combustion".to_string(),
            amount: "120.5".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_valid_draft() {
        let fields = draft().parse().unwrap();
        assert_eq!(fields.source, "보일러");
        assert_eq!(fields.emission_type, EmissionType::FuelCombustion);
        assert_eq!(fields.amount, 120.5);
        assert_eq!(fields.unit, DEFAULT_UNIT);
    }

    #[test]
    fn test_parse_rejects_bad_amount() {
        let mut d = draft();
        d.amount = "12..5".to_string();
        let err = d.parse().unwrap_err();
        assert_eq!(err.field, "amount");
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let mut d = draft();
        d.emission_type = "combustion".to_string();
        let err = d.parse().unwrap_err();
        assert_eq!(err.field, "type");
    }

    #[test]
    fn test_validate_guards_constructed_records() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut record = EmissionRecord::new_for_insert(date, draft().parse().unwrap());
        assert!(record.validate().is_ok());

        record.amount = f64::NAN;
        assert_eq!(record.validate().unwrap_err().field, "amount");

        record.amount = 120.5;
        record.source = "  ".to_string();
        assert_eq!(record.validate().unwrap_err().field, "source");
    }

    #[test]
    fn test_update_preserves_id_and_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut record = EmissionRecord::new_for_insert(date, draft().parse().unwrap());
        let id = record.id();

        let mut edited = EmissionRecordDraft::from_record(&record);
        edited.amount = "99.9".to_string();
        record.update(edited.parse().unwrap());

        assert_eq!(record.id(), id);
        assert_eq!(record.date(), date);
        assert_eq!(record.amount, 99.9);
    }
}
