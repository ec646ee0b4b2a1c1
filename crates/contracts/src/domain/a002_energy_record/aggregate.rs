use crate::domain::common::{BaseRecord, EntityMetadata, RecordId, RecordRoot};
use crate::enums::EnergyType;
use crate::shared::validation::{
    parse_non_negative, parse_required_text, ValidationError, ValidationResult,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default unit for purchased energy
pub const DEFAULT_UNIT: &str = "kWh";

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a Scope 2 energy record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnergyRecordId(pub Uuid);

impl EnergyRecordId {
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

impl RecordId for EnergyRecordId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(EnergyRecordId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Purchased energy (Scope 2) record.
///
/// Amounts are kept in the unit they were reported in (kWh, GJ, ...); the
/// renewable flag partitions aggregates into renewable vs conventional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyRecord {
    #[serde(flatten)]
    pub base: BaseRecord<EnergyRecordId>,

    #[serde(rename = "type")]
    pub energy_type: EnergyType,

    /// Supplier ("한국전력공사", ...)
    pub source: String,
    pub amount: f64,
    pub unit: String,
    pub location: String,
    pub renewable: bool,
}

/// Typed field set produced by a successfully parsed draft
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyFields {
    pub energy_type: EnergyType,
    pub source: String,
    pub amount: f64,
    pub unit: String,
    pub location: String,
    pub renewable: bool,
}

impl EnergyRecord {
    /// Create a new record dated `date`
    pub fn new_for_insert(date: chrono::NaiveDate, fields: EnergyFields) -> Self {
        Self {
            base: BaseRecord::new(EnergyRecordId::new_v4(), date),
            energy_type: fields.energy_type,
            source: fields.source,
            amount: fields.amount,
            unit: fields.unit,
            location: fields.location,
            renewable: fields.renewable,
        }
    }

    /// Replace the editable fields; id and date stay untouched
    pub fn update(&mut self, fields: EnergyFields) {
        self.energy_type = fields.energy_type;
        self.source = fields.source;
        self.amount = fields.amount;
        self.unit = fields.unit;
        self.location = fields.location;
        self.renewable = fields.renewable;
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

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl RecordRoot for EnergyRecord {
    type Id = EnergyRecordId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "energy_record"
    }

    fn element_name() -> &'static str {
        "에너지 사용량 기록"
    }

    fn list_name() -> &'static str {
        "에너지 사용량 기록 목록"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Dialog draft for creating/editing an energy record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyRecordDraft {
    /// Selected [`EnergyType`] code
    #[serde(rename = "type")]
    pub energy_type: String,
    pub source: String,
    pub amount: String,
    pub unit: String,
    pub location: String,
    pub renewable: bool,
}

impl Default for EnergyRecordDraft {
    fn default() -> Self {
        Self {
            energy_type: String::new(),
            source: String::new(),
            amount: String::new(),
            unit: DEFAULT_UNIT.to_string(),
            location: String::new(),
            renewable: false,
        }
    }
}

impl EnergyRecordDraft {
    /// Stage an existing record for editing
    pub fn from_record(record: &EnergyRecord) -> Self {
        Self {
            energy_type: record.energy_type.code().to_string(),
            source: record.source.clone(),
            amount: record.amount.to_string(),
            unit: record.unit.clone(),
            location: record.location.clone(),
            renewable: record.renewable,
        }
    }

    /// Parse and validate the staged input
    pub fn parse(&self) -> ValidationResult<EnergyFields> {
        let energy_type = EnergyType::from_code(self.energy_type.trim())
            .ok_or_else(|| ValidationError::unknown_code("type", &self.energy_type))?;
        let source = parse_required_text("source", &self.source)?;
        let amount = parse_non_negative("amount", &self.amount)?;
        let unit = parse_required_text("unit", &self.unit)?;
        Ok(EnergyFields {
            energy_type,
            source,
            amount,
            unit,
            location: self.location.trim().to_string(),
            renewable: self.renewable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_draft() {
        let draft = EnergyRecordDraft {
            energy_type: "electricity".to_string(),
            source: "재생에너지".to_string(),
            amount: "5000".to_string(),
            renewable: true,
            ..Default::default()
        };
        let fields = draft.parse().unwrap();
        assert_eq!(fields.energy_type, EnergyType::Electricity);
        assert_eq!(fields.amount, 5000.0);
        assert!(fields.renewable);
    }

    #[test]
    fn test_parse_requires_type_selection() {
        let draft = EnergyRecordDraft {
            source: "한국전력공사".to_string(),
            amount: "15000".to_string(),
            ..Default::default()
        };
        let err = draft.parse().unwrap_err();
        assert_eq!(err.field, "type");
    }
}
