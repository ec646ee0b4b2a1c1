use crate::domain::common::{BaseRecord, EntityMetadata, RecordId, RecordRoot};
use crate::enums::{ReductionStatus, ValueChainCategory};
use crate::shared::validation::{
    parse_non_negative, parse_required_text, ValidationError, ValidationResult,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default unit for value-chain emissions
pub const DEFAULT_UNIT: &str = "tCO2e";

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a Scope 3 value-chain record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueChainRecordId(pub Uuid);

impl ValueChainRecordId {
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

impl RecordId for ValueChainRecordId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ValueChainRecordId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Value-chain (Scope 3) emission record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueChainRecord {
    #[serde(flatten)]
    pub base: BaseRecord<ValueChainRecordId>,

    pub category: ValueChainCategory,

    /// Activity description ("IT 장비 구매", "화물 운송", ...)
    pub activity: String,
    pub amount: f64,
    pub unit: String,
    pub supplier: String,
    pub status: ReductionStatus,
}

/// Typed field set produced by a successfully parsed draft
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChainFields {
    pub category: ValueChainCategory,
    pub activity: String,
    pub amount: f64,
    pub unit: String,
    pub supplier: String,
    pub status: ReductionStatus,
}

impl ValueChainRecord {
    /// Create a new record dated `date`
    pub fn new_for_insert(date: chrono::NaiveDate, fields: ValueChainFields) -> Self {
        Self {
            base: BaseRecord::new(ValueChainRecordId::new_v4(), date),
            category: fields.category,
            activity: fields.activity,
            amount: fields.amount,
            unit: fields.unit,
            supplier: fields.supplier,
            status: fields.status,
        }
    }

    /// Replace the editable fields; id and date stay untouched
    pub fn update(&mut self, fields: ValueChainFields) {
        self.category = fields.category;
        self.activity = fields.activity;
        self.amount = fields.amount;
        self.unit = fields.unit;
        self.supplier = fields.supplier;
        self.status = fields.status;
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.activity.trim().is_empty() {
            return Err(ValidationError::required("activity"));
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

impl RecordRoot for ValueChainRecord {
    type Id = ValueChainRecordId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "value_chain_record"
    }

    fn element_name() -> &'static str {
        "밸류체인 배출량 기록"
    }

    fn list_name() -> &'static str {
        "밸류체인 배출량 기록 목록"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Dialog draft for creating/editing a value-chain record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueChainRecordDraft {
    /// Selected [`ValueChainCategory`] code
    pub category: String,
    pub activity: String,
    pub amount: String,
    pub unit: String,
    pub supplier: String,
    /// Selected [`ReductionStatus`] code
    pub status: String,
}

impl Default for ValueChainRecordDraft {
    fn default() -> Self {
        Self {
            category: String::new(),
            activity: String::new(),
            amount: String::new(),
            unit: DEFAULT_UNIT.to_string(),
            supplier: String::new(),
            status: ReductionStatus::Active.code().to_string(),
        }
    }
}

impl ValueChainRecordDraft {
    /// Stage an existing record for editing
    pub fn from_record(record: &ValueChainRecord) -> Self {
        Self {
            category: record.category.code().to_string(),
            activity: record.activity.clone(),
            amount: record.amount.to_string(),
            unit: record.unit.clone(),
            supplier: record.supplier.clone(),
            status: record.status.code().to_string(),
        }
    }

    /// Parse and validate the staged input
    pub fn parse(&self) -> ValidationResult<ValueChainFields> {
        let category = ValueChainCategory::from_code(self.category.trim())
            .ok_or_else(|| ValidationError::unknown_code("category", &self.category))?;
        let activity = parse_required_text("activity", &self.activity)?;
        let amount = parse_non_negative("amount", &self.amount)?;
        let unit = parse_required_text("unit", &self.unit)?;
        let status = ReductionStatus::from_code(self.status.trim())
            .ok_or_else(|| ValidationError::unknown_code("status", &self.status))?;
        Ok(ValueChainFields {
            category,
            activity,
            amount,
            unit,
            supplier: self.supplier.trim().to_string(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_draft() {
        let draft = ValueChainRecordDraft {
            category: "business-travel".to_string(),
            activity: "항공 여행".to_string(),
            amount: "180.3".to_string(),
            supplier: "대한항공".to_string(),
            ..Default::default()
        };
        let fields = draft.parse().unwrap();
        assert_eq!(fields.category, ValueChainCategory::BusinessTravel);
        assert_eq!(fields.status, ReductionStatus::Active);
        assert_eq!(fields.amount, 180.3);
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let draft = ValueChainRecordDraft {
            category: "transport".to_string(),
            activity: "화물 운송".to_string(),
            amount: "320.5".to_string(),
            status: "done".to_string(),
            ..Default::default()
        };
        let err = draft.parse().unwrap_err();
        assert_eq!(err.field, "status");
    }
}
