use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Base part shared by all record aggregates.
///
/// `date` is the business date: stamped once at creation and never altered
/// by edits. It is distinct from the lifecycle timestamps in `metadata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseRecord<Id> {
    /// Record identifier, unique within its store
    pub id: Id,
    /// Creation date shown in tables and charts
    pub date: chrono::NaiveDate,
    /// Lifecycle metadata
    pub metadata: EntityMetadata,
}

impl<Id> BaseRecord<Id> {
    /// New base stamped with the given business date
    pub fn new(id: Id, date: chrono::NaiveDate) -> Self {
        Self {
            id,
            date,
            metadata: EntityMetadata::new(),
        }
    }

    /// Bump the update timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}
