use contracts::domain::common::{RecordId, RecordRoot};
use thiserror::Error;

/// Store-level failure.
///
/// Mutating a record that does not exist is a reportable error, not a silent
/// no-op: the caller always learns whether its id was stale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} with id {id} already exists")]
    Duplicate { entity: &'static str, id: String },
}

/// Ordered in-memory collection of one record kind.
///
/// Each page session owns exactly one of these; there is no shared or global
/// store. Insertion order is preserved and is the order `list` reports.
#[derive(Debug, Clone)]
pub struct RecordStore<R: RecordRoot> {
    records: Vec<R>,
}

impl<R: RecordRoot> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RecordRoot> RecordStore<R> {
    /// Empty store
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Store pre-populated with seed records.
    ///
    /// Seed ids are expected to be unique; duplicates are rejected the same
    /// way `insert` rejects them.
    pub fn with_records(records: Vec<R>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// Current snapshot in insertion order
    pub fn list(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: R::Id) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn get_mut(&mut self, id: R::Id) -> Option<&mut R> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    /// Append a record; the id must not already be present
    pub fn insert(&mut self, record: R) -> Result<(), StoreError> {
        if self.contains(record.id()) {
            return Err(StoreError::Duplicate {
                entity: R::collection_name(),
                id: record.id().as_string(),
            });
        }
        tracing::debug!(
            entity = R::collection_name(),
            id = %record.id().as_string(),
            "record inserted"
        );
        self.records.push(record);
        Ok(())
    }

    /// Remove and return the record with `id`
    pub fn remove(&mut self, id: R::Id) -> Result<R, StoreError> {
        let position = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: R::collection_name(),
                id: id.as_string(),
            })?;
        tracing::debug!(
            entity = R::collection_name(),
            id = %id.as_string(),
            "record removed"
        );
        Ok(self.records.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_emission_record::{EmissionFields, EmissionRecord};
    use contracts::enums::EmissionType;

    fn record(amount: f64) -> EmissionRecord {
        EmissionRecord::new_for_insert(
            chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            EmissionFields {
                source: "보일러".to_string(),
                emission_type: EmissionType::FuelCombustion,
                amount,
                unit: "tCO2e".to_string(),
                location: "본사".to_string(),
            },
        )
    }

    #[test]
    fn test_insert_then_list_grows_by_one() {
        let mut store = RecordStore::new();
        assert!(store.is_empty());

        let r = record(45.2);
        let id = r.id();
        store.insert(r).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].amount, 45.2);
        assert!(store.contains(id));
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut store = RecordStore::new();
        let r = record(10.0);
        let dup = r.clone();
        store.insert(r).unwrap();

        let err = store.insert(dup).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_shrinks_by_exactly_one() {
        let mut store =
            RecordStore::with_records(vec![record(1.0), record(2.0), record(3.0)]).unwrap();
        let id = store.list()[1].id();

        store.remove(id).unwrap();

        assert_eq!(store.len(), 2);
        assert!(!store.contains(id));
        // insertion order of the survivors is intact
        assert_eq!(store.list()[0].amount, 1.0);
        assert_eq!(store.list()[1].amount, 3.0);
    }

    #[test]
    fn test_remove_unknown_id_is_not_found() {
        let mut store = RecordStore::with_records(vec![record(1.0)]).unwrap();
        let stale = record(9.9).id();

        let err = store.remove(stale).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(store.len(), 1);
    }
}
