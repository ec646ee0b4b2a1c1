use crate::shared::data::seed;
use crate::shared::data::store::RecordStore;
use crate::shared::error::{DomainError, DomainResult};
use crate::shared::forms::FormSession;
use contracts::domain::a001_emission_record::{
    EmissionRecord, EmissionRecordDraft, EmissionRecordId,
};
use contracts::domain::common::{RecordId, RecordRoot};

/// Scope 1 page state: the emission ledger plus its dialog.
///
/// Owned by the caller; nothing here is global or shared.
#[derive(Debug, Default)]
pub struct EmissionSession {
    store: RecordStore<EmissionRecord>,
    form: FormSession<EmissionRecordId, EmissionRecordDraft>,
}

impl EmissionSession {
    /// Empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-loaded with the built-in sample records
    pub fn seeded() -> Self {
        let store = RecordStore::with_records(seed::emission_records()).unwrap_or_else(|error| {
            tracing::warn!(%error, "seed data rejected");
            RecordStore::new()
        });
        Self {
            store,
            form: FormSession::default(),
        }
    }

    /// Current ledger in insertion order
    pub fn records(&self) -> &[EmissionRecord] {
        self.store.list()
    }

    pub fn form(&self) -> &FormSession<EmissionRecordId, EmissionRecordDraft> {
        &self.form
    }

    // ------------------------------------------------------------------
    // Dialog lifecycle
    // ------------------------------------------------------------------

    /// Open the create dialog with a blank draft
    pub fn open_create(&mut self) {
        self.form.open_create(EmissionRecordDraft::default());
    }

    /// Open the edit dialog staged from the record with `id`
    pub fn open_edit(&mut self, id: EmissionRecordId) -> DomainResult<()> {
        let record = self.store.get(id).ok_or_else(|| DomainError::NotFound {
            entity: EmissionRecord::collection_name(),
            id: id.as_string(),
        })?;
        self.form.open_edit(id, EmissionRecordDraft::from_record(record));
        Ok(())
    }

    /// Draft of the open dialog, for field-by-field editing
    pub fn draft_mut(&mut self) -> Option<&mut EmissionRecordDraft> {
        self.form.draft_mut()
    }

    /// Close the dialog, discarding the draft
    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    /// Parse the open draft and commit it.
    ///
    /// On a validation error the dialog stays open with the draft intact, so
    /// the user can correct the input.
    pub fn submit(&mut self) -> DomainResult<EmissionRecordId> {
        let fields = self
            .form
            .draft()
            .ok_or(DomainError::FormClosed)?
            .parse()?;

        match self.form.editing_id() {
            None => {
                let record =
                    EmissionRecord::new_for_insert(chrono::Utc::now().date_naive(), fields);
                record.validate()?;
                let id = record.id();
                self.store.insert(record)?;
                self.form.cancel();
                tracing::info!(id = %id.as_string(), "emission record created");
                Ok(id)
            }
            Some(id) => {
                let record = self.store.get_mut(id).ok_or_else(|| DomainError::NotFound {
                    entity: EmissionRecord::collection_name(),
                    id: id.as_string(),
                })?;
                let mut updated = record.clone();
                updated.update(fields);
                updated.validate()?;
                updated.before_write();
                *record = updated;
                self.form.cancel();
                tracing::info!(id = %id.as_string(), "emission record updated");
                Ok(id)
            }
        }
    }

    // ------------------------------------------------------------------
    // Direct actions
    // ------------------------------------------------------------------

    /// Remove the record with `id`
    pub fn delete(&mut self, id: EmissionRecordId) -> DomainResult<EmissionRecord> {
        let record = self.store.remove(id)?;
        // A dialog editing the deleted record has nothing left to commit
        if self.form.editing_id() == Some(id) {
            self.form.cancel();
        }
        tracing::info!(id = %id.as_string(), "emission record deleted");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(draft: &mut EmissionRecordDraft, source: &str, amount: &str) {
        draft.source = source.to_string();
        draft.emission_type = "fuel-combustion".to_string();
        draft.amount = amount.to_string();
    }

    #[test]
    fn test_seeded_total_is_244() {
        let session = EmissionSession::seeded();
        assert_eq!(session.records().len(), 3);
        let total: f64 = session.records().iter().map(|r| r.amount).sum();
        assert!((total - 244.0).abs() < 1e-9);
    }

    #[test]
    fn test_create_flow_appends_record() {
        let mut session = EmissionSession::new();
        session.open_create();
        fill(session.draft_mut().unwrap(), "지게차", "12.5");

        let id = session.submit().unwrap();

        assert_eq!(session.records().len(), 1);
        assert_eq!(session.records()[0].id(), id);
        assert_eq!(session.records()[0].source, "지게차");
        assert!(!session.form().is_open());
    }

    #[test]
    fn test_invalid_draft_keeps_dialog_open() {
        let mut session = EmissionSession::new();
        session.open_create();
        fill(session.draft_mut().unwrap(), "지게차", "abc");

        let err = session.submit().unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(session.form().is_open());
        assert!(session.records().is_empty());
        // the typed input survives for correction
        assert_eq!(session.form().draft().unwrap().amount, "abc");
    }

    #[test]
    fn test_edit_flow_preserves_id_and_date() {
        let mut session = EmissionSession::seeded();
        let id = session.records()[1].id();
        let date = session.records()[1].date();

        session.open_edit(id).unwrap();
        session.draft_mut().unwrap().amount = "130.0".to_string();
        session.submit().unwrap();

        let record = session.records().iter().find(|r| r.id() == id).unwrap();
        assert_eq!(record.amount, 130.0);
        assert_eq!(record.date(), date);
        assert_eq!(session.records().len(), 3);
    }

    #[test]
    fn test_edit_unknown_id_is_not_found() {
        let mut session = EmissionSession::seeded();
        let stale = EmissionRecordId::new_v4();

        let err = session.open_edit(stale).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(!session.form().is_open());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut session = EmissionSession::seeded();
        let id = session.records()[0].id();

        let removed = session.delete(id).unwrap();

        assert_eq!(removed.source, "사무용 차량");
        assert_eq!(session.records().len(), 2);
        assert!(session.delete(id).is_err());
    }

    #[test]
    fn test_delete_closes_matching_edit_dialog() {
        let mut session = EmissionSession::seeded();
        let id = session.records()[0].id();
        session.open_edit(id).unwrap();

        session.delete(id).unwrap();

        assert!(!session.form().is_open());
    }

    #[test]
    fn test_submit_without_dialog_is_rejected() {
        let mut session = EmissionSession::new();
        assert!(matches!(session.submit(), Err(DomainError::FormClosed)));
    }
}
