use crate::shared::data::seed;
use crate::shared::data::store::RecordStore;
use crate::shared::error::{DomainError, DomainResult};
use crate::shared::forms::FormSession;
use contracts::domain::a003_value_chain_record::{
    ValueChainRecord, ValueChainRecordDraft, ValueChainRecordId,
};
use contracts::domain::common::{RecordId, RecordRoot};

/// Scope 3 page state: the value-chain ledger plus its dialog
#[derive(Debug, Default)]
pub struct ValueChainSession {
    store: RecordStore<ValueChainRecord>,
    form: FormSession<ValueChainRecordId, ValueChainRecordDraft>,
}

impl ValueChainSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-loaded with the built-in sample records
    pub fn seeded() -> Self {
        let store =
            RecordStore::with_records(seed::value_chain_records()).unwrap_or_else(|error| {
                tracing::warn!(%error, "seed data rejected");
                RecordStore::new()
            });
        Self {
            store,
            form: FormSession::default(),
        }
    }

    pub fn records(&self) -> &[ValueChainRecord] {
        self.store.list()
    }

    pub fn form(&self) -> &FormSession<ValueChainRecordId, ValueChainRecordDraft> {
        &self.form
    }

    pub fn open_create(&mut self) {
        self.form.open_create(ValueChainRecordDraft::default());
    }

    pub fn open_edit(&mut self, id: ValueChainRecordId) -> DomainResult<()> {
        let record = self.store.get(id).ok_or_else(|| DomainError::NotFound {
            entity: ValueChainRecord::collection_name(),
            id: id.as_string(),
        })?;
        self.form
            .open_edit(id, ValueChainRecordDraft::from_record(record));
        Ok(())
    }

    pub fn draft_mut(&mut self) -> Option<&mut ValueChainRecordDraft> {
        self.form.draft_mut()
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    /// Parse the open draft and commit it; the dialog stays open on a
    /// validation error
    pub fn submit(&mut self) -> DomainResult<ValueChainRecordId> {
        let fields = self
            .form
            .draft()
            .ok_or(DomainError::FormClosed)?
            .parse()?;

        match self.form.editing_id() {
            None => {
                let record =
                    ValueChainRecord::new_for_insert(chrono::Utc::now().date_naive(), fields);
                record.validate()?;
                let id = record.id();
                self.store.insert(record)?;
                self.form.cancel();
                tracing::info!(id = %id.as_string(), "value chain record created");
                Ok(id)
            }
            Some(id) => {
                let record = self.store.get_mut(id).ok_or_else(|| DomainError::NotFound {
                    entity: ValueChainRecord::collection_name(),
                    id: id.as_string(),
                })?;
                let mut updated = record.clone();
                updated.update(fields);
                updated.validate()?;
                updated.before_write();
                *record = updated;
                self.form.cancel();
                tracing::info!(id = %id.as_string(), "value chain record updated");
                Ok(id)
            }
        }
    }

    pub fn delete(&mut self, id: ValueChainRecordId) -> DomainResult<ValueChainRecord> {
        let record = self.store.remove(id)?;
        if self.form.editing_id() == Some(id) {
            self.form.cancel();
        }
        tracing::info!(id = %id.as_string(), "value chain record deleted");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::ReductionStatus;

    #[test]
    fn test_seeded_total_and_status_split() {
        let session = ValueChainSession::seeded();
        let total: f64 = session.records().iter().map(|r| r.amount).sum();
        assert!((total - 1046.8).abs() < 1e-9);

        let reduced: f64 = session
            .records()
            .iter()
            .filter(|r| r.status == ReductionStatus::Reduced)
            .map(|r| r.amount)
            .sum();
        assert!((reduced - 416.3).abs() < 1e-9);
    }

    #[test]
    fn test_edit_changes_status() {
        let mut session = ValueChainSession::seeded();
        let id = session.records()[2].id();

        session.open_edit(id).unwrap();
        session.draft_mut().unwrap().status = "eliminated".to_string();
        session.submit().unwrap();

        let record = session.records().iter().find(|r| r.id() == id).unwrap();
        assert_eq!(record.status, ReductionStatus::Eliminated);
    }

    #[test]
    fn test_create_defaults_to_active_status() {
        let mut session = ValueChainSession::new();
        session.open_create();
        {
            let draft = session.draft_mut().unwrap();
            draft.category = "transport".to_string();
            draft.activity = "해상 운송".to_string();
            draft.amount = "42.0".to_string();
            draft.supplier = "해운사".to_string();
        }

        session.submit().unwrap();
        assert_eq!(session.records()[0].status, ReductionStatus::Active);
    }
}
