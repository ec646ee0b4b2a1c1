use crate::shared::data::seed;
use crate::shared::data::store::RecordStore;
use crate::shared::error::{DomainError, DomainResult};
use crate::shared::forms::FormSession;
use contracts::domain::a004_waste_record::{WasteRecord, WasteRecordDraft, WasteRecordId};
use contracts::domain::common::{RecordId, RecordRoot};

/// Circular-economy page state: the waste ledger plus its dialog
#[derive(Debug, Default)]
pub struct WasteSession {
    store: RecordStore<WasteRecord>,
    form: FormSession<WasteRecordId, WasteRecordDraft>,
}

impl WasteSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-loaded with the built-in sample records
    pub fn seeded() -> Self {
        let store = RecordStore::with_records(seed::waste_records()).unwrap_or_else(|error| {
            tracing::warn!(%error, "seed data rejected");
            RecordStore::new()
        });
        Self {
            store,
            form: FormSession::default(),
        }
    }

    pub fn records(&self) -> &[WasteRecord] {
        self.store.list()
    }

    pub fn form(&self) -> &FormSession<WasteRecordId, WasteRecordDraft> {
        &self.form
    }

    pub fn open_create(&mut self) {
        self.form.open_create(WasteRecordDraft::default());
    }

    pub fn open_edit(&mut self, id: WasteRecordId) -> DomainResult<()> {
        let record = self.store.get(id).ok_or_else(|| DomainError::NotFound {
            entity: WasteRecord::collection_name(),
            id: id.as_string(),
        })?;
        self.form.open_edit(id, WasteRecordDraft::from_record(record));
        Ok(())
    }

    pub fn draft_mut(&mut self) -> Option<&mut WasteRecordDraft> {
        self.form.draft_mut()
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    /// Parse the open draft and commit it; the dialog stays open on a
    /// validation error
    pub fn submit(&mut self) -> DomainResult<WasteRecordId> {
        let fields = self
            .form
            .draft()
            .ok_or(DomainError::FormClosed)?
            .parse()?;

        match self.form.editing_id() {
            None => {
                let record = WasteRecord::new_for_insert(chrono::Utc::now().date_naive(), fields);
                record.validate()?;
                let id = record.id();
                self.store.insert(record)?;
                self.form.cancel();
                tracing::info!(id = %id.as_string(), "waste record created");
                Ok(id)
            }
            Some(id) => {
                let record = self.store.get_mut(id).ok_or_else(|| DomainError::NotFound {
                    entity: WasteRecord::collection_name(),
                    id: id.as_string(),
                })?;
                let mut updated = record.clone();
                updated.update(fields);
                updated.validate()?;
                updated.before_write();
                *record = updated;
                self.form.cancel();
                tracing::info!(id = %id.as_string(), "waste record updated");
                Ok(id)
            }
        }
    }

    pub fn delete(&mut self, id: WasteRecordId) -> DomainResult<WasteRecord> {
        let record = self.store.remove(id)?;
        if self.form.editing_id() == Some(id) {
            self.form.cancel();
        }
        tracing::info!(id = %id.as_string(), "waste record deleted");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_total_waste() {
        let session = WasteSession::seeded();
        let total: f64 = session.records().iter().map(|r| r.amount).sum();
        assert_eq!(total, 4020.0);
    }

    #[test]
    fn test_recycling_rate_over_100_is_rejected() {
        let mut session = WasteSession::new();
        session.open_create();
        {
            let draft = session.draft_mut().unwrap();
            draft.waste_type = "glass".to_string();
            draft.amount = "50".to_string();
            draft.disposal = "recycling".to_string();
            draft.recycling_rate = "120".to_string();
        }

        let err = session.submit().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(session.form().is_open());
    }

    #[test]
    fn test_create_landfill_batch() {
        let mut session = WasteSession::new();
        session.open_create();
        {
            let draft = session.draft_mut().unwrap();
            draft.waste_type = "other".to_string();
            draft.amount = "300".to_string();
            draft.disposal = "landfill".to_string();
            draft.recycling_rate = "0".to_string();
        }

        session.submit().unwrap();

        assert_eq!(session.records().len(), 1);
        assert_eq!(
            session.records()[0].disposal,
            contracts::enums::DisposalMethod::Landfill
        );
    }
}
