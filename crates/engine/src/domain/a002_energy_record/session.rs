use crate::shared::data::seed;
use crate::shared::data::store::RecordStore;
use crate::shared::error::{DomainError, DomainResult};
use crate::shared::forms::FormSession;
use contracts::domain::a002_energy_record::{EnergyRecord, EnergyRecordDraft, EnergyRecordId};
use contracts::domain::common::{RecordId, RecordRoot};

/// Scope 2 page state: the purchased-energy ledger plus its dialog
#[derive(Debug, Default)]
pub struct EnergySession {
    store: RecordStore<EnergyRecord>,
    form: FormSession<EnergyRecordId, EnergyRecordDraft>,
}

impl EnergySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-loaded with the built-in sample records
    pub fn seeded() -> Self {
        let store = RecordStore::with_records(seed::energy_records()).unwrap_or_else(|error| {
            tracing::warn!(%error, "seed data rejected");
            RecordStore::new()
        });
        Self {
            store,
            form: FormSession::default(),
        }
    }

    pub fn records(&self) -> &[EnergyRecord] {
        self.store.list()
    }

    pub fn form(&self) -> &FormSession<EnergyRecordId, EnergyRecordDraft> {
        &self.form
    }

    pub fn open_create(&mut self) {
        self.form.open_create(EnergyRecordDraft::default());
    }

    pub fn open_edit(&mut self, id: EnergyRecordId) -> DomainResult<()> {
        let record = self.store.get(id).ok_or_else(|| DomainError::NotFound {
            entity: EnergyRecord::collection_name(),
            id: id.as_string(),
        })?;
        self.form.open_edit(id, EnergyRecordDraft::from_record(record));
        Ok(())
    }

    pub fn draft_mut(&mut self) -> Option<&mut EnergyRecordDraft> {
        self.form.draft_mut()
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    /// Parse the open draft and commit it; the dialog stays open on a
    /// validation error
    pub fn submit(&mut self) -> DomainResult<EnergyRecordId> {
        let fields = self
            .form
            .draft()
            .ok_or(DomainError::FormClosed)?
            .parse()?;

        match self.form.editing_id() {
            None => {
                let record = EnergyRecord::new_for_insert(chrono::Utc::now().date_naive(), fields);
                record.validate()?;
                let id = record.id();
                self.store.insert(record)?;
                self.form.cancel();
                tracing::info!(id = %id.as_string(), "energy record created");
                Ok(id)
            }
            Some(id) => {
                let record = self.store.get_mut(id).ok_or_else(|| DomainError::NotFound {
                    entity: EnergyRecord::collection_name(),
                    id: id.as_string(),
                })?;
                let mut updated = record.clone();
                updated.update(fields);
                updated.validate()?;
                updated.before_write();
                *record = updated;
                self.form.cancel();
                tracing::info!(id = %id.as_string(), "energy record updated");
                Ok(id)
            }
        }
    }

    pub fn delete(&mut self, id: EnergyRecordId) -> DomainResult<EnergyRecord> {
        let record = self.store.remove(id)?;
        if self.form.editing_id() == Some(id) {
            self.form.cancel();
        }
        tracing::info!(id = %id.as_string(), "energy record deleted");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_renewable_split() {
        let session = EnergySession::seeded();
        let renewable: f64 = session
            .records()
            .iter()
            .filter(|r| r.renewable)
            .map(|r| r.amount)
            .sum();
        assert_eq!(renewable, 5000.0);
        assert_eq!(session.records().len(), 3);
    }

    #[test]
    fn test_create_with_renewable_flag() {
        let mut session = EnergySession::new();
        session.open_create();
        {
            let draft = session.draft_mut().unwrap();
            draft.energy_type = "electricity".to_string();
            draft.source = "태양광 발전".to_string();
            draft.amount = "1200".to_string();
            draft.renewable = true;
        }

        session.submit().unwrap();

        assert_eq!(session.records().len(), 1);
        assert!(session.records()[0].renewable);
        assert_eq!(session.records()[0].amount, 1200.0);
    }

    #[test]
    fn test_unknown_energy_type_is_rejected() {
        let mut session = EnergySession::new();
        session.open_create();
        {
            let draft = session.draft_mut().unwrap();
            draft.energy_type = "diesel".to_string();
            draft.source = "발전기".to_string();
            draft.amount = "10".to_string();
        }

        let err = session.submit().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(session.records().is_empty());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut session = EnergySession::seeded();
        let id = session.records()[0].id();
        session.open_edit(id).unwrap();
        session.draft_mut().unwrap().amount = "99999".to_string();

        session.cancel();

        assert!(!session.form().is_open());
        assert_eq!(session.records()[0].amount, 15000.0);
    }
}
