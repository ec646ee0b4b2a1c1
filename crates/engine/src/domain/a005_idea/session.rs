use crate::shared::data::seed;
use crate::shared::data::store::RecordStore;
use crate::shared::error::{DomainError, DomainResult};
use crate::shared::forms::FormSession;
use contracts::domain::a005_idea::{Idea, IdeaDraft, IdeaId};
use contracts::domain::common::{RecordId, RecordRoot};

/// Ideas page state: the idea board plus its submit/edit dialog
#[derive(Debug, Default)]
pub struct IdeaSession {
    store: RecordStore<Idea>,
    form: FormSession<IdeaId, IdeaDraft>,
}

impl IdeaSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-loaded with the built-in sample ideas
    pub fn seeded() -> Self {
        let store = RecordStore::with_records(seed::ideas()).unwrap_or_else(|error| {
            tracing::warn!(%error, "seed data rejected");
            RecordStore::new()
        });
        Self {
            store,
            form: FormSession::default(),
        }
    }

    pub fn ideas(&self) -> &[Idea] {
        self.store.list()
    }

    pub fn form(&self) -> &FormSession<IdeaId, IdeaDraft> {
        &self.form
    }

    pub fn open_create(&mut self) {
        self.form.open_create(IdeaDraft::default());
    }

    pub fn open_edit(&mut self, id: IdeaId) -> DomainResult<()> {
        let idea = self.store.get(id).ok_or_else(|| DomainError::NotFound {
            entity: Idea::collection_name(),
            id: id.as_string(),
        })?;
        self.form.open_edit(id, IdeaDraft::from_record(idea));
        Ok(())
    }

    pub fn draft_mut(&mut self) -> Option<&mut IdeaDraft> {
        self.form.draft_mut()
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    /// Parse the open draft and commit it.
    ///
    /// A new idea starts freshly submitted with default scores; an edit only
    /// touches the dialog fields and leaves review state and engagement
    /// counters alone.
    pub fn submit(&mut self) -> DomainResult<IdeaId> {
        let fields = self
            .form
            .draft()
            .ok_or(DomainError::FormClosed)?
            .parse()?;

        match self.form.editing_id() {
            None => {
                let idea = Idea::new_for_insert(chrono::Utc::now().date_naive(), fields);
                idea.validate()?;
                let id = idea.id();
                self.store.insert(idea)?;
                self.form.cancel();
                tracing::info!(id = %id.as_string(), "idea submitted");
                Ok(id)
            }
            Some(id) => {
                let idea = self.store.get_mut(id).ok_or_else(|| DomainError::NotFound {
                    entity: Idea::collection_name(),
                    id: id.as_string(),
                })?;
                let mut updated = idea.clone();
                updated.update(fields);
                updated.validate()?;
                updated.before_write();
                *idea = updated;
                self.form.cancel();
                tracing::info!(id = %id.as_string(), "idea updated");
                Ok(id)
            }
        }
    }

    /// One thumbs-up for the idea with `id`; returns the new count
    pub fn like(&mut self, id: IdeaId) -> DomainResult<u32> {
        let idea = self.store.get_mut(id).ok_or_else(|| DomainError::NotFound {
            entity: Idea::collection_name(),
            id: id.as_string(),
        })?;
        idea.like();
        Ok(idea.likes)
    }

    pub fn delete(&mut self, id: IdeaId) -> DomainResult<Idea> {
        let idea = self.store.remove(id)?;
        if self.form.editing_id() == Some(id) {
            self.form.cancel();
        }
        tracing::info!(id = %id.as_string(), "idea deleted");
        Ok(idea)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_idea::aggregate::{CURRENT_USER, DEFAULT_SCORE};
    use contracts::enums::{IdeaPriority, IdeaStatus};

    #[test]
    fn test_seeded_board() {
        let session = IdeaSession::seeded();
        assert_eq!(session.ideas().len(), 4);
        let likes: u32 = session.ideas().iter().map(|i| i.likes).sum();
        assert_eq!(likes, 54);
    }

    #[test]
    fn test_new_idea_gets_submission_defaults() {
        let mut session = IdeaSession::new();
        session.open_create();
        {
            let draft = session.draft_mut().unwrap();
            draft.title = "옥상 태양광 패널 설치".to_string();
            draft.description = "본사 옥상에 태양광 패널을 설치합니다.".to_string();
            draft.category = "scope2".to_string();
            draft.department = "facilities".to_string();
        }

        session.submit().unwrap();

        let idea = &session.ideas()[0];
        assert_eq!(idea.status, IdeaStatus::Submitted);
        assert_eq!(idea.author, CURRENT_USER);
        assert_eq!(idea.priority, IdeaPriority::Medium);
        assert_eq!(idea.impact, DEFAULT_SCORE);
        assert_eq!(idea.likes, 0);
        assert!(idea.implementation_date.is_none());
    }

    #[test]
    fn test_edit_preserves_review_state() {
        let mut session = IdeaSession::seeded();
        let id = session.ideas()[0].id();

        session.open_edit(id).unwrap();
        session.draft_mut().unwrap().title = "전기차 충전소 2배 확대".to_string();
        session.submit().unwrap();

        let idea = session.ideas().iter().find(|i| i.id() == id).unwrap();
        assert_eq!(idea.title, "전기차 충전소 2배 확대");
        assert_eq!(idea.status, IdeaStatus::Implemented);
        assert_eq!(idea.author, "김철수");
        assert_eq!(idea.likes, 15);
        assert!(idea.implementation_date.is_some());
    }

    #[test]
    fn test_like_twice_adds_two() {
        let mut session = IdeaSession::seeded();
        let id = session.ideas()[3].id();

        assert_eq!(session.like(id).unwrap(), 10);
        assert_eq!(session.like(id).unwrap(), 11);
    }

    #[test]
    fn test_like_unknown_id_is_not_found() {
        let mut session = IdeaSession::seeded();
        let stale = IdeaId::new_v4();
        assert!(matches!(
            session.like(stale),
            Err(DomainError::NotFound { .. })
        ));
    }
}
