/// Dialog state of one page.
///
/// At most one dialog is open at a time. The draft inside is the only place
/// user input lives before it is parsed; cancelling discards it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub enum FormSession<Id, D> {
    /// No dialog open
    Closed,
    /// Create dialog with a fresh draft
    Create { draft: D },
    /// Edit dialog staged from the record with `id`
    Edit { id: Id, draft: D },
}

impl<Id, D> Default for FormSession<Id, D> {
    fn default() -> Self {
        FormSession::Closed
    }
}

impl<Id: Copy, D> FormSession<Id, D> {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormSession::Closed)
    }

    /// Open the create dialog, replacing whatever was open before
    pub fn open_create(&mut self, draft: D) {
        *self = FormSession::Create { draft };
    }

    /// Open the edit dialog for `id` with its staged draft
    pub fn open_edit(&mut self, id: Id, draft: D) {
        *self = FormSession::Edit { id, draft };
    }

    /// Close the dialog and discard the draft
    pub fn cancel(&mut self) {
        *self = FormSession::Closed;
    }

    /// Current draft, if a dialog is open
    pub fn draft(&self) -> Option<&D> {
        match self {
            FormSession::Closed => None,
            FormSession::Create { draft } | FormSession::Edit { draft, .. } => Some(draft),
        }
    }

    /// Mutable access to the current draft for field-by-field editing
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            FormSession::Closed => None,
            FormSession::Create { draft } | FormSession::Edit { draft, .. } => Some(draft),
        }
    }

    /// Id of the record being edited, if the edit dialog is open
    pub fn editing_id(&self) -> Option<Id> {
        match self {
            FormSession::Edit { id, .. } => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Session = FormSession<u32, String>;

    #[test]
    fn test_starts_closed() {
        let form = Session::default();
        assert!(!form.is_open());
        assert!(form.draft().is_none());
    }

    #[test]
    fn test_open_create_then_cancel_discards_draft() {
        let mut form = Session::default();
        form.open_create("draft".to_string());
        assert!(form.is_open());
        assert_eq!(form.draft().map(String::as_str), Some("draft"));

        form.cancel();
        assert!(!form.is_open());
        assert!(form.draft().is_none());
    }

    #[test]
    fn test_open_edit_replaces_create() {
        let mut form = Session::default();
        form.open_create("new".to_string());
        form.open_edit(7, "staged".to_string());

        assert_eq!(form.editing_id(), Some(7));
        assert_eq!(form.draft().map(String::as_str), Some("staged"));
    }

    #[test]
    fn test_draft_mut_edits_in_place() {
        let mut form = Session::default();
        form.open_create(String::new());
        if let Some(draft) = form.draft_mut() {
            draft.push_str("typed");
        }
        assert_eq!(form.draft().map(String::as_str), Some("typed"));
    }
}
