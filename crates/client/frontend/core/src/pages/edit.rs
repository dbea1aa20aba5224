use client_store_core::StoreError;
use roster_core::{Fighter, FighterId, ValidationError};

use crate::command::Command;
use crate::form::{FighterForm, FormEdit};

/// Edit form for an existing fighter, with a confirmed delete.
#[derive(Clone, Debug)]
pub struct EditPage {
    id: FighterId,
    form: Option<FighterForm>,
    error: Option<ValidationError>,
    loading: bool,
    submitting: bool,
    confirm_pending: bool,
}

impl EditPage {
    pub fn new(id: FighterId) -> Self {
        Self {
            id,
            form: None,
            error: None,
            loading: false,
            submitting: false,
            confirm_pending: false,
        }
    }

    pub(crate) fn begin_load(&mut self) -> Command {
        self.loading = true;
        Command::Get(self.id.clone())
    }

    pub(crate) fn on_fetched(
        &mut self,
        result: Result<Fighter, StoreError>,
    ) -> Result<(), StoreError> {
        self.loading = false;
        self.form = Some(FighterForm::edit(&result?));
        Ok(())
    }

    pub fn id(&self) -> &FighterId {
        &self.id
    }

    /// `None` until the fighter has loaded.
    pub fn form(&self) -> Option<&FighterForm> {
        self.form.as_ref()
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// A delete has been requested once and awaits confirmation.
    pub fn is_confirming_delete(&self) -> bool {
        self.confirm_pending
    }

    /// Any edit also withdraws a pending delete confirmation.
    pub fn apply(&mut self, edit: FormEdit) {
        if let Some(form) = self.form.take() {
            self.form = Some(form.apply(edit));
        }
        self.error = None;
        self.confirm_pending = false;
    }

    /// Full-record update built from the form.
    pub fn submit(&mut self) -> Option<Command> {
        if self.submitting {
            return None;
        }
        let form = self.form.as_ref()?;
        match form.validate() {
            Ok(_) => {
                self.submitting = true;
                self.confirm_pending = false;
                Some(Command::Update {
                    id: self.id.clone(),
                    patch: form.to_patch(),
                })
            }
            Err(error) => {
                self.error = Some(error);
                None
            }
        }
    }

    /// With `confirm`, the first call only arms the delete.
    pub fn request_delete(&mut self, confirm: bool) -> Option<Command> {
        if self.submitting || self.form.is_none() {
            return None;
        }
        if confirm && !self.confirm_pending {
            self.confirm_pending = true;
            return None;
        }
        self.confirm_pending = false;
        self.submitting = true;
        Some(Command::Delete(self.id.clone()))
    }

    /// Settles an update or delete.
    pub(crate) fn on_finished(&mut self, result: Result<(), StoreError>) -> Result<(), StoreError> {
        self.submitting = false;
        result.inspect_err(|error| {
            if let StoreError::Validation(validation) = error {
                self.error = Some(validation.clone());
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{FighterClass, NewFighter, StatLine};

    fn loaded() -> EditPage {
        let mut page = EditPage::new("2".into());
        page.begin_load();
        page.on_fetched(Ok(Fighter::from_new(
            "2".into(),
            NewFighter::new("Iron Shield")
                .with_class(FighterClass::Guardian)
                .with_stats(StatLine::from_values(9, 3, 4))
                .with_description("Holds the line."),
        )))
        .unwrap();
        page
    }

    #[test]
    fn nothing_happens_before_load() {
        let mut page = EditPage::new("2".into());
        page.apply(FormEdit::Name("x".into()));
        assert!(page.form().is_none());
        assert_eq!(page.submit(), None);
        assert_eq!(page.request_delete(false), None);
    }

    #[test]
    fn submit_sends_full_patch() {
        let mut page = loaded();
        page.apply(FormEdit::Class(FighterClass::Monk));

        let Some(Command::Update { id, patch }) = page.submit() else {
            panic!("expected update");
        };
        assert_eq!(id, FighterId::from("2"));
        assert_eq!(patch.class, Some(FighterClass::Monk));
        // Edit mode does not apply the class preset.
        assert_eq!(patch.strength.map(|s| s.get()), Some(9));
        assert_eq!(patch.description.as_deref(), Some("Holds the line."));
    }

    #[test]
    fn blank_name_blocks_submit() {
        let mut page = loaded();
        page.apply(FormEdit::Name("  ".into()));
        assert_eq!(page.submit(), None);
        assert_eq!(page.error(), Some(&ValidationError::EmptyName));
    }

    #[test]
    fn delete_requires_second_request_when_confirming() {
        let mut page = loaded();
        assert_eq!(page.request_delete(true), None);
        assert!(page.is_confirming_delete());
        assert_eq!(page.request_delete(true), Some(Command::Delete("2".into())));
        assert!(page.is_submitting());
    }

    #[test]
    fn editing_withdraws_delete_confirmation() {
        let mut page = loaded();
        page.request_delete(true);
        page.apply(FormEdit::Description("Changed my mind.".into()));
        assert!(!page.is_confirming_delete());
        assert_eq!(page.request_delete(true), None);
    }

    #[test]
    fn delete_without_confirmation_is_immediate() {
        let mut page = loaded();
        assert_eq!(page.request_delete(false), Some(Command::Delete("2".into())));
    }
}
