use client_store_core::StoreError;
use roster_core::{Fighter, ValidationError};

use crate::command::Command;
use crate::form::{FighterForm, FormEdit};

/// Create form. Picking a class loads its stat preset.
#[derive(Clone, Debug, Default)]
pub struct CreatePage {
    form: FighterForm,
    error: Option<ValidationError>,
    submitting: bool,
}

impl CreatePage {
    pub fn new() -> Self {
        Self {
            form: FighterForm::create(),
            ..Self::default()
        }
    }

    pub fn form(&self) -> &FighterForm {
        &self.form
    }

    /// Inline validation error from the last submit.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn apply(&mut self, edit: FormEdit) {
        self.form = std::mem::take(&mut self.form).apply(edit);
        self.error = None;
    }

    /// Validates locally; an invalid form never reaches the store.
    pub fn submit(&mut self) -> Option<Command> {
        if self.submitting {
            return None;
        }
        match self.form.validate() {
            Ok(fighter) => {
                self.submitting = true;
                Some(Command::Create(fighter))
            }
            Err(error) => {
                self.error = Some(error);
                None
            }
        }
    }

    pub(crate) fn on_created(
        &mut self,
        result: Result<Fighter, StoreError>,
    ) -> Result<Fighter, StoreError> {
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
    use roster_core::FighterClass;

    #[test]
    fn empty_name_is_reported_inline() {
        let mut page = CreatePage::new();
        assert_eq!(page.submit(), None);
        assert_eq!(page.error(), Some(&ValidationError::EmptyName));

        page.apply(FormEdit::Name("B".into()));
        assert_eq!(page.error(), None);
    }

    #[test]
    fn submit_once_until_reply() {
        let mut page = CreatePage::new();
        page.apply(FormEdit::Name("Blaze".into()));
        page.apply(FormEdit::Class(FighterClass::Ranger));

        let Some(Command::Create(fighter)) = page.submit() else {
            panic!("expected create");
        };
        assert_eq!(fighter.stats.speed.get(), 7);
        assert_eq!(fighter.description, "A mighty ranger ready for battle.");
        assert_eq!(page.submit(), None);

        let created = Fighter::from_new("1".into(), fighter);
        assert_eq!(page.on_created(Ok(created.clone())), Ok(created));
        assert!(!page.is_submitting());
    }
}
