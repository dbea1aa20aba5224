//! Terminal-only UI state layered over the controller.

use client_frontend_core::{FormField, Page};

/// Which key map applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Roster,
    Detail,
    Form { field: FormField },
}

/// Focus and lifecycle flags the controller does not track.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Focused field on the create/edit form.
    pub focus: FormField,
    /// Navigation epoch the focus belongs to.
    epoch: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            focus: FormField::Name,
            epoch: 0,
        }
    }

    /// Resets the focus whenever the controller has moved to a new page.
    pub fn sync(&mut self, epoch: u64) {
        if self.epoch != epoch {
            self.epoch = epoch;
            self.focus = FormField::Name;
        }
    }

    pub fn screen(&self, page: &Page) -> Screen {
        match page {
            Page::Roster(_) => Screen::Roster,
            Page::Detail(_) => Screen::Detail,
            Page::Create(_) | Page::Edit(_) => Screen::Form { field: self.focus },
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::{CreatePage, RosterPage};

    #[test]
    fn focus_resets_on_navigation() {
        let mut state = AppState::new();
        state.focus_next();
        state.focus_next();
        assert_eq!(state.focus, FormField::Strength);

        state.sync(0);
        assert_eq!(state.focus, FormField::Strength);
        state.sync(1);
        assert_eq!(state.focus, FormField::Name);
    }

    #[test]
    fn screen_follows_page() {
        let mut state = AppState::new();
        state.focus_previous();
        assert_eq!(state.screen(&Page::Roster(RosterPage::new())), Screen::Roster);
        assert_eq!(
            state.screen(&Page::Create(CreatePage::new())),
            Screen::Form {
                field: FormField::Description
            }
        );
    }
}
