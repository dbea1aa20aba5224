//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use client_frontend_core::FormField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::Screen;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    SelectNext,
    SelectPrevious,
    /// Open the selected fighter's detail page.
    Open,
    New,
    Edit,
    Refresh,
    /// Leave the current page.
    Back,
    /// Persist a one-point change to the selected card's primary stat.
    QuickAdjust(i64),
    NextField,
    PreviousField,
    Insert(char),
    Backspace,
    NextClass,
    PreviousClass,
    /// Change the focused stat.
    Adjust(i64),
    Submit,
    Delete,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands for the current screen.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, screen: Screen) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => KeyAction::Quit,
                KeyCode::Char('d') if matches!(screen, Screen::Form { .. }) => KeyAction::Delete,
                _ => KeyAction::None,
            };
        }

        match screen {
            Screen::Roster => self.roster(key.code),
            Screen::Detail => self.detail(key.code),
            Screen::Form { field } => self.form(key.code, field),
        }
    }

    fn roster(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Up => KeyAction::SelectPrevious,
            KeyCode::Down => KeyAction::SelectNext,
            KeyCode::Enter => KeyAction::Open,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                'k' => KeyAction::SelectPrevious,
                'j' => KeyAction::SelectNext,
                'n' => KeyAction::New,
                'e' => KeyAction::Edit,
                'r' => KeyAction::Refresh,
                '+' | '=' => KeyAction::QuickAdjust(1),
                '-' => KeyAction::QuickAdjust(-1),
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }

    fn detail(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Esc | KeyCode::Backspace => KeyAction::Back,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                'e' => KeyAction::Edit,
                'r' => KeyAction::Refresh,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }

    fn form(&self, code: KeyCode, field: FormField) -> KeyAction {
        match code {
            KeyCode::Esc => KeyAction::Back,
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Tab | KeyCode::Down => KeyAction::NextField,
            KeyCode::BackTab | KeyCode::Up => KeyAction::PreviousField,
            KeyCode::Backspace if field.is_text() => KeyAction::Backspace,
            KeyCode::Char(ch) if field.is_text() => KeyAction::Insert(ch),
            KeyCode::Left if field == FormField::Class => KeyAction::PreviousClass,
            KeyCode::Right if field == FormField::Class => KeyAction::NextClass,
            KeyCode::Left | KeyCode::Char('-') if field.stat_kind().is_some() => {
                KeyAction::Adjust(-1)
            }
            KeyCode::Right | KeyCode::Char('+' | '=') if field.stat_kind().is_some() => {
                KeyAction::Adjust(1)
            }
            _ => KeyAction::None,
        }
    }
}
