//! Input handling (keyboard and form editing).

use anyhow::Result;
use client_frontend_core::{FighterForm, FormEdit, FormField, Page, Route};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl EventLoop {
    /// Poll for keyboard input and handle UI interactions.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let quit = self.handle_key_press(key);
                self.render(terminal)?;
                Ok(quit)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Handle key press and dispatch to the controller. Returns `true` to quit.
    pub(in crate::event) fn handle_key_press(&mut self, key: KeyEvent) -> bool {
        self.app_state.sync(self.app.epoch());
        let screen = self.app_state.screen(self.app.page());

        match self.input.handle_key(key, screen) {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                return true;
            }
            KeyAction::SelectNext => self.app.select_next(),
            KeyAction::SelectPrevious => self.app.select_previous(),
            KeyAction::Open => {
                let request = self.app.open_selected();
                self.issue(request);
            }
            KeyAction::New => {
                let request = self.app.navigate(Route::Create);
                self.issue(request);
            }
            KeyAction::Edit => {
                let request = self.app.edit_focused();
                self.issue(request);
            }
            KeyAction::Refresh => {
                let request = self.app.refresh();
                self.issue(request);
            }
            KeyAction::Back => {
                let request = self.app.back();
                self.issue(request);
            }
            KeyAction::QuickAdjust(delta) => {
                let kind = match self.app.page() {
                    Page::Roster(page) => page.selected().map(|f| f.stats.primary()),
                    _ => None,
                };
                if let Some(kind) = kind {
                    let request = self.app.quick_update(kind, delta);
                    self.issue(request);
                }
            }
            KeyAction::NextField => self.app_state.focus_next(),
            KeyAction::PreviousField => self.app_state.focus_previous(),
            KeyAction::Insert(ch) => self.edit_text(|text| text.push(ch)),
            KeyAction::Backspace => self.edit_text(|text| {
                text.pop();
            }),
            KeyAction::NextClass => self.edit_class(true),
            KeyAction::PreviousClass => self.edit_class(false),
            KeyAction::Adjust(delta) => {
                if let Some(kind) = self.app_state.focus.stat_kind() {
                    self.app.edit_form(FormEdit::AdjustStat(kind, delta));
                }
            }
            KeyAction::Submit => {
                let request = self.app.submit();
                self.issue(request);
            }
            KeyAction::Delete => {
                let request = self.app.request_delete();
                self.issue(request);
            }
            KeyAction::None => {}
        }
        false
    }

    fn current_form(&self) -> Option<&FighterForm> {
        match self.app.page() {
            Page::Create(page) => Some(page.form()),
            Page::Edit(page) => page.form(),
            Page::Roster(_) | Page::Detail(_) => None,
        }
    }

    /// Applies `change` to the focused text field.
    fn edit_text(&mut self, change: impl FnOnce(&mut String)) {
        let Some(form) = self.current_form() else {
            return;
        };
        let edit = match self.app_state.focus {
            FormField::Name => {
                let mut name = form.name().to_string();
                change(&mut name);
                FormEdit::Name(name)
            }
            FormField::Description => {
                let mut description = form.description().to_string();
                change(&mut description);
                FormEdit::Description(description)
            }
            _ => return,
        };
        self.app.edit_form(edit);
    }

    fn edit_class(&mut self, forward: bool) {
        let Some(form) = self.current_form() else {
            return;
        };
        let class = if forward {
            form.class().next()
        } else {
            form.class().previous()
        };
        self.app.edit_form(FormEdit::Class(class));
    }
}
