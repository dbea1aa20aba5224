//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Render the current page.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        self.app_state.sync(self.app.epoch());

        let ctx = ui::RenderContext {
            app: &self.app,
            app_state: &self.app_state,
            backend: self.dispatcher.backend(),
            ui: &self.cli_config.ui,
        };

        ui::render(terminal, &ctx)
    }
}
