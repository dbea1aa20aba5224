//! Main render entry point composing all widgets.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    config::UiConfig,
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::AppState,
};
use client_frontend_core::{AppController, Page};

/// Everything a frame needs, borrowed from the event loop.
pub struct RenderContext<'a> {
    pub app: &'a AppController,
    pub app_state: &'a AppState,
    /// Store backend name shown in the header.
    pub backend: &'a str,
    pub ui: &'a UiConfig,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

/// Header, page body, message panel, key hints.
pub fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let theme = RatatuiTheme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(ctx.ui.message_panel_height),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let route = ctx.app.route();
    widgets::header::render(frame, chunks[0], &route, ctx.backend, &theme);

    match ctx.app.page() {
        Page::Roster(page) => widgets::roster::render(frame, chunks[1], page, &theme),
        Page::Detail(page) => widgets::detail::render(frame, chunks[1], page, &theme),
        Page::Create(page) => {
            let view = widgets::form::FormPanel {
                title: route.title(),
                form: Some(page.form()),
                focus: ctx.app_state.focus,
                error: page.error(),
                submitting: page.is_submitting(),
                confirming_delete: false,
            };
            widgets::form::render(frame, chunks[1], &view, &theme);
        }
        Page::Edit(page) => {
            let view = widgets::form::FormPanel {
                title: route.title(),
                form: page.form(),
                focus: ctx.app_state.focus,
                error: page.error(),
                submitting: page.is_submitting(),
                confirming_delete: page.is_confirming_delete(),
            };
            widgets::form::render(frame, chunks[1], &view, &theme);
        }
    }

    widgets::messages::render(
        frame,
        chunks[2],
        ctx.app.messages(),
        ctx.ui.visible_messages(),
        &theme,
    );

    let screen = ctx.app_state.screen(ctx.app.page());
    widgets::footer::render(frame, chunks[3], screen, &theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::{FrontendConfig, Reply, Response, Route};
    use ratatui::{Terminal, backend::TestBackend};
    use roster_core::{Fighter, FighterClass, NewFighter, StatLine};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw_app(app: &AppController) -> String {
        let mut state = AppState::new();
        state.sync(app.epoch());
        let ui = UiConfig::default();
        let ctx = RenderContext {
            app,
            app_state: &state,
            backend: "memory",
            ui: &ui,
        };

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, &ctx)).unwrap();
        screen_text(&terminal)
    }

    fn rogue() -> Fighter {
        Fighter::from_new(
            "7".into(),
            NewFighter::new("Shadow Blade")
                .with_class(FighterClass::Rogue)
                .with_stats(StatLine::from_values(6, 9, 4))
                .with_description("Strikes from the dark."),
        )
    }

    #[test]
    fn roster_shows_cards_and_team_stats() {
        let (mut app, request) = AppController::new(FrontendConfig::default());
        app.handle(Response::new(request.ticket, Reply::Listed(Ok(vec![rogue()]))));

        let text = draw_app(&app);
        assert!(text.contains("Shadow Blade"));
        assert!(text.contains("Team Power"));
        assert!(text.contains("Power Level: 6"));
        assert!(text.contains("memory"));
    }

    #[test]
    fn detail_shows_special_ability() {
        let (mut app, _) = AppController::new(FrontendConfig::default());
        let load = app.navigate(Route::Detail("7".into())).unwrap();
        app.handle(Response::new(load.ticket, Reply::Fetched(Ok(rogue()))));

        let text = draw_app(&app);
        assert!(text.contains("Shadow Strike"));
        assert!(text.contains("Cunning"));
    }

    #[test]
    fn detail_without_description_shows_fallback() {
        let (mut app, _) = AppController::new(FrontendConfig::default());
        let load = app.navigate(Route::Detail("7".into())).unwrap();
        let fighter = Fighter {
            description: String::new(),
            ..rogue()
        };
        app.handle(Response::new(load.ticket, Reply::Fetched(Ok(fighter))));

        let text = draw_app(&app);
        assert!(text.contains("No background information available."));
    }

    #[test]
    fn create_form_renders_fields() {
        let (mut app, _) = AppController::new(FrontendConfig::default());
        app.navigate(Route::Create);

        let text = draw_app(&app);
        assert!(text.contains("New Fighter"));
        assert!(text.contains("Warrior"));
        assert!(text.contains("Strength"));
    }
}
