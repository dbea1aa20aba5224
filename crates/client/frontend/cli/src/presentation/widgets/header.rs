//! Header widget displaying the current page and store backend.

use client_frontend_core::Route;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the header panel with page title, path and backend.
pub fn render(frame: &mut Frame, area: Rect, route: &Route, backend: &str, theme: &RatatuiTheme) {
    let text = Line::from(vec![
        Span::styled(route.title(), theme.title()),
        Span::raw(" | Path: "),
        Span::styled(route.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw(" | Store: "),
        Span::styled(backend.to_string(), Style::default().fg(Color::LightGreen)),
    ]);

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Fantasy Fighters"),
    );

    frame.render_widget(paragraph, area);
}
