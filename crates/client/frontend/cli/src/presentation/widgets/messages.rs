//! Notification panel.

use client_frontend_core::MessageLog;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the most recent `limit` messages, newest at the bottom.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    messages: &MessageLog,
    limit: usize,
    theme: &RatatuiTheme,
) {
    let mut lines: Vec<Line> = messages
        .recent(limit)
        .map(|entry| {
            Line::from(Span::styled(
                entry.text.clone(),
                theme.message_style(entry.level),
            ))
        })
        .collect();
    lines.reverse();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Messages"));
    frame.render_widget(paragraph, area);
}
