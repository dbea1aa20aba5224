//! One-line key hints for the current screen.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{presentation::theme::RatatuiTheme, state::Screen};

fn hints(screen: Screen) -> &'static [(&'static str, &'static str)] {
    match screen {
        Screen::Roster => &[
            ("↑/↓", "select"),
            ("Enter", "details"),
            ("n", "new"),
            ("e", "edit"),
            ("+/-", "tweak primary stat"),
            ("r", "refresh"),
            ("q", "quit"),
        ],
        Screen::Detail => &[("e", "edit"), ("r", "refresh"), ("Esc", "back"), ("q", "quit")],
        Screen::Form { .. } => &[
            ("Tab", "next field"),
            ("←/→", "class / stat"),
            ("+/-", "stat"),
            ("Enter", "save"),
            ("Ctrl-D", "delete"),
            ("Esc", "cancel"),
        ],
    }
}

pub fn render(frame: &mut Frame, area: Rect, screen: Screen, theme: &RatatuiTheme) {
    let mut spans = Vec::new();
    for (i, (key, action)) in hints(screen).iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, theme.key_hint()));
        spans.push(Span::raw(format!(" {action}")));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
