//! Ratatui colors and styles for the roster UI.

use client_frontend_core::MessageLevel;
use ratatui::style::{Color, Modifier, Style};
use roster_core::StatKind;

/// Consistent color scheme for every widget.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn stat_color(&self, kind: StatKind) -> Color {
        match kind {
            StatKind::Strength => Color::LightRed,
            StatKind::Speed => Color::LightGreen,
            StatKind::Magic => Color::LightBlue,
        }
    }

    pub fn stat_style(&self, kind: StatKind) -> Style {
        Style::default().fg(self.stat_color(kind))
    }

    pub fn message_style(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn class(&self) -> Style {
        Style::default().fg(Color::Magenta)
    }

    pub fn power(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted card or focused form field.
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dimmed(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(Color::LightRed)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(Color::LightCyan)
    }
}

/// Text bar of `width` cells filled to `percent`.
pub fn bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(bar(70, 10), "███████░░░");
        assert_eq!(bar(100, 4), "████");
        assert_eq!(bar(0, 3), "░░░");
    }
}
