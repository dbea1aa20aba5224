//! Detail page for a single fighter.

use client_frontend_core::{DetailPage, FighterDetailView};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

const NO_BACKGROUND: &str = "No background information available.";

pub fn render(frame: &mut Frame, area: Rect, page: &DetailPage, theme: &RatatuiTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Fighter {}", page.id()));

    let Some(view) = page.view() else {
        let text = if page.is_loading() {
            "Loading fighter..."
        } else {
            "Fighter unavailable."
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, theme.dimmed())).block(block),
            area,
        );
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(inner);

    render_heading(frame, chunks[0], &view, theme);
    render_gauges(frame, chunks[1], &view, theme);
    render_lore(frame, chunks[2], &view, theme);
}

fn render_heading(frame: &mut Frame, area: Rect, view: &FighterDetailView, theme: &RatatuiTheme) {
    let lines = vec![
        Line::from(vec![
            Span::styled(view.name.as_str(), theme.title()),
            Span::raw("  "),
            Span::styled(view.class.as_str(), theme.class()),
        ]),
        Line::from(Span::styled(
            format!("Power Level: {}", view.power_level),
            theme.power(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_gauges(frame: &mut Frame, area: Rect, view: &FighterDetailView, theme: &RatatuiTheme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 3])
        .split(area);

    for (row, stat) in rows.iter().zip(view.bars.iter()) {
        let label = if stat.kind == view.primary {
            format!("{} {}/10 *", stat.kind, stat.value)
        } else {
            format!("{} {}/10", stat.kind, stat.value)
        };
        let gauge = Gauge::default()
            .gauge_style(theme.stat_style(stat.kind))
            .percent(u16::from(stat.percent))
            .label(label);
        frame.render_widget(gauge, *row);
    }
}

fn render_lore(frame: &mut Frame, area: Rect, view: &FighterDetailView, theme: &RatatuiTheme) {
    let background = if view.description.trim().is_empty() {
        Line::from(Span::styled(NO_BACKGROUND, theme.dimmed()))
    } else {
        Line::raw(view.description.as_str())
    };

    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled("Traits: ", theme.key_hint()),
            Span::raw(view.traits.join(", ")),
        ]),
        Line::from(vec![
            Span::styled("Special Ability: ", theme.key_hint()),
            Span::styled(view.ability.name, theme.power()),
            Span::raw(format!(": {}", view.ability.description)),
        ]),
        Line::raw(""),
        background,
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
