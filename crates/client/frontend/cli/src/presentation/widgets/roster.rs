//! Roster page: team summary beside the fighter cards.

use client_frontend_core::{FighterCardView, RosterPage, StatBarView};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use roster_core::TeamStats;

use crate::presentation::theme::{RatatuiTheme, bar};

const BAR_WIDTH: usize = 10;

pub fn render(frame: &mut Frame, area: Rect, page: &RosterPage, theme: &RatatuiTheme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(30)])
        .split(area);

    render_team(frame, chunks[0], &page.team_stats(), theme);
    render_cards(frame, chunks[1], page, theme);
}

fn render_team(frame: &mut Frame, area: Rect, stats: &TeamStats, theme: &RatatuiTheme) {
    let row = |label: &'static str, value: i64, style| {
        Line::from(vec![
            Span::raw(format!("{label:<14}")),
            Span::styled(value.to_string(), style),
        ])
    };

    let lines = vec![
        row("Team Power", stats.team_power, theme.power()),
        row("Fighters", stats.total_fighters as i64, theme.title()),
        Line::raw(""),
        row("Avg Strength", stats.avg_strength, theme.stat_style(roster_core::StatKind::Strength)),
        row("Avg Speed", stats.avg_speed, theme.stat_style(roster_core::StatKind::Speed)),
        row("Avg Magic", stats.avg_magic, theme.stat_style(roster_core::StatKind::Magic)),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Team"));
    frame.render_widget(paragraph, area);
}

fn render_cards(frame: &mut Frame, area: Rect, page: &RosterPage, theme: &RatatuiTheme) {
    let block = Block::default().borders(Borders::ALL).title("Fighters");

    let cards = page.cards();
    if cards.is_empty() {
        let text = if page.is_loading() {
            "Loading fighters..."
        } else {
            "No fighters yet. Press n to create one."
        };
        let paragraph = Paragraph::new(Span::styled(text, theme.dimmed()))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = cards.iter().map(|card| card_item(card, theme)).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(page.selected_index());
    frame.render_stateful_widget(list, area, &mut state);
}

fn card_item<'a>(card: &'a FighterCardView, theme: &RatatuiTheme) -> ListItem<'a> {
    let heading = Line::from(vec![
        Span::styled(card.name.as_str(), theme.title()),
        Span::raw("  "),
        Span::styled(card.class.as_str(), theme.class()),
        Span::raw("  "),
        Span::styled(format!("Power Level: {}", card.power_level), theme.power()),
    ]);

    let mut bars = Vec::new();
    for (i, stat) in card.bars.iter().enumerate() {
        if i > 0 {
            bars.push(Span::raw("  "));
        }
        bars.extend(stat_spans(stat, theme));
    }

    ListItem::new(vec![
        heading,
        Line::from(bars),
        Line::from(Span::styled(card.description.as_str(), theme.dimmed())),
        Line::raw(""),
    ])
}

fn stat_spans(stat: &StatBarView, theme: &RatatuiTheme) -> [Span<'static>; 3] {
    [
        Span::raw(format!("{} ", stat.label)),
        Span::styled(bar(stat.percent, BAR_WIDTH), theme.stat_style(stat.kind)),
        Span::raw(format!(" {:>2}", stat.value)),
    ]
}
