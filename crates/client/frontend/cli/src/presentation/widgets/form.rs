//! Create/edit form panel.

use client_frontend_core::{FighterForm, FormField};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use roster_core::ValidationError;

use crate::presentation::theme::{RatatuiTheme, bar};

const BAR_WIDTH: usize = 20;

/// What the form panel draws.
pub struct FormPanel<'a> {
    pub title: &'static str,
    /// `None` while the edit page is still loading its fighter.
    pub form: Option<&'a FighterForm>,
    pub focus: FormField,
    pub error: Option<&'a ValidationError>,
    pub submitting: bool,
    pub confirming_delete: bool,
}

pub fn render(frame: &mut Frame, area: Rect, panel: &FormPanel, theme: &RatatuiTheme) {
    let block = Block::default().borders(Borders::ALL).title(panel.title);

    let Some(form) = panel.form else {
        frame.render_widget(
            Paragraph::new(Span::styled("Loading...", theme.dimmed())).block(block),
            area,
        );
        return;
    };

    let mut lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&field| field_line(form, field, field == panel.focus, theme))
        .collect();

    lines.push(Line::raw(""));
    if let Some(error) = panel.error {
        lines.push(Line::from(Span::styled(error.to_string(), theme.error())));
    }
    if panel.confirming_delete {
        lines.push(Line::from(Span::styled(
            "Press Ctrl-D again to delete, any other edit cancels.",
            theme.message_style(client_frontend_core::MessageLevel::Warning),
        )));
    }
    if panel.submitting {
        lines.push(Line::from(Span::styled("Saving...", theme.dimmed())));
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn field_line<'a>(
    form: &'a FighterForm,
    field: FormField,
    focused: bool,
    theme: &RatatuiTheme,
) -> Line<'a> {
    let label_style = if focused {
        theme.selected()
    } else {
        Style::default()
    };
    let mut spans = vec![Span::styled(format!("{:<12}", field.as_ref()), label_style)];

    match field {
        FormField::Name => spans.push(text_value(form.name(), focused)),
        FormField::Description => spans.push(text_value(form.description(), focused)),
        FormField::Class => {
            spans.push(Span::raw("◀ "));
            spans.push(Span::styled(form.class().to_string(), theme.class()));
            spans.push(Span::raw(" ▶"));
        }
        FormField::Strength | FormField::Speed | FormField::Magic => {
            let Some(kind) = field.stat_kind() else {
                return Line::from(spans);
            };
            let stat = form.stats().get(kind);
            let hint = |delta: i64, symbol: &'static str| {
                if form.can_adjust(kind, delta) {
                    Span::styled(symbol, theme.key_hint())
                } else {
                    Span::styled(symbol, theme.dimmed())
                }
            };
            spans.push(hint(-1, "- "));
            spans.push(Span::styled(
                bar(stat.bar_percent(), BAR_WIDTH),
                theme.stat_style(kind),
            ));
            spans.push(hint(1, " +"));
            spans.push(Span::raw(format!("  {}", stat.get())));
        }
    }

    Line::from(spans)
}

fn text_value(value: &str, focused: bool) -> Span<'_> {
    if focused {
        Span::raw(format!("{value}_"))
    } else {
        Span::raw(value)
    }
}
