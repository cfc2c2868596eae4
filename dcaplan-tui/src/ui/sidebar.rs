//! Sidebar — the five input fields with an active-row highlight.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, Field, Pane, FIELD_COUNT};
use crate::theme;

const SLIDER_WIDTH: usize = 20;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "[Up/Down]field [Enter]compute",
        theme::muted(),
    )));
    lines.push(Line::from(Span::styled(
        "[Tab]pane [Esc]quit",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    for i in 0..FIELD_COUNT {
        let field = Field::from_index(i).unwrap();
        let is_active = app.active_pane == Pane::Sidebar && app.active_field == field;
        let label_style = if is_active {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::muted()
        };

        lines.push(Line::from(Span::styled(field.label(), label_style)));
        lines.push(value_line(app, field, is_active));
        lines.push(Line::from(""));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn value_line(app: &AppState, field: Field, is_active: bool) -> Line<'_> {
    let form = &app.form;
    match field {
        Field::Coin => text_value(&form.coin, is_active),
        Field::Portfolio => text_value(&form.portfolio_input, is_active),
        Field::Price => text_value(&form.price_input, is_active),
        Field::Side => {
            let mut spans = vec![Span::raw("  ")];
            spans.push(Span::styled(form.side.label(), theme::side_style(form.side)));
            if is_active {
                spans.push(Span::styled("  [Space]toggle", theme::text_secondary()));
            }
            Line::from(spans)
        }
        Field::MaxDiff => {
            // Slider bar over [1, 100], teacher-style [====    ] rendering.
            let frac = (form.max_percent_diff - 1.0) / 99.0;
            let filled = (frac * SLIDER_WIDTH as f64).round() as usize;
            let empty = SLIDER_WIDTH.saturating_sub(filled);
            let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));
            let bar_style = if is_active { theme::accent() } else { theme::muted() };
            Line::from(vec![
                Span::raw("  "),
                Span::styled(bar, bar_style),
                Span::styled(
                    format!(" {:.0}%", form.max_percent_diff),
                    theme::text_secondary(),
                ),
            ])
        }
    }
}

fn text_value(value: &str, is_active: bool) -> Line<'_> {
    let mut spans = vec![Span::raw("  "), Span::styled(value, theme::accent())];
    if is_active {
        // Edit cursor.
        spans.push(Span::styled("_", theme::accent().add_modifier(Modifier::SLOW_BLINK)));
    }
    Line::from(spans)
}
