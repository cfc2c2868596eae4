//! Bottom status bar — key hints plus the last timestamped status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " [Enter]compute [Tab]pane [Esc]quit",
        theme::muted(),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match msg.level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(
            format!("[{}] ", msg.at.format("%H:%M:%S")),
            theme::text_secondary(),
        ));
        spans.push(Span::styled(msg.text.as_str(), style));
    }

    let line = Line::from(spans);
    let para = Paragraph::new(line);
    f.render_widget(para, area);
}
