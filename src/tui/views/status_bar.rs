//! Status bar view
//!
//! Shows the error count, the latest status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Key hints for the current context
pub fn hints(app: &App) -> &'static str {
    if app.picker.is_some() {
        " Enter:Set  Esc:Cancel "
    } else if app.wizard.step().is_last() {
        " F1:Help  PgUp:Back  Ctrl+S:Submit  Esc:Quit "
    } else if app.wizard.step().is_first() {
        " F1:Help  PgDn:Next  Esc:Quit "
    } else {
        " F1:Help  PgUp:Back  PgDn:Next  Esc:Quit "
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    let error_count = app.wizard.errors().len();
    if error_count > 0 {
        spans.push(Span::styled(
            format!(" {} error(s) ", error_count),
            Style::default().fg(Color::Red),
        ));
        spans.push(Span::raw("\u{2502}"));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = hints(app);
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
