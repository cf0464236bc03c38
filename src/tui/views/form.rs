//! Form view
//!
//! Renders the visible fields of the current step, one row per field with
//! its error message underneath. Scrolls to keep the focused field visible.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_field_value;
use crate::models::{Field, FieldKind};
use crate::tui::app::{placeholder_for, App};
use crate::tui::widgets::TextInput;

/// Rows taken by one field (value line plus error line)
const FIELD_HEIGHT: u16 = 2;

const LABEL_WIDTH: u16 = 28;

/// First field index to draw so that `focused` stays on screen
pub fn scroll_offset(focused: usize, field_count: usize, rows: u16) -> usize {
    let per_page = usize::from((rows / FIELD_HEIGHT).max(1));
    if field_count <= per_page {
        return 0;
    }
    focused.saturating_sub(per_page - 1).min(field_count - per_page)
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let step = app.wizard.step();
    let block = Block::default()
        .title(format!(" {} | {} ", step, step.description()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = app.visible_fields();
    let focused = app.focused.min(fields.len().saturating_sub(1));
    let offset = scroll_offset(focused, fields.len(), inner.height);

    let mut y = inner.y;
    for (index, &field) in fields.iter().enumerate().skip(offset) {
        if y + FIELD_HEIGHT > inner.y + inner.height {
            break;
        }
        let is_focused = index == focused && app.picker.is_none();
        render_field(frame, app, field, is_focused, Rect::new(inner.x, y, inner.width, FIELD_HEIGHT));
        y += FIELD_HEIGHT;
    }
}

fn render_field(frame: &mut Frame, app: &App, field: Field, focused: bool, area: Rect) {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let required = if field.is_optional() { " " } else { "*" };
    let label = Line::from(vec![
        Span::styled(if focused { "> " } else { "  " }, label_style),
        Span::styled(field.label(), label_style),
        Span::styled(required, Style::default().fg(Color::Red)),
    ]);
    let label_area = Rect::new(area.x, area.y, LABEL_WIDTH.min(area.width), 1);
    frame.render_widget(Paragraph::new(label), label_area);

    let value_area = Rect::new(
        area.x + label_area.width,
        area.y,
        area.width.saturating_sub(label_area.width),
        1,
    );
    let value = app.wizard.value(field);

    match field.kind() {
        FieldKind::Choice => {
            let shown = if value.is_empty() {
                Span::styled(placeholder_for(field), Style::default().fg(Color::DarkGray))
            } else {
                Span::styled(
                    format_field_value(field, value),
                    Style::default().fg(if focused { Color::White } else { Color::Yellow }),
                )
            };
            let line = if focused {
                Line::from(vec![Span::raw("\u{25c2} "), shown, Span::raw(" \u{25b8}")])
            } else {
                Line::from(shown)
            };
            frame.render_widget(Paragraph::new(line), value_area);
        }
        FieldKind::Time => {
            let shown = if value.is_empty() {
                Span::styled(placeholder_for(field), Style::default().fg(Color::DarkGray))
            } else {
                Span::styled(
                    format_field_value(field, value),
                    Style::default().fg(if focused { Color::White } else { Color::Yellow }),
                )
            };
            frame.render_widget(Paragraph::new(Line::from(shown)), value_area);
        }
        FieldKind::Text | FieldKind::Email | FieldKind::Date => {
            if focused {
                frame.render_widget(&app.input, value_area);
            } else {
                let input = TextInput::new()
                    .placeholder(placeholder_for(field))
                    .content(value);
                frame.render_widget(&input, value_area);
            }
        }
    }

    if let Some(message) = app.wizard.error(field) {
        let error_area = Rect::new(value_area.x, area.y + 1, value_area.width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(Color::Red))),
            error_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_focus_visible() {
        // 10 rows hold 5 fields
        assert_eq!(scroll_offset(0, 15, 10), 0);
        assert_eq!(scroll_offset(4, 15, 10), 0);
        assert_eq!(scroll_offset(5, 15, 10), 1);
        assert_eq!(scroll_offset(14, 15, 10), 10);
        assert_eq!(scroll_offset(3, 4, 10), 0);
    }
}
