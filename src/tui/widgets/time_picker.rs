//! Time picker popup
//!
//! Renders a `TimeOfDayPicker` draft as hour, minute and AM/PM columns with
//! the allowed range and an inline message while the draft is out of range.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::models::Field;
use crate::wizard::{Period, TimeBounds, TimeOfDayPicker};

pub struct TimePickerWidget<'a> {
    field: Field,
    picker: &'a TimeOfDayPicker,
}

impl<'a> TimePickerWidget<'a> {
    pub fn new(field: Field, picker: &'a TimeOfDayPicker) -> Self {
        Self { field, picker }
    }
}

/// Human-readable description of the allowed range
pub fn bounds_hint(bounds: TimeBounds) -> Option<String> {
    match (bounds.min, bounds.max) {
        (Some(min), Some(max)) => Some(format!(
            "Between {} and {}",
            min.format_12h(),
            max.format_12h()
        )),
        (Some(min), None) => Some(format!("Earliest {}", min.format_12h())),
        (None, Some(max)) => Some(format!("Latest {}", max.format_12h())),
        (None, None) => None,
    }
}

impl Widget for TimePickerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.field.label()))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let Some(draft) = self.picker.draft() else {
            Paragraph::new("").block(block).render(area, buf);
            return;
        };

        let value_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let period_style = |period: Period| {
            if draft.period() == period {
                value_style
            } else {
                Style::default().fg(Color::DarkGray)
            }
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(format!(" {:>2} ", draft.hour()), value_style),
                Span::raw(" : "),
                Span::styled(format!(" {:02} ", draft.minute()), value_style),
                Span::raw("   "),
                Span::styled(" AM ", period_style(Period::Am)),
                Span::raw(" "),
                Span::styled(" PM ", period_style(Period::Pm)),
            ]),
            Line::from(""),
        ];

        if let Some(hint) = bounds_hint(self.picker.bounds()) {
            lines.push(Line::from(Span::styled(hint, Style::default().fg(Color::White))));
        }

        match self.picker.validation_message() {
            Some(message) => lines.push(Line::from(Span::styled(
                message,
                Style::default().fg(Color::Red),
            ))),
            None => lines.push(Line::from("")),
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "\u{2191}\u{2193} hour  \u{2190}\u{2192} minute  p AM/PM  Enter set  Esc cancel",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
