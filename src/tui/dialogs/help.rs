//! Help dialog
//!
//! Lists the wizard's keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 80, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        heading("Form"),
        Line::from(""),
        key_line("Tab / \u{2193}", "Next field"),
        key_line("Shift+Tab / \u{2191}", "Previous field"),
        key_line("\u{2190} \u{2192}", "Move cursor / change choice"),
        key_line("Space", "Next choice"),
        key_line("Enter", "Next field / open time picker"),
        Line::from(""),
        heading("Steps"),
        Line::from(""),
        key_line("PgDn / Ctrl+N", "Validate and continue"),
        key_line("PgUp / Ctrl+P", "Back one step"),
        key_line("F2-F6", "Revisit step 1-5"),
        key_line("Ctrl+S", "Submit (final step)"),
        Line::from(""),
        heading("Time Picker"),
        Line::from(""),
        key_line("\u{2191} \u{2193}", "Hour"),
        key_line("\u{2190} \u{2192}", "Minute (15 min steps)"),
        key_line("p", "Toggle AM/PM"),
        key_line("Enter", "Set time"),
        key_line("Esc", "Cancel"),
        Line::from(""),
        key_line("F1", "Show/hide help"),
        key_line("Esc / Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ]
}

fn heading(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>18}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
