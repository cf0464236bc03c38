//! Header, step tabs and progress gauge

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs},
    Frame,
};

use crate::models::Step;
use crate::tui::app::App;

pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.settings.event_name),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled("Delegate Registration", Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Step tabs; completed steps are marked and the current one highlighted
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.wizard.step();

    let titles: Vec<Line> = Step::ALL
        .iter()
        .map(|&step| {
            let marker = if step < current { "\u{2713}" } else { " " };
            let style = if step < current {
                Style::default().fg(Color::Green)
            } else if step == current {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(
                format!("{}{} {}", marker, step.number(), step.title()),
                style,
            ))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(usize::from(current.number() - 1))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

pub fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let step = app.wizard.step();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(app.wizard.progress())
        .label(format!("Step {} of {}", step.number(), Step::COUNT));

    frame.render_widget(gauge, area);
}
