//! Layout definitions for the TUI
//!
//! Header, step indicator, progress gauge, form and status bar, top to bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the wizard screen
pub struct AppLayout {
    /// Event title
    pub header: Rect,
    /// Step tabs
    pub steps: Rect,
    pub progress: Rect,
    /// Fields of the current step
    pub form: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(3), // Step tabs
                Constraint::Length(1), // Progress
                Constraint::Min(6),    // Form
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            steps: chunks[1],
            progress: chunks[2],
            form: chunks[3],
            status_bar: chunks[4],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Top-right corner rect for toast notifications
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    Rect::new(
        r.x + r.width - width,
        r.y + 1,
        width,
        height.min(r.height.saturating_sub(1)),
    )
}
