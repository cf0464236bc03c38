//! TUI views
//!
//! The wizard screen and the overlays drawn on top of it.

pub mod form;
pub mod status_bar;
pub mod steps;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{centered_rect_fixed, toast_rect, AppLayout};
use super::widgets::{NotificationWidget, TimePickerWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    steps::render_header(frame, app, layout.header);
    steps::render_tabs(frame, app, layout.steps);
    steps::render_progress(frame, app, layout.progress);
    form::render(frame, app, layout.form);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(open) = &app.picker {
        let area = centered_rect_fixed(56, 10, frame.area());
        frame.render_widget(TimePickerWidget::new(open.field, &open.picker), area);
    }

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::Confirm(action) => dialogs::confirm::render(frame, action),
        ActiveDialog::None => {}
    }

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(48, 5, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}
