//! Terminal User Interface module
//!
//! A ratatui front-end for the registration wizard: one form per step, a
//! time picker popup, confirmation dialogs and toast notifications.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
