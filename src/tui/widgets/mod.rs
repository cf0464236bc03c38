//! Reusable widgets for the TUI

pub mod input;
pub mod notification;
pub mod time_picker;

pub use input::TextInput;
pub use notification::{Notification, NotificationQueue, NotificationType, NotificationWidget};
pub use time_picker::TimePickerWidget;
