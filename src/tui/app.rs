//! Application state for the TUI
//!
//! The App struct holds the wizard plus everything needed to render it and
//! route keys: the focused field, its edit buffer, the open time picker and
//! any dialog or notification.

use crate::config::settings::Settings;
use crate::models::{Field, FieldKind, Step};
use crate::services::SubmissionService;
use crate::storage::Storage;
use crate::wizard::{AdvanceOutcome, SubmitOutcome, TimeOfDayPicker, WizardController};

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Action awaiting a yes/no answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Quit,
    Submit,
}

impl ConfirmAction {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Quit => "Quit? Entered details will be lost.",
            Self::Submit => "Submit your registration now?",
        }
    }
}

/// Hint shown in an empty field
pub fn placeholder_for(field: Field) -> &'static str {
    match field.kind() {
        FieldKind::Date => "YYYY-MM-DD",
        FieldKind::Email => "name@example.com",
        FieldKind::Choice => "Use \u{2190} \u{2192} to choose",
        FieldKind::Time => "Press Enter to pick a time",
        FieldKind::Text if field.is_optional() => "Optional",
        FieldKind::Text => "",
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Confirm(ConfirmAction),
}

/// The time picker popup and the field it edits
#[derive(Debug, Clone)]
pub struct OpenPicker {
    pub field: Field,
    pub picker: TimeOfDayPicker,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    pub wizard: WizardController,

    /// Index into the visible fields of the current step
    pub focused: usize,

    /// Edit buffer for the focused text field
    pub input: TextInput,

    pub picker: Option<OpenPicker>,

    pub active_dialog: ActiveDialog,

    pub notifications: NotificationQueue,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App with an empty form
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        let mut app = Self {
            storage,
            settings,
            should_quit: false,
            wizard: WizardController::new(),
            focused: 0,
            input: TextInput::new(),
            picker: None,
            active_dialog: ActiveDialog::default(),
            notifications: NotificationQueue::new(),
            status_message: None,
        };
        app.load_input();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Fields shown on the current step
    pub fn visible_fields(&self) -> Vec<Field> {
        self.wizard.visible_fields(self.wizard.step())
    }

    /// The field that has keyboard focus
    pub fn focused_field(&self) -> Option<Field> {
        let fields = self.visible_fields();
        fields
            .get(self.focused.min(fields.len().saturating_sub(1)))
            .copied()
    }

    /// Move focus to a field of the current step
    pub fn focus_field(&mut self, field: Field) {
        if let Some(index) = self.visible_fields().iter().position(|&f| f == field) {
            self.focused = index;
            self.load_input();
        }
    }

    pub fn focus_next(&mut self) {
        let count = self.visible_fields().len();
        if count > 0 {
            self.focused = (self.focused + 1) % count;
            self.load_input();
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.visible_fields().len();
        if count > 0 {
            self.focused = (self.focused + count - 1) % count;
            self.load_input();
        }
    }

    /// Refill the edit buffer from the focused field's value
    fn load_input(&mut self) {
        self.input = match self.focused_field() {
            Some(field) => TextInput::new()
                .placeholder(placeholder_for(field))
                .content(self.wizard.value(field))
                .focused(true),
            None => TextInput::new(),
        };
    }

    /// Push the edit buffer into the wizard if it changed
    pub fn commit_input(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if field.kind() == FieldKind::Choice || field.kind() == FieldKind::Time {
            return;
        }
        if self.wizard.value(field) != self.input.value() {
            self.wizard.update_field(field, self.input.value());
        }
    }

    /// Step through a choice field's options
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let Some(choices) = field.options() else {
            return;
        };

        let current = choices
            .iter()
            .position(|choice| choice.value == self.wizard.value(field));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => choices.len() - 1,
            (Some(i), true) => (i + 1) % choices.len(),
            (Some(i), false) => (i + choices.len() - 1) % choices.len(),
        };
        self.wizard.update_field(field, choices[next].value);
    }

    /// Open the time picker for the focused field
    pub fn open_picker(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if field.kind() != FieldKind::Time {
            return;
        }

        let mut picker = self.wizard.time_picker(field);
        picker.open();
        self.picker = Some(OpenPicker { field, picker });
    }

    /// Confirm the picker's draft; an out-of-range draft keeps it open
    pub fn confirm_picker(&mut self) {
        let Some(open) = self.picker.as_mut() else {
            return;
        };

        match open.picker.confirm() {
            Ok(time) => {
                let field = open.field;
                self.picker = None;
                self.wizard.update_field(field, time.to_string());
                self.set_status(format!("{} set to {}", field.label(), time.format_12h()));
            }
            Err(rejection) => self.set_status(rejection.to_string()),
        }
    }

    pub fn cancel_picker(&mut self) {
        if let Some(mut open) = self.picker.take() {
            open.picker.cancel();
        }
    }

    /// Move to the next step, or ask to submit from the last one
    pub fn advance(&mut self) {
        self.commit_input();
        match self.wizard.advance() {
            AdvanceOutcome::Advanced(step) => {
                self.focused = 0;
                self.load_input();
                self.set_status(format!("{} of {}", step, Step::COUNT));
            }
            AdvanceOutcome::Blocked => self.report_blocked(),
            AdvanceOutcome::AtLastStep => self.open_dialog(ActiveDialog::Confirm(ConfirmAction::Submit)),
        }
    }

    pub fn retreat(&mut self) {
        self.commit_input();
        if self.wizard.retreat() {
            self.focused = 0;
            self.load_input();
            self.clear_status();
        }
    }

    /// Revisit an earlier step
    pub fn jump_to(&mut self, step: Step) {
        self.commit_input();
        match self.wizard.jump_to(step) {
            Ok(()) => {
                self.focused = 0;
                self.load_input();
                self.clear_status();
            }
            Err(_) => self.set_status("Complete the current step to continue"),
        }
    }

    /// Ask for confirmation before submitting
    pub fn request_submit(&mut self) {
        self.commit_input();
        if self.wizard.step().is_last() {
            self.open_dialog(ActiveDialog::Confirm(ConfirmAction::Submit));
        } else {
            self.notify(Notification::warning(format!(
                "Registration can be submitted from {}",
                Step::last()
            )));
        }
    }

    /// Hand the record to the submission service
    pub fn submit(&mut self) {
        let mut service =
            SubmissionService::new(self.storage).with_audit(self.settings.audit_enabled);

        match self.wizard.submit(&mut service) {
            Ok(SubmitOutcome::Submitted(submission)) => {
                self.focused = 0;
                self.load_input();
                self.set_status(format!("Registration ID: {}", submission.id));
                self.notify(
                    Notification::success(self.settings.confirmation_message.clone())
                        .with_duration(6),
                );
            }
            Ok(SubmitOutcome::Blocked(_)) => self.report_blocked(),
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }

    /// Point the user at the first failing field
    fn report_blocked(&mut self) {
        let count = self.wizard.errors().len();
        let first = self.wizard.errors().fields().next();
        if let Some(first) = first {
            self.focus_field(first);
        }
        self.notify(Notification::warning(format!(
            "Please fix {} field(s) on {}",
            count,
            self.wizard.step()
        )));
    }
}
