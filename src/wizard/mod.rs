//! Registration wizard
//!
//! The logical core of the application, independent of any front-end:
//!
//! - `WizardController`: record, current step and error set, with
//!   validation-gated step transitions and the submission hand-off
//! - `validation`: the per-step field rules
//! - `TimeOfDayPicker`: quarter-hour time selection with optional bounds

pub mod controller;
pub mod errors;
pub mod time_picker;
pub mod validation;

pub use controller::{AdvanceOutcome, SubmissionSink, SubmitOutcome, WizardController};
pub use errors::ErrorSet;
pub use time_picker::{Period, PickerState, TimeBounds, TimeDraft, TimeOfDayPicker, TimeRejection};
