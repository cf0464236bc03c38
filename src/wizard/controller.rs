//! Wizard controller
//!
//! Owns the registration record, the current step and the per-field error
//! set. Its methods are the only way to mutate that state.

use crate::error::{EsticError, EsticResult};
use crate::models::{Field, RegistrationRecord, Step, Submission, TimeOfDay};

use super::errors::ErrorSet;
use super::time_picker::{TimeBounds, TimeOfDayPicker};
use super::validation;

/// The collaborator that receives a completed registration
pub trait SubmissionSink {
    /// Accept a complete, validated record
    fn accept(&mut self, record: RegistrationRecord) -> EsticResult<Submission>;
}

/// Result of asking the wizard to move forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Validation passed and the wizard moved to this step
    Advanced(Step),
    /// Validation failed; the error set describes why
    Blocked,
    /// Validation passed but there is no further step (submit instead)
    AtLastStep,
}

/// Result of a submission attempt that reached validation
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The sink accepted the record; the wizard has been reset
    Submitted(Submission),
    /// A step failed validation; the wizard now shows that step
    Blocked(Step),
}

/// Multi-step registration wizard state
#[derive(Debug, Clone, PartialEq)]
pub struct WizardController {
    step: Step,
    record: RegistrationRecord,
    errors: ErrorSet,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardController {
    /// An empty form on the first step
    pub fn new() -> Self {
        Self {
            step: Step::first(),
            record: RegistrationRecord::new(),
            errors: ErrorSet::new(),
        }
    }

    /// Start on the first step with pre-filled values
    pub fn with_record(record: RegistrationRecord) -> Self {
        Self {
            record,
            ..Self::new()
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn value(&self, field: Field) -> &str {
        self.record.get(field)
    }

    /// Set a field's value and clear its error, if any
    ///
    /// Other fields are not re-validated.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.record.set(field, value);
        self.errors.clear(field);
    }

    /// Recompute the error set for `step` and replace the current one
    ///
    /// Errors of other steps are dropped. Returns whether the step is valid.
    pub fn validate_step(&mut self, step: Step) -> bool {
        self.errors = validation::validate_step(&self.record, step);
        self.errors.is_empty()
    }

    /// Move to the next step if the current one validates
    pub fn advance(&mut self) -> AdvanceOutcome {
        if !self.validate_step(self.step) {
            return AdvanceOutcome::Blocked;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                AdvanceOutcome::Advanced(next)
            }
            None => AdvanceOutcome::AtLastStep,
        }
    }

    /// Move to the previous step without validating
    ///
    /// Returns false on the first step.
    pub fn retreat(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Revisit an earlier, already completed step
    pub fn jump_to(&mut self, step: Step) -> EsticResult<()> {
        if step >= self.step {
            return Err(EsticError::Validation(format!(
                "Cannot jump forward to {} from {}",
                step, self.step
            )));
        }
        self.step = step;
        Ok(())
    }

    /// Validate and hand the record to the submission collaborator
    ///
    /// Only allowed on the final step. The final step is validated first;
    /// then every earlier step is re-checked, since fields of a revisited
    /// step may have been changed after it was passed. A failing step
    /// becomes the current step with its errors shown.
    ///
    /// If the sink fails, its error is returned and the wizard is left
    /// exactly as it was so the user can retry. On success the wizard is
    /// reset to an empty form.
    pub fn submit<S: SubmissionSink + ?Sized>(&mut self, sink: &mut S) -> EsticResult<SubmitOutcome> {
        if !self.step.is_last() {
            return Err(EsticError::Validation(format!(
                "Registration can only be submitted from {}",
                Step::last()
            )));
        }

        if !self.validate_step(self.step) {
            return Ok(SubmitOutcome::Blocked(self.step));
        }

        if let Some((step, errors)) = validation::first_invalid_step(&self.record) {
            self.step = step;
            self.errors = errors;
            return Ok(SubmitOutcome::Blocked(step));
        }

        let submission = sink.accept(self.record.clone())?;
        self.reset();
        Ok(SubmitOutcome::Submitted(submission))
    }

    /// Fraction of the wizard reached, `current / total`
    pub fn progress(&self) -> f64 {
        f64::from(self.step.number()) / f64::from(Step::COUNT)
    }

    /// Fields of a step that are currently shown
    pub fn visible_fields(&self, step: Step) -> Vec<Field> {
        step.fields()
            .into_iter()
            .filter(|&field| self.record.is_visible(field))
            .collect()
    }

    /// Picker limits for a time field given the current travel dates
    pub fn time_bounds(&self, field: Field) -> TimeBounds {
        validation::time_bounds(&self.record, field)
    }

    /// A closed picker for a time field, seeded with its current value
    pub fn time_picker(&self, field: Field) -> TimeOfDayPicker {
        TimeOfDayPicker::new(self.time_bounds(field))
            .with_value(TimeOfDay::parse(self.record.get(field)))
    }

    /// Discard everything and start over
    fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::time_picker::Period;
    use crate::wizard::validation::tests::complete_record;

    /// Keeps accepted submissions in memory
    #[derive(Debug, Default)]
    struct MemorySink {
        accepted: Vec<Submission>,
    }

    impl SubmissionSink for MemorySink {
        fn accept(&mut self, record: RegistrationRecord) -> EsticResult<Submission> {
            let submission = Submission::new(record);
            self.accepted.push(submission.clone());
            Ok(submission)
        }
    }

    struct FailingSink;

    impl SubmissionSink for FailingSink {
        fn accept(&mut self, _record: RegistrationRecord) -> EsticResult<Submission> {
            Err(EsticError::Submission("collaborator unavailable".into()))
        }
    }

    fn fill_step(wizard: &mut WizardController, step: Step) {
        let complete = complete_record();
        for field in step.fields() {
            wizard.update_field(field, complete.get(field));
        }
    }

    #[test]
    fn test_new_wizard_is_empty_on_step_one() {
        let wizard = WizardController::new();
        assert_eq!(wizard.step(), Step::PersonalDetails);
        assert!(wizard.errors().is_empty());
        assert_eq!(wizard.record(), &RegistrationRecord::new());
        assert!((wizard.progress() - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_advance_with_valid_step() {
        let mut wizard = WizardController::new();
        fill_step(&mut wizard, Step::PersonalDetails);

        assert_eq!(wizard.advance(), AdvanceOutcome::Advanced(Step::ProgramSchedule));
        assert_eq!(wizard.step(), Step::ProgramSchedule);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_advance_blocked_by_missing_field() {
        let mut wizard = WizardController::new();
        fill_step(&mut wizard, Step::PersonalDetails);
        wizard.update_field(Field::Mobile, "");

        assert_eq!(wizard.advance(), AdvanceOutcome::Blocked);
        assert_eq!(wizard.step(), Step::PersonalDetails);
        assert_eq!(wizard.error(Field::Mobile), Some("Mobile number is required"));
        assert_eq!(wizard.errors().len(), 1);
    }

    #[test]
    fn test_update_clears_only_that_fields_error() {
        let mut wizard = WizardController::new();
        assert!(!wizard.validate_step(Step::PersonalDetails));
        assert!(wizard.error(Field::FirstName).is_some());

        wizard.update_field(Field::FirstName, "A");
        assert!(wizard.error(Field::FirstName).is_none());
        assert!(wizard.error(Field::LastName).is_some());

        // Clearing happens on change, not on validity
        wizard.update_field(Field::Email, "not-an-email");
        assert!(wizard.error(Field::Email).is_none());
    }

    #[test]
    fn test_validate_step_replaces_errors_wholesale() {
        let mut wizard = WizardController::new();
        assert!(!wizard.validate_step(Step::PersonalDetails));
        assert!(wizard.error(Field::Prefix).is_some());

        assert!(!wizard.validate_step(Step::Preferences));
        assert!(wizard.error(Field::Prefix).is_none());
        assert!(wizard.error(Field::MealPreference).is_some());
    }

    #[test]
    fn test_retreat_skips_validation() {
        let mut wizard = WizardController::new();
        fill_step(&mut wizard, Step::PersonalDetails);
        wizard.advance();
        fill_step(&mut wizard, Step::ProgramSchedule);
        wizard.advance();
        assert_eq!(wizard.step(), Step::TravelDetails);

        assert!(wizard.retreat());
        assert_eq!(wizard.step(), Step::ProgramSchedule);

        assert!(wizard.retreat());
        assert!(!wizard.retreat());
        assert_eq!(wizard.step(), Step::PersonalDetails);
    }

    #[test]
    fn test_jump_only_backwards() {
        let mut wizard = WizardController::new();
        fill_step(&mut wizard, Step::PersonalDetails);
        wizard.advance();
        fill_step(&mut wizard, Step::ProgramSchedule);
        wizard.advance();

        assert!(wizard.jump_to(Step::Preferences).is_err());
        assert!(wizard.jump_to(Step::TravelDetails).is_err());
        assert_eq!(wizard.step(), Step::TravelDetails);

        wizard.jump_to(Step::PersonalDetails).unwrap();
        assert_eq!(wizard.step(), Step::PersonalDetails);
    }

    #[test]
    fn test_advance_on_last_step_stays() {
        let mut wizard = WizardController::with_record(complete_record());
        for _ in 0..4 {
            wizard.advance();
        }
        assert_eq!(wizard.step(), Step::Preferences);
        assert_eq!(wizard.advance(), AdvanceOutcome::AtLastStep);
        assert_eq!(wizard.step(), Step::Preferences);
        assert!((wizard.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_end_to_end_submission() {
        let mut wizard = WizardController::new();
        for step in Step::ALL {
            fill_step(&mut wizard, step);
            if !step.is_last() {
                assert_eq!(wizard.advance(), AdvanceOutcome::Advanced(step.next().unwrap()));
            }
        }

        let expected = wizard.record().clone();
        let mut sink = MemorySink::default();
        let outcome = wizard.submit(&mut sink).unwrap();

        match outcome {
            SubmitOutcome::Submitted(submission) => assert_eq!(submission.record, expected),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(sink.accepted.len(), 1);
        assert_eq!(wizard, WizardController::new());
    }

    #[test]
    fn test_submit_requires_final_step() {
        let mut wizard = WizardController::with_record(complete_record());
        let mut sink = MemorySink::default();

        let err = wizard.submit(&mut sink).unwrap_err();
        assert!(err.is_validation());
        assert!(sink.accepted.is_empty());
    }

    #[test]
    fn test_submit_blocked_on_final_step_errors() {
        let mut wizard = WizardController::with_record(complete_record());
        for _ in 0..4 {
            wizard.advance();
        }
        wizard.update_field(Field::MealPreference, "");

        let mut sink = MemorySink::default();
        let outcome = wizard.submit(&mut sink).unwrap();
        assert_eq!(outcome, SubmitOutcome::Blocked(Step::Preferences));
        assert!(wizard.error(Field::MealPreference).is_some());
        assert!(sink.accepted.is_empty());
    }

    #[test]
    fn test_submit_routes_back_to_stale_invalid_step() {
        let mut wizard = WizardController::with_record(complete_record());
        for _ in 0..4 {
            wizard.advance();
        }
        // Edited behind the wizard's back after step 2 was passed
        wizard.update_field(Field::Day2Session2, "");

        let mut sink = MemorySink::default();
        let outcome = wizard.submit(&mut sink).unwrap();
        assert_eq!(outcome, SubmitOutcome::Blocked(Step::ProgramSchedule));
        assert_eq!(wizard.step(), Step::ProgramSchedule);
        assert_eq!(wizard.error(Field::Day2Session2), Some("Please select a session"));
        assert!(sink.accepted.is_empty());
    }

    #[test]
    fn test_sink_failure_keeps_state() {
        let mut wizard = WizardController::with_record(complete_record());
        for _ in 0..4 {
            wizard.advance();
        }
        let before = wizard.clone();

        let err = wizard.submit(&mut FailingSink).unwrap_err();
        assert!(matches!(err, EsticError::Submission(_)));
        assert_eq!(wizard, before);
    }

    #[test]
    fn test_visible_fields_follow_flags() {
        let mut wizard = WizardController::new();
        assert_eq!(
            wizard.visible_fields(Step::Accommodation),
            vec![Field::RequireAccommodation]
        );

        wizard.update_field(Field::RequireAccommodation, "no");
        assert_eq!(
            wizard.visible_fields(Step::Accommodation),
            vec![Field::RequireAccommodation, Field::AccommodationAddress]
        );
    }

    #[test]
    fn test_time_picker_uses_date_bounds() {
        let mut wizard = WizardController::new();
        wizard.update_field(Field::CheckinDate, "02-nov");

        let mut picker = wizard.time_picker(Field::CheckinTime);
        picker.open();
        let draft = picker.draft_mut().unwrap();
        draft.set_hour(11);
        draft.set_minute(45);
        draft.set_period(Period::Am);
        assert!(picker.confirm().is_err());

        picker.draft_mut().unwrap().set_period(Period::Pm);
        let time = picker.confirm().unwrap();
        wizard.update_field(Field::CheckinTime, time.to_string());
        assert_eq!(wizard.value(Field::CheckinTime), "23:45");

        wizard.update_field(Field::CheckinDate, "03-nov");
        assert_eq!(wizard.time_bounds(Field::CheckinTime), TimeBounds::unbounded());
        assert_eq!(wizard.time_bounds(Field::FirstName), TimeBounds::unbounded());
    }
}
