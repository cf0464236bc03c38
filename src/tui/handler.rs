//! Event handler for the TUI
//!
//! Routes keyboard events to the dialog, the time picker or the form,
//! depending on what currently has focus.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::{FieldKind, Step};

use super::app::{ActiveDialog, App, ConfirmAction};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    if app.picker.is_some() {
        return handle_picker_key(app, key);
    }

    handle_form_key(app, key)
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Confirm(action) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.close_dialog();
                match action {
                    ConfirmAction::Quit => app.quit(),
                    ConfirmAction::Submit => app.submit(),
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys while the time picker is open
fn handle_picker_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            app.confirm_picker();
            return Ok(());
        }
        KeyCode::Esc => {
            app.cancel_picker();
            return Ok(());
        }
        _ => {}
    }

    let Some(draft) = app.picker.as_mut().and_then(|open| open.picker.draft_mut()) else {
        return Ok(());
    };

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => draft.next_hour(),
        KeyCode::Down | KeyCode::Char('j') => draft.prev_hour(),
        KeyCode::Right | KeyCode::Char('l') => draft.next_minute(),
        KeyCode::Left | KeyCode::Char('h') => draft.prev_minute(),
        KeyCode::Char('p') | KeyCode::Char('a') | KeyCode::Char(' ') => draft.toggle_period(),
        _ => {}
    }
    Ok(())
}

/// Handle keys on the form
fn handle_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Wizard-level keys
    match key.code {
        KeyCode::Esc => {
            app.open_dialog(ActiveDialog::Confirm(ConfirmAction::Quit));
            return Ok(());
        }
        KeyCode::F(1) => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::F(n @ 2..=6) => {
            if let Some(step) = Step::from_number(n - 1) {
                app.jump_to(step);
            }
            return Ok(());
        }
        KeyCode::PageDown => {
            app.advance();
            return Ok(());
        }
        KeyCode::PageUp => {
            app.retreat();
            return Ok(());
        }
        KeyCode::Char('n') if ctrl => {
            app.advance();
            return Ok(());
        }
        KeyCode::Char('p') if ctrl => {
            app.retreat();
            return Ok(());
        }
        KeyCode::Char('s') if ctrl => {
            app.request_submit();
            return Ok(());
        }
        KeyCode::Tab | KeyCode::Down => {
            app.commit_input();
            app.focus_next();
            return Ok(());
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.commit_input();
            app.focus_prev();
            return Ok(());
        }
        _ => {}
    }

    let Some(field) = app.focused_field() else {
        return Ok(());
    };

    match field.kind() {
        FieldKind::Choice => match key.code {
            KeyCode::Right | KeyCode::Char(' ') => app.cycle_choice(true),
            KeyCode::Left => app.cycle_choice(false),
            KeyCode::Enter => app.focus_next(),
            _ => {}
        },
        FieldKind::Time => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                app.open_picker();
            }
        }
        FieldKind::Text | FieldKind::Email | FieldKind::Date => {
            match key.code {
                KeyCode::Char(c) if !ctrl => app.input.insert(c),
                KeyCode::Backspace => app.input.backspace(),
                KeyCode::Delete => app.input.delete(),
                KeyCode::Left => app.input.move_left(),
                KeyCode::Right => app.input.move_right(),
                KeyCode::Home => app.input.move_start(),
                KeyCode::End => app.input.move_end(),
                KeyCode::Enter => {
                    app.commit_input();
                    app.focus_next();
                    return Ok(());
                }
                _ => return Ok(()),
            }
            app.commit_input();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::EsticPaths;
    use crate::config::settings::Settings;
    use crate::models::Field;
    use crate::storage::Storage;
    use crate::wizard::validation::tests::complete_record;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = EsticPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn press_ctrl(app: &mut App, c: char) {
        handle_event(
            app,
            Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
        )
        .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Fill the current step from a complete record, bypassing key entry
    fn fill_current_step(app: &mut App) {
        let complete = complete_record();
        for field in app.wizard.step().fields() {
            app.wizard.update_field(field, complete.get(field));
        }
        if let Some(first) = app.visible_fields().first().copied() {
            app.focus_field(first);
        }
    }

    #[test]
    fn test_typing_updates_record_and_clears_error() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.wizard.step(), Step::PersonalDetails);
        assert!(app.wizard.error(Field::FirstName).is_some());
        assert!(!app.notifications.is_empty());

        app.focus_field(Field::FirstName);
        type_text(&mut app, "Ravi");
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.wizard.value(Field::FirstName), "Rav");
        assert!(app.wizard.error(Field::FirstName).is_none());
        assert!(app.wizard.error(Field::LastName).is_some());
    }

    #[test]
    fn test_blocked_advance_focuses_first_error() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Right);
        app.focus_field(Field::Designation);
        press(&mut app, KeyCode::PageDown);

        assert_eq!(app.wizard.step(), Step::PersonalDetails);
        assert!(app.wizard.error(Field::Prefix).is_none());
        assert_eq!(app.focused_field(), Some(Field::FirstName));
    }

    #[test]
    fn test_choice_cycling() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        assert_eq!(app.focused_field(), Some(Field::Prefix));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.wizard.value(Field::Prefix), "mr");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.wizard.value(Field::Prefix), "dr");
    }

    #[test]
    fn test_tab_wraps_around_visible_fields() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_field(), Some(Field::IdProofNumber));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_field(), Some(Field::Prefix));
    }

    #[test]
    fn test_conditional_field_appears() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        for _ in 0..3 {
            fill_current_step(&mut app);
            press(&mut app, KeyCode::PageDown);
        }
        assert_eq!(app.wizard.step(), Step::Accommodation);

        app.wizard.update_field(Field::RequireAccommodation, "");
        app.focused = 0;
        assert_eq!(app.visible_fields().len(), 1);

        // yes -> no
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.wizard.value(Field::RequireAccommodation), "no");
        assert_eq!(app.visible_fields().len(), 2);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_field(), Some(Field::AccommodationAddress));
    }

    #[test]
    fn test_time_picker_flow() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        fill_current_step(&mut app);
        press(&mut app, KeyCode::PageDown);
        fill_current_step(&mut app);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.wizard.step(), Step::TravelDetails);

        app.wizard.update_field(Field::CheckinDate, "02-nov");
        app.wizard.update_field(Field::CheckinTime, "");
        app.focus_field(Field::CheckinTime);

        press(&mut app, KeyCode::Enter);
        assert!(app.picker.is_some());

        // 12:00 PM -> 11:00 PM -> 11:00 AM, before the noon minimum
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Enter);
        assert!(app.picker.is_some());
        assert_eq!(app.status_message.as_deref(), Some("Time must be after 12:00 PM"));
        assert_eq!(app.wizard.value(Field::CheckinTime), "");

        // Back to PM and a quarter past
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert!(app.picker.is_none());
        assert_eq!(app.wizard.value(Field::CheckinTime), "23:15");
    }

    #[test]
    fn test_picker_escape_discards_draft() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.wizard = crate::wizard::WizardController::with_record(complete_record());
        fill_current_step(&mut app);
        press(&mut app, KeyCode::PageDown);
        press(&mut app, KeyCode::PageDown);
        app.focus_field(Field::CheckoutTime);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Esc);

        assert!(app.picker.is_none());
        assert!(!app.has_dialog());
        assert_eq!(app.wizard.value(Field::CheckoutTime), "10:00");
    }

    #[test]
    fn test_function_keys_only_jump_back() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        fill_current_step(&mut app);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.wizard.step(), Step::ProgramSchedule);

        press(&mut app, KeyCode::F(5));
        assert_eq!(app.wizard.step(), Step::ProgramSchedule);

        press(&mut app, KeyCode::F(2));
        assert_eq!(app.wizard.step(), Step::PersonalDetails);
    }

    #[test]
    fn test_submit_from_last_step() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.wizard = crate::wizard::WizardController::with_record(complete_record());
        for _ in 0..4 {
            press(&mut app, KeyCode::PageDown);
        }
        assert_eq!(app.wizard.step(), Step::Preferences);

        press_ctrl(&mut app, 's');
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Confirm(ConfirmAction::Submit)
        );

        press(&mut app, KeyCode::Char('y'));
        assert!(!app.has_dialog());
        assert_eq!(app.wizard.step(), Step::PersonalDetails);
        assert_eq!(app.wizard.value(Field::FirstName), "");
        assert_eq!(storage.submissions.count().unwrap(), 1);
        assert!(app
            .status_message
            .as_deref()
            .unwrap()
            .starts_with("Registration ID: reg-"));
    }

    #[test]
    fn test_escape_asks_before_quitting() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.active_dialog, ActiveDialog::Confirm(ConfirmAction::Quit));
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }
}
