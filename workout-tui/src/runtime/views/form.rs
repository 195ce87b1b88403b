use crate::app::{App, FormField, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let on_type_selector = app.form.focused_field == FormField::WorkoutType;
    match key.code {
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(input) = app.form.focused_input() {
                input.clear();
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.focused_field = app.form.focused_field.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.focused_field = app.form.focused_field.previous();
        }
        KeyCode::Left if on_type_selector => app.form.cycle_workout_type(false),
        KeyCode::Right if on_type_selector => app.form.cycle_workout_type(true),
        KeyCode::Char(' ') if on_type_selector => app.form.cycle_workout_type(true),
        KeyCode::Left => {
            if let Some(input) = app.form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = app.form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.input_char(c);
        }
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Enter => match app.form.to_new_entry() {
            Some(entry) => enqueue_action(action_tx, Action::SubmitEntry(entry)),
            None => {
                let hint = app.form.validation_hint().unwrap_or("Form is incomplete");
                app.set_status(hint);
            }
        },
        KeyCode::Esc => app.navigate_to(View::List),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_app;
    use crate::runtime::action_queue::channel;
    use workout_core::{NewWorkoutEntry, WorkoutType};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, tx: &ActionTx, text: &str) {
        for c in text.chars() {
            handle_form_key(press(KeyCode::Char(c)), app, tx);
        }
    }

    #[test]
    fn filling_all_fields_submits_entry() {
        let mut app = test_app();
        app.navigate_to(View::Form);
        let (tx, rx) = channel();

        type_text(&mut app, &tx, "Asha");
        handle_form_key(press(KeyCode::Tab), &mut app, &tx);
        handle_form_key(press(KeyCode::Right), &mut app, &tx);
        handle_form_key(press(KeyCode::Right), &mut app, &tx);
        assert_eq!(app.form.workout_type, Some(WorkoutType::Walking));
        handle_form_key(press(KeyCode::Tab), &mut app, &tx);
        type_text(&mut app, &tx, "40");
        handle_form_key(press(KeyCode::Enter), &mut app, &tx);

        assert_eq!(
            rx.try_recv().ok(),
            Some(Action::SubmitEntry(NewWorkoutEntry::new("Asha", "Walking", 40.0)))
        );
    }

    #[test]
    fn incomplete_form_is_not_submitted() {
        let mut app = test_app();
        app.navigate_to(View::Form);
        let (tx, rx) = channel();

        type_text(&mut app, &tx, "Asha");
        handle_form_key(press(KeyCode::Enter), &mut app, &tx);

        assert!(rx.try_recv().is_err());
        assert_eq!(app.status_message.as_deref(), Some("Workout Type is required"));
    }

    #[test]
    fn letters_on_type_selector_are_ignored() {
        let mut app = test_app();
        let (tx, _rx) = channel();
        app.form.focused_field = FormField::WorkoutType;
        type_text(&mut app, &tx, "ab");
        assert_eq!(app.form.workout_type, None);
        assert!(app.form.user_name.value.is_empty());
    }

    #[test]
    fn escape_returns_to_list() {
        let mut app = test_app();
        app.navigate_to(View::Form);
        let (tx, _rx) = channel();
        handle_form_key(press(KeyCode::Esc), &mut app, &tx);
        assert_eq!(app.current_view, View::List);
    }
}
