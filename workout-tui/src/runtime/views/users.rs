use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_users_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.focus_next_user(),
        KeyCode::Up | KeyCode::Char('k') => app.focus_previous_user(),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_focused_user(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.navigate_to(View::Form),
        KeyCode::Esc | KeyCode::Char('l') | KeyCode::Char('L') => app.navigate_to(View::List),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_app;
    use crossterm::event::KeyModifiers;

    #[test]
    fn selecting_a_user_replaces_previous_selection() {
        let mut app = test_app();
        app.navigate_to(View::Users);
        handle_users_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &mut app);
        assert_eq!(app.selected_user.as_deref(), Some("Bhola das"));

        handle_users_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), &mut app);
        handle_users_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &mut app);
        assert_eq!(app.selected_user.as_deref(), Some("Saurabh kumar"));
        assert_eq!(app.chart().unwrap().labels, vec!["Swimming", "Running"]);
    }
}
