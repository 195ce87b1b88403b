use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_list_key(key: KeyEvent, app: &mut App) {
    if app.search_focused {
        handle_search_key(key, app);
        return;
    }

    match key.code {
        KeyCode::Char('/') => app.search_focused = true,
        KeyCode::Char('t') => app.cycle_type_filter(true),
        KeyCode::Char('T') => app.cycle_type_filter(false),
        KeyCode::Char('p') | KeyCode::Char('P') => app.cycle_page_length(),
        KeyCode::Left | KeyCode::Char('h') => {
            if !app.previous_page() {
                app.set_status("Already on the first page");
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if !app.next_page() {
                app.set_status("Already on the last page");
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.focus_next_row(),
        KeyCode::Up | KeyCode::Char('k') => app.focus_previous_row(),
        KeyCode::Delete | KeyCode::Char('d') | KeyCode::Char('D') => app.begin_delete_focused(),
        KeyCode::Enter => {
            if let Some(user) = app.focused_entry_user() {
                app.select_user(user);
                app.navigate_to(View::Users);
            }
        }
        KeyCode::Char('a') | KeyCode::Char('A') => app.navigate_to(View::Form),
        KeyCode::Char('u') | KeyCode::Char('U') => app.navigate_to(View::Users),
        KeyCode::Esc => app.focused_row = None,
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

fn handle_search_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_char(c);
        }
        KeyCode::Backspace => app.search_input_backspace(),
        KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => app.search_focused = false,
        _ => {}
    }
}
