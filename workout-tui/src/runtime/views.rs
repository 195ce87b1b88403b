use crate::app::{App, View};
use crossterm::event::KeyEvent;

use super::action_queue::{Action, ActionTx};

mod confirm_delete;
mod form;
mod list;
mod users;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match &app.current_view {
        View::Form => form::handle_form_key(key, app, action_tx),
        View::List => list::handle_list_key(key, app),
        View::Users => users::handle_users_key(key, app),
        View::ConfirmDelete => confirm_delete::handle_confirm_delete_key(key, app, action_tx),
    }
}
