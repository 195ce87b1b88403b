use crate::app::{App, View};
use tracing::error;

use super::action_queue::Action;

pub(super) fn run_action(action: Action, app: &mut App) {
    match action {
        Action::SubmitEntry(entry) => {
            let label = format!("{} - {}", entry.user_name, entry.workout_type);
            match app.add_entry(entry) {
                Ok(_) => {
                    app.set_status(format!("Added {label}"));
                    app.navigate_to(View::Users);
                }
                Err(e) => {
                    error!("Failed to add workout: {e}");
                    app.set_status(format!("Error adding workout: {e}"));
                }
            }
        }
        Action::ConfirmDelete => {
            if let Err(e) = app.confirm_delete() {
                error!("Failed to delete workout: {e}");
                app.set_status(format!("Error deleting workout: {e}"));
            }
        }
    }
}
