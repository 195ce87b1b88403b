use std::sync::mpsc::{self, Receiver, Sender};
use workout_core::NewWorkoutEntry;

/// Store mutations requested by key handlers, run by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    SubmitEntry(NewWorkoutEntry),
    ConfirmDelete,
}

pub(super) type ActionTx = Sender<Action>;
pub(super) type ActionRx = Receiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::channel()
}
