//! Per-user listing and totals over the whole entry collection.

use std::collections::HashSet;

use crate::entry::WorkoutEntry;

/// Workout count and minute total for one user.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UserAggregate {
    pub count_of_workouts: usize,
    pub total_minutes: f64,
}

/// Totals for `user_name` across every entry (exact, case-sensitive match).
pub fn user_aggregate(entries: &[WorkoutEntry], user_name: &str) -> UserAggregate {
    entries
        .iter()
        .filter(|entry| entry.user_name == user_name)
        .fold(UserAggregate::default(), |acc, entry| UserAggregate {
            count_of_workouts: acc.count_of_workouts + 1,
            total_minutes: acc.total_minutes + entry.workout_minutes,
        })
}

/// Distinct user names in first-occurrence order.
pub fn unique_users(entries: &[WorkoutEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|entry| seen.insert(entry.user_name.as_str()))
        .map(|entry| entry.user_name.clone())
        .collect()
}
