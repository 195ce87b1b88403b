//! Workout entry types.

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LENGTH: usize = 9;

/// Opaque entry identifier, unique among ids handed out by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Random 9-character base-36 id.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let id = (0..ID_LENGTH)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect::<String>();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed set of categories offered when recording a workout.
///
/// Stored entries keep their type as a plain string, so data loaded from
/// storage is not limited to these values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum WorkoutType {
    Running,
    Walking,
    Cycling,
    Swimming,
    Weightlifting,
    Yoga,
    Pilates,
    #[strum(serialize = "HIIT")]
    Hiit,
    Dance,
    #[strum(serialize = "Martial Arts")]
    MartialArts,
}

impl WorkoutType {
    pub fn all() -> Vec<WorkoutType> {
        WorkoutType::iter().collect()
    }
}

/// One recorded workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,
    pub user_name: String,
    pub workout_type: String,
    pub workout_minutes: f64,
}

/// Entry data as submitted by the form, before the store assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkoutEntry {
    pub user_name: String,
    pub workout_type: String,
    pub workout_minutes: f64,
}

impl NewWorkoutEntry {
    pub fn new(
        user_name: impl Into<String>,
        workout_type: impl Into<String>,
        workout_minutes: f64,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            workout_type: workout_type.into(),
            workout_minutes,
        }
    }

    pub(crate) fn into_entry(self, id: EntryId) -> WorkoutEntry {
        WorkoutEntry {
            id: Some(id),
            user_name: self.user_name,
            workout_type: self.workout_type,
            workout_minutes: self.workout_minutes,
        }
    }
}
