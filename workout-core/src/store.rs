//! The entry store: the ordered list of workouts with write-through persistence.

use tracing::{debug, warn};

use crate::entry::{EntryId, NewWorkoutEntry, WorkoutEntry};
use crate::error::{Result, StoreError};
use crate::storage::Storage;

/// Key under which the serialized entry list is stored.
pub const STORAGE_KEY: &str = "workoutEntries";

/// Owns the workout entries and writes the full list back to storage after
/// every mutation.
#[derive(Debug)]
pub struct EntryStore<S: Storage> {
    storage: S,
    entries: Vec<WorkoutEntry>,
}

impl<S: Storage> EntryStore<S> {
    /// Read the entries from `storage`, seeding sample data when nothing has
    /// been stored yet. An empty or whitespace-only blob counts as nothing.
    pub fn load(storage: S) -> Result<Self> {
        match storage.get(STORAGE_KEY)? {
            Some(raw) if !raw.trim().is_empty() => {
                let entries: Vec<WorkoutEntry> =
                    serde_json::from_str(&raw).map_err(StoreError::Decode)?;
                debug!(count = entries.len(), "loaded workout entries");
                Ok(Self { storage, entries })
            }
            _ => {
                let mut store = Self {
                    storage,
                    entries: seed_entries(),
                };
                store.persist()?;
                debug!(count = store.entries.len(), "seeded sample workout entries");
                Ok(store)
            }
        }
    }

    /// Append a new entry and persist. Returns the id assigned to it.
    pub fn add(&mut self, entry: NewWorkoutEntry) -> Result<EntryId> {
        if entry.user_name.trim().is_empty() {
            return Err(StoreError::MissingField("userName"));
        }
        if entry.workout_type.trim().is_empty() {
            return Err(StoreError::MissingField("workoutType"));
        }
        if !entry.workout_minutes.is_finite() {
            return Err(StoreError::MissingField("workoutMinutes"));
        }

        let id = self.unused_id();
        debug!(%id, user = %entry.user_name, workout_type = %entry.workout_type, "adding workout entry");
        self.entries.push(entry.into_entry(id.clone()));
        self.persist()?;
        Ok(id)
    }

    /// Remove the first entry with the given id and persist.
    ///
    /// An unknown id leaves the entries untouched. Returns whether an entry
    /// was removed.
    pub fn delete(&mut self, id: &EntryId) -> Result<bool> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id.as_ref() == Some(id));

        let removed = match position {
            Some(index) => {
                self.entries.remove(index);
                debug!(%id, "deleted workout entry");
                true
            }
            None => {
                warn!(%id, "no workout entry with this id");
                false
            }
        };
        self.persist()?;
        Ok(removed)
    }

    pub fn entries(&self) -> &[WorkoutEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.entries).map_err(StoreError::Encode)?;
        self.storage.set(STORAGE_KEY, &raw)?;
        Ok(())
    }

    fn unused_id(&self) -> EntryId {
        loop {
            let id = EntryId::generate();
            if !self.entries.iter().any(|e| e.id.as_ref() == Some(&id)) {
                return id;
            }
        }
    }
}

fn seed_entries() -> Vec<WorkoutEntry> {
    [
        ("Bhola das", "Running", 30.0),
        ("Bhola das", "Cycling", 45.0),
        ("Saurabh kumar", "Swimming", 60.0),
        ("Saurabh kumar", "Running", 20.0),
        ("Tarun meena", "Yoga", 50.0),
        ("Tarun meena", "Cycling", 40.0),
    ]
    .into_iter()
    .map(|(user, workout_type, minutes)| {
        NewWorkoutEntry::new(user, workout_type, minutes).into_entry(EntryId::generate())
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn seeded_store() -> EntryStore<MemoryStorage> {
        EntryStore::load(MemoryStorage::new()).unwrap()
    }

    #[test]
    fn empty_storage_is_seeded_and_persisted() {
        let store = seeded_store();
        assert_eq!(store.len(), 6);
        assert_eq!(store.entries()[0].user_name, "Bhola das");
        assert_eq!(store.entries()[5].workout_type, "Cycling");

        let raw = store.storage().get(STORAGE_KEY).unwrap().unwrap();
        let persisted: Vec<WorkoutEntry> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, store.entries());
    }

    #[test]
    fn reload_sees_the_same_seed() {
        let store = seeded_store();
        let first = store.entries().to_vec();
        let reloaded = EntryStore::load(store.into_storage()).unwrap();
        assert_eq!(reloaded.entries(), first.as_slice());
    }

    #[test]
    fn adds_append_in_call_order() {
        let mut store = seeded_store();
        store.add(NewWorkoutEntry::new("A", "Yoga", 10.0)).unwrap();
        store.add(NewWorkoutEntry::new("B", "Dance", 20.0)).unwrap();
        store.add(NewWorkoutEntry::new("A", "HIIT", 30.0)).unwrap();

        assert_eq!(store.len(), 9);
        let tail: Vec<_> = store.entries()[6..]
            .iter()
            .map(|e| (e.user_name.as_str(), e.workout_type.as_str()))
            .collect();
        assert_eq!(tail, vec![("A", "Yoga"), ("B", "Dance"), ("A", "HIIT")]);
    }

    #[test]
    fn add_then_reload_round_trips() {
        let mut store = seeded_store();
        let id = store
            .add(NewWorkoutEntry::new("Asha", "Pilates", 25.5))
            .unwrap();
        let before = store.entries().to_vec();

        let reloaded = EntryStore::load(store.into_storage()).unwrap();
        assert_eq!(reloaded.entries(), before.as_slice());
        assert_eq!(reloaded.entries()[6].id.as_ref(), Some(&id));
    }

    #[test]
    fn add_requires_name_and_type() {
        let mut store = seeded_store();
        let err = store.add(NewWorkoutEntry::new("  ", "Yoga", 10.0)).unwrap_err();
        assert!(matches!(err, StoreError::MissingField("userName")));
        let err = store.add(NewWorkoutEntry::new("A", "", 10.0)).unwrap_err();
        assert!(matches!(err, StoreError::MissingField("workoutType")));
        let err = store
            .add(NewWorkoutEntry::new("A", "Yoga", f64::NAN))
            .unwrap_err();
        assert!(matches!(err, StoreError::MissingField("workoutMinutes")));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn negative_minutes_are_accepted() {
        let mut store = seeded_store();
        store.add(NewWorkoutEntry::new("A", "Yoga", -5.0)).unwrap();
        assert_eq!(store.entries()[6].workout_minutes, -5.0);
    }

    #[test]
    fn delete_removes_matching_entry_and_persists() {
        let mut store = seeded_store();
        let id = store.entries()[1].id.clone().unwrap();

        assert!(store.delete(&id).unwrap());
        assert_eq!(store.len(), 5);
        assert!(store.entries().iter().all(|e| e.id.as_ref() != Some(&id)));

        let reloaded = EntryStore::load(store.into_storage()).unwrap();
        assert_eq!(reloaded.len(), 5);
    }

    #[test]
    fn delete_unknown_id_is_a_no_op() {
        let mut store = seeded_store();
        let before = store.entries().to_vec();
        assert!(!store.delete(&EntryId::new("missing")).unwrap());
        assert_eq!(store.entries(), before.as_slice());
    }

    #[test]
    fn delete_only_removes_first_duplicate() {
        let raw = r#"[
            {"id":"dup","userName":"A","workoutType":"Yoga","workoutMinutes":1},
            {"id":"dup","userName":"B","workoutType":"Yoga","workoutMinutes":2}
        ]"#;
        let mut store =
            EntryStore::load(MemoryStorage::new().with_value(STORAGE_KEY, raw)).unwrap();
        store.delete(&EntryId::new("dup")).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].user_name, "B");
    }

    #[test]
    fn stored_entries_without_ids_or_known_types_load() {
        let raw = r#"[{"userName":"A","workoutType":"Rowing","workoutMinutes":15}]"#;
        let store = EntryStore::load(MemoryStorage::new().with_value(STORAGE_KEY, raw)).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].id, None);
        assert_eq!(store.entries()[0].workout_type, "Rowing");
    }

    #[test]
    fn empty_stored_list_is_not_reseeded() {
        let store =
            EntryStore::load(MemoryStorage::new().with_value(STORAGE_KEY, "[]")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn empty_blob_is_reseeded() {
        for blob in ["", "  \n"] {
            let store =
                EntryStore::load(MemoryStorage::new().with_value(STORAGE_KEY, blob)).unwrap();
            assert_eq!(store.len(), 6);
            let stored = store.storage().get(STORAGE_KEY).unwrap().unwrap();
            assert!(stored.starts_with('['));
        }
    }

    #[test]
    fn malformed_blob_is_a_decode_error() {
        let result = EntryStore::load(MemoryStorage::new().with_value(STORAGE_KEY, "{oops"));
        assert!(matches!(result, Err(StoreError::Decode(_))));
    }
}
