//! The habit store: authoritative in-memory collection plus persistence.
//!
//! This module defines [`HabitStore`], the object the presentation layer talks
//! to. The store owns the ordered habit list, hands out stable ids for the UI
//! to key its callbacks on, and persists the full collection through its
//! storage backend after every mutation.
//!
//! # Contract with the presentation layer
//!
//! The caller supplies `name` and `frequency` strings from user input and
//! receives back [`Habit`] values (with ids) to render. Later events refer to
//! habits by id via [`HabitStore::set_completed`] and [`HabitStore::remove`].
//! The store never exposes a mutable handle into its collection.

use crate::domain::error::{HabitkeepError, Result};
use crate::domain::{Habit, HabitId};
use crate::storage::{HabitRecord, JsonFile, Storage};
use std::path::PathBuf;

/// Owns the authoritative habit collection and its durable representation.
///
/// The store is explicitly constructed from a storage backend (or a file path
/// via [`HabitStore::open`]); there is no ambient global state, so any number
/// of independent stores can coexist, each over its own document.
///
/// Every mutating operation (`add`, `set_completed`, `remove`) rewrites the
/// full persisted document. That is acceptable at this scale (tens of
/// entries) and is an explicit non-goal to optimize.
///
/// # Examples
///
/// ```no_run
/// use habitkeep::HabitStore;
///
/// let mut store = HabitStore::open("/tmp/habits.json");
/// store.load()?;
///
/// let habit = store.add("Drink water", "Daily")?;
/// store.set_completed(habit.id, true)?;
/// store.remove(habit.id)?;
/// # Ok::<(), habitkeep::HabitkeepError>(())
/// ```
pub struct HabitStore {
    /// Persistence backend for the collection.
    backend: Box<dyn Storage>,

    /// Ordered collection, insertion order = display order.
    habits: Vec<Habit>,

    /// Next id to hand out. Monotonic for the lifetime of this store.
    next_id: u64,
}

impl HabitStore {
    /// Creates a store over an explicit storage backend.
    ///
    /// The collection starts empty; call [`HabitStore::load`] to pull the
    /// persisted habits in.
    #[must_use]
    pub fn new(backend: Box<dyn Storage>) -> Self {
        Self {
            backend,
            habits: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store backed by a JSON document at `path`.
    ///
    /// Convenience wrapper around [`HabitStore::new`] with a
    /// [`JsonFile`] backend. The file does not need to exist yet.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(JsonFile::new(path)))
    }

    /// Loads the persisted collection, replacing the in-memory one.
    ///
    /// Habits are assigned fresh ids in document order. An absent document
    /// yields an empty collection; that is the normal first run, not an
    /// error. Returns the loaded collection for the caller to render.
    ///
    /// # Errors
    ///
    /// Returns [`HabitkeepError::Io`] when storage cannot be read and
    /// [`HabitkeepError::Corrupt`] when the document cannot be parsed. The
    /// in-memory collection is left untouched on failure.
    pub fn load(&mut self) -> Result<&[Habit]> {
        let records = self.backend.load()?;

        let mut habits = Vec::with_capacity(records.len());
        for record in records {
            let mut habit = Habit::new(self.allocate_id(), record.name, record.frequency);
            habit.is_completed = record.is_completed;
            habits.push(habit);
        }
        self.habits = habits;

        tracing::debug!(count = self.habits.len(), "collection loaded");
        Ok(&self.habits)
    }

    /// Adds a new habit and persists the collection.
    ///
    /// `name` is trimmed of leading and trailing whitespace before storage.
    /// The new habit starts with `is_completed == false` and is appended at
    /// the end of the collection. Duplicate names are permitted. Returns a
    /// clone of the created habit so the caller can render it and keep its id.
    ///
    /// # Errors
    ///
    /// Returns [`HabitkeepError::EmptyName`] when `name` is empty after
    /// trimming; the collection and the document are left unchanged. Storage
    /// errors from the persist step are propagated.
    pub fn add(&mut self, name: &str, frequency: &str) -> Result<Habit> {
        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("rejecting habit with empty name");
            return Err(HabitkeepError::EmptyName);
        }

        let habit = Habit::new(self.allocate_id(), name, frequency);
        tracing::debug!(id = %habit.id, name = %habit.name, frequency = %habit.frequency, "habit added");

        self.habits.push(habit.clone());
        self.persist()?;
        Ok(habit)
    }

    /// Sets the completion flag of the identified habit and persists.
    ///
    /// Returns `Ok(true)` when a habit with `id` was found. A stale id (the
    /// habit was removed while a UI event was in flight) is tolerated: the
    /// call is a no-op, nothing is written, and `Ok(false)` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the persist step fails.
    pub fn set_completed(&mut self, id: HabitId, is_on: bool) -> Result<bool> {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            tracing::debug!(id = %id, "set_completed on unknown id, ignoring");
            return Ok(false);
        };

        habit.is_completed = is_on;
        tracing::debug!(id = %id, is_on = is_on, "completion updated");

        self.persist()?;
        Ok(true)
    }

    /// Removes the identified habit and persists.
    ///
    /// Returns `Ok(true)` when a habit was removed, `Ok(false)` when no habit
    /// with `id` exists (no-op, nothing written).
    ///
    /// # Errors
    ///
    /// Returns an error if the persist step fails.
    pub fn remove(&mut self, id: HabitId) -> Result<bool> {
        let Some(index) = self.habits.iter().position(|h| h.id == id) else {
            tracing::debug!(id = %id, "remove on unknown id, ignoring");
            return Ok(false);
        };

        let habit = self.habits.remove(index);
        tracing::debug!(id = %habit.id, name = %habit.name, "habit removed");

        self.persist()?;
        Ok(true)
    }

    /// Persists the current collection without mutating it.
    ///
    /// Every mutating operation already saves; this exists for callers that
    /// want an explicit flush point (e.g. on application shutdown).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&mut self) -> Result<()> {
        self.persist()
    }

    /// Returns the ordered collection for rendering.
    #[must_use]
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Looks up a habit by id.
    #[must_use]
    pub fn get(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Number of habits in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.habits.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    fn allocate_id(&mut self) -> HabitId {
        let id = HabitId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Writes the full collection through the backend.
    fn persist(&mut self) -> Result<()> {
        let records: Vec<HabitRecord> = self.habits.iter().map(HabitRecord::from).collect();
        self.backend.save(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn temp_dir() -> tempfile::TempDir {
        tempfile::tempdir().expect("temp dir")
    }

    fn store_at(dir: &tempfile::TempDir) -> HabitStore {
        HabitStore::open(dir.path().join("habits.json"))
    }

    /// Backend that keeps records in shared memory so tests can observe
    /// exactly what was persisted.
    #[derive(Default)]
    struct MemoryBackend {
        records: Arc<Mutex<Vec<HabitRecord>>>,
        saves: Arc<Mutex<usize>>,
    }

    impl Storage for MemoryBackend {
        fn load(&self) -> crate::Result<Vec<HabitRecord>> {
            Ok(self.records.lock().unwrap().clone())
        }

        fn save(&mut self, records: &[HabitRecord]) -> crate::Result<()> {
            *self.records.lock().unwrap() = records.to_vec();
            *self.saves.lock().unwrap() += 1;
            Ok(())
        }
    }

    #[test]
    fn add_appends_an_incomplete_habit() {
        let dir = temp_dir();
        let mut store = store_at(&dir);

        let habit = store.add("Drink water", "Daily").unwrap();
        assert_eq!(store.len(), 1);
        assert!(!habit.is_completed);
        assert_eq!(store.habits()[0], habit);
    }

    #[test]
    fn add_trims_the_name() {
        let dir = temp_dir();
        let mut store = store_at(&dir);

        let habit = store.add("  Read  ", "Weekly").unwrap();
        assert_eq!(habit.name, "Read");
    }

    #[test]
    fn add_rejects_blank_names() {
        let dir = temp_dir();
        let mut store = store_at(&dir);

        assert!(matches!(store.add("", "Daily"), Err(HabitkeepError::EmptyName)));
        assert!(matches!(store.add("   ", "Daily"), Err(HabitkeepError::EmptyName)));
        assert!(store.is_empty());
        // Nothing was persisted either.
        assert!(!dir.path().join("habits.json").exists());
    }

    #[test]
    fn duplicate_names_are_permitted() {
        let dir = temp_dir();
        let mut store = store_at(&dir);

        let first = store.add("Stretch", "Daily").unwrap();
        let second = store.add("Stretch", "Daily").unwrap();
        assert_eq!(store.len(), 2);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn toggle_round_trip_restores_the_flag() {
        let dir = temp_dir();
        let mut store = store_at(&dir);

        let habit = store.add("Meditate", "Daily").unwrap();
        assert!(store.set_completed(habit.id, true).unwrap());
        assert!(store.get(habit.id).unwrap().is_completed);

        assert!(store.set_completed(habit.id, false).unwrap());
        assert!(!store.get(habit.id).unwrap().is_completed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_deletes_exactly_one_record() {
        let dir = temp_dir();
        let mut store = store_at(&dir);

        let keep = store.add("Walk", "Daily").unwrap();
        let gone = store.add("Journal", "Weekly").unwrap();

        assert!(store.remove(gone.id).unwrap());
        assert_eq!(store.len(), 1);
        assert!(store.get(gone.id).is_none());
        assert!(store.get(keep.id).is_some());
    }

    #[test]
    fn stale_ids_are_tolerated() {
        let dir = temp_dir();
        let mut store = store_at(&dir);

        let habit = store.add("Run", "Weekly").unwrap();
        assert!(store.remove(habit.id).unwrap());

        // The UI may still fire callbacks for the row that was just deleted.
        assert!(!store.remove(habit.id).unwrap());
        assert!(!store.set_completed(habit.id, true).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn every_mutation_persists_the_full_collection() {
        let backend = MemoryBackend::default();
        let records = Arc::clone(&backend.records);
        let saves = Arc::clone(&backend.saves);

        let mut store = HabitStore::new(Box::new(backend));
        let habit = store.add("Drink water", "Daily").unwrap();
        store.set_completed(habit.id, true).unwrap();

        assert_eq!(*saves.lock().unwrap(), 2);
        let persisted = records.lock().unwrap();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].name, "Drink water");
        assert!(persisted[0].is_completed);
    }

    #[test]
    fn load_assigns_fresh_ids_in_document_order() {
        let dir = temp_dir();
        {
            let mut store = store_at(&dir);
            store.add("Drink water", "Daily").unwrap();
            store.add("Read", "Weekly").unwrap();
        }

        let mut store = store_at(&dir);
        let habits = store.load().unwrap();
        assert_eq!(habits.len(), 2);
        assert_eq!(habits[0].name, "Drink water");
        assert_eq!(habits[1].name, "Read");
        assert_ne!(habits[0].id, habits[1].id);
    }

    #[test]
    fn missing_document_loads_as_empty() {
        let dir = temp_dir();
        let mut store = store_at(&dir);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_document_fails_load_without_clearing_state() {
        let dir = temp_dir();
        let path = dir.path().join("habits.json");

        let mut store = HabitStore::open(path.clone());
        store.add("Drink water", "Daily").unwrap();

        std::fs::write(&path, "not json at all").unwrap();
        assert!(matches!(store.load(), Err(HabitkeepError::Corrupt(_))));
        // The in-memory collection survives the failed reload.
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn full_scenario_survives_a_reload() {
        let dir = temp_dir();

        let mut store = store_at(&dir);
        let water = store.add("Drink water", "Daily").unwrap();
        store.add("Read", "Weekly").unwrap();
        store.set_completed(water.id, true).unwrap();
        store.save().unwrap();

        let mut fresh = store_at(&dir);
        let habits = fresh.load().unwrap();
        assert_eq!(habits.len(), 2);

        assert_eq!(habits[0].name, "Drink water");
        assert_eq!(habits[0].frequency, "Daily");
        assert!(habits[0].is_completed);

        assert_eq!(habits[1].name, "Read");
        assert_eq!(habits[1].frequency, "Weekly");
        assert!(!habits[1].is_completed);
    }
}
