//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait that abstracts over persistence
//! backends. The store is constructed with an explicit backend (or a file
//! path), so there is no process-wide ambient state and tests can run any
//! number of independent stores side by side.
//!
//! # Design Philosophy
//!
//! The trait is deliberately minimal: the collection is small and rewritten in
//! full on every mutation, so the only operations a backend needs are "read
//! the whole document" and "replace the whole document". Anything richer
//! (queries, deltas, batching) is out of scope by design.

use crate::domain::error::Result;
use crate::storage::models::HabitRecord;

/// Abstraction over persistent storage for the habit collection.
///
/// # Implementations
///
/// - [`JsonFile`](crate::storage::JsonFile): single JSON document on disk with
///   atomic writes (default)
///
/// # Examples
///
/// ```no_run
/// use habitkeep::storage::{JsonFile, Storage};
/// use std::path::PathBuf;
///
/// let backend = JsonFile::new(PathBuf::from("/tmp/habits.json"));
/// let records = backend.load()?;
/// # Ok::<(), habitkeep::HabitkeepError>(())
/// ```
pub trait Storage: Send {
    /// Reads the full persisted collection.
    ///
    /// A backend that has never been written to returns an empty collection,
    /// not an error. Order is preserved exactly as last saved.
    ///
    /// # Errors
    ///
    /// Returns [`HabitkeepError::Io`](crate::HabitkeepError::Io) when the
    /// storage cannot be read, and
    /// [`HabitkeepError::Corrupt`](crate::HabitkeepError::Corrupt) when it can
    /// be read but not parsed.
    fn load(&self) -> Result<Vec<HabitRecord>>;

    /// Replaces the persisted collection with `records`.
    ///
    /// Full-document replace semantics: the previous contents are discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails. A failed save
    /// must leave the previously persisted document intact.
    fn save(&mut self, records: &[HabitRecord]) -> Result<()>;
}
