//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable storage implementation using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) so
//! a crash mid-write never corrupts the previously saved document.
//!
//! # Performance Characteristics
//!
//! - **Read**: loads the entire file in one pass
//! - **Write**: serializes and writes the entire collection
//! - **Best for**: tens of habits, infrequent writes
//!
//! Full-file rewrites are acceptable only because collections stay small; this
//! backend should not be scaled to large N without batching.

use crate::domain::error::{HabitkeepError, Result};
use crate::storage::backend::Storage;
use crate::storage::models::{HabitRecord, HabitsDocument};
use std::path::PathBuf;

/// JSON file storage backend.
///
/// Persists the habit collection as a single pretty-printed JSON document:
///
/// ```json
/// {
///   "habits": [
///     { "name": "Drink water", "frequency": "Daily", "isCompleted": true },
///     { "name": "Read", "frequency": "Weekly", "isCompleted": false }
///   ]
/// }
/// ```
///
/// A missing file loads as an empty collection. A file that exists but cannot
/// be parsed fails with [`HabitkeepError::Corrupt`]; the document is never
/// silently replaced.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It is designed for a single-threaded,
/// event-driven caller; there is no locking and no support for concurrent
/// writers.
pub struct JsonFile {
    /// Path to the JSON document on disk.
    file_path: PathBuf,
}

impl JsonFile {
    /// Creates a backend for the document at `file_path`.
    ///
    /// The file does not need to exist yet; parent directories are created on
    /// first save.
    ///
    /// # Examples
    ///
    /// ```
    /// use habitkeep::storage::JsonFile;
    /// use std::path::PathBuf;
    ///
    /// let backend = JsonFile::new(PathBuf::from("/tmp/habits.json"));
    /// ```
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        let file_path = file_path.into();
        tracing::debug!(path = ?file_path, "initializing JSON backend");
        Self { file_path }
    }

    /// Returns the path this backend reads from and writes to.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.file_path
    }
}

impl Storage for JsonFile {
    fn load(&self) -> Result<Vec<HabitRecord>> {
        let _span = tracing::debug_span!("json_load", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no document on disk, starting empty");
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.file_path)?;
        let document: HabitsDocument = serde_json::from_str(&contents)
            .map_err(|e| HabitkeepError::Corrupt(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(count = document.habits.len(), "loaded habits");
        Ok(document.habits)
    }

    fn save(&mut self, records: &[HabitRecord]) -> Result<()> {
        let _span = tracing::debug_span!("json_save",
            path = ?self.file_path,
            count = records.len()
        ).entered();

        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let document = HabitsDocument {
            habits: records.to_vec(),
        };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| HabitkeepError::Storage(format!("failed to serialize JSON: {e}")))?;

        // Write to a sibling temp file first, then rename over the target, so
        // the previous document survives a crash mid-write.
        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("habits saved");
        Ok(())
    }
}
