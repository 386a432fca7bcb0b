//! Error types for the habitkeep crate.
//!
//! This module defines the centralized error type [`HabitkeepError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for habit store operations.
///
/// This enum consolidates all error conditions that can occur while managing
/// habits, from input validation to storage failures. The I/O variant wraps the
/// underlying error from the standard library using `#[from]` for automatic
/// conversion.
///
/// A missing storage file is deliberately NOT an error: a store that has never
/// been saved loads as an empty collection.
///
/// # Examples
///
/// ```
/// use habitkeep::{HabitkeepError, Result};
///
/// fn check_name(name: &str) -> Result<()> {
///     if name.trim().is_empty() {
///         return Err(HabitkeepError::EmptyName);
///     }
///     Ok(())
/// }
///
/// assert!(matches!(check_name("   "), Err(HabitkeepError::EmptyName)));
/// ```
#[derive(Debug, Error)]
pub enum HabitkeepError {
    /// A habit name was empty after trimming whitespace.
    ///
    /// Returned by `add` when the caller supplies a blank name. The collection
    /// and the persisted file are left untouched.
    #[error("habit name is empty")]
    EmptyName,

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations during load or save.
    /// This is the "storage unavailable" condition: the data may be intact on
    /// disk, but it could not be read or written right now.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted document exists but could not be parsed.
    ///
    /// Distinct from [`HabitkeepError::Io`] so callers can tell "storage
    /// unreachable" apart from "storage corrupt". The string contains the
    /// underlying parse error. A corrupt document is never silently replaced
    /// with an empty collection.
    #[error("corrupt storage: {0}")]
    Corrupt(String),

    /// Storage operation failed outside of plain I/O or parsing.
    ///
    /// Covers serialization failures and other backend-level problems. The
    /// string contains a description of what went wrong.
    #[error("storage error: {0}")]
    Storage(String),
}

/// A specialized `Result` type for habitkeep operations.
///
/// This is a type alias for `std::result::Result<T, HabitkeepError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, HabitkeepError>;
