//! Habit domain model.
//!
//! This module defines the core [`Habit`] type representing a single tracked
//! habit, and [`HabitId`], the stable identifier the store hands out so that
//! callers can refer back to a record without holding a reference into the
//! collection.

use std::fmt;

/// Stable identifier for a habit within a store instance.
///
/// Ids are generated by the store when a habit is created or loaded and stay
/// unique for the lifetime of that store. They are an in-memory concern only:
/// the persisted document identifies habits by position, so ids are reassigned
/// on every `load`.
///
/// UI layers should key their per-row callbacks (toggle, delete) on this id
/// rather than on a reference to the record itself. An id can go stale when
/// the record is removed first; store operations treat a stale id as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HabitId(pub(crate) u64);

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Represents a single tracked habit.
///
/// A habit is a user-supplied name plus a frequency label ("Daily", "Weekly",
/// ...) and a completion flag. Names are trimmed and non-empty by
/// construction; frequency is stored as free text exactly as the caller
/// supplied it, since the set of choices is owned by the presentation layer.
/// Names are not unique — adding the same habit twice is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    /// Store-assigned identifier, unique within the owning store instance.
    pub id: HabitId,

    /// Display name, trimmed and non-empty.
    pub name: String,

    /// Frequency label as supplied by the caller, e.g. "Daily" or "Weekly".
    pub frequency: String,

    /// Whether the habit is currently marked complete.
    pub is_completed: bool,
}

impl Habit {
    /// Creates a new habit with the completion flag cleared.
    ///
    /// The caller (the store) is responsible for trimming `name` and rejecting
    /// empty names before construction.
    pub(crate) fn new(id: HabitId, name: impl Into<String>, frequency: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            frequency: frequency.into(),
            is_completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_habit_starts_incomplete() {
        let habit = Habit::new(HabitId(1), "Drink water", "Daily");
        assert_eq!(habit.name, "Drink water");
        assert_eq!(habit.frequency, "Daily");
        assert!(!habit.is_completed);
    }

    #[test]
    fn ids_display_with_hash_prefix() {
        assert_eq!(HabitId(42).to_string(), "#42");
    }
}
