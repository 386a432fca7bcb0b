//! Storage record models for the persistence layer.
//!
//! This module defines the raw record types that mirror the on-disk JSON shape.
//! They are separate from the domain [`Habit`](crate::domain::Habit) to keep a
//! clear boundary between storage representation and business logic: the
//! domain type carries a store-assigned id, the storage type carries exactly
//! the three persisted fields.

use crate::domain::Habit;
use serde::{Deserialize, Serialize};

/// A habit as it appears in the persisted document.
///
/// Field names match the wire format: `is_completed` serializes as
/// `isCompleted`. There is no id field — the document identifies habits only
/// by their position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitRecord {
    /// Display name, trimmed and non-empty.
    pub name: String,

    /// Frequency label, free text (e.g. "Daily", "Weekly").
    pub frequency: String,

    /// Completion flag.
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

impl HabitRecord {
    /// Creates a new record with the completion flag cleared.
    pub fn new(name: impl Into<String>, frequency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frequency: frequency.into(),
            is_completed: false,
        }
    }
}

impl From<&Habit> for HabitRecord {
    fn from(habit: &Habit) -> Self {
        Self {
            name: habit.name.clone(),
            frequency: habit.frequency.clone(),
            is_completed: habit.is_completed,
        }
    }
}

/// Top-level shape of the persisted JSON document.
///
/// ```json
/// {
///   "habits": [
///     { "name": "Drink water", "frequency": "Daily", "isCompleted": false }
///   ]
/// }
/// ```
///
/// Whole-document replace semantics only; there is no version field and no
/// migration support.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HabitsDocument {
    /// All stored habits, insertion order = display order.
    #[serde(default)]
    pub habits: Vec<HabitRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_flag_serializes_camel_case() {
        let json = serde_json::to_string(&HabitRecord::new("Read", "Weekly")).unwrap();
        assert!(json.contains("\"isCompleted\":false"));
        assert!(!json.contains("is_completed"));
    }

    #[test]
    fn empty_document_parses_as_no_habits() {
        let doc: HabitsDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.habits.is_empty());
    }
}
