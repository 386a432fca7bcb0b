//! Storage layer for the persisted habit collection.
//!
//! This module provides the persistence abstraction for the habit list: a
//! minimal backend trait, raw record types mirroring the on-disk JSON shape,
//! and a JSON file implementation with atomic writes.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `models`: Storage record types separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::Storage;
pub use json::JsonFile;
pub use models::{HabitRecord, HabitsDocument};
