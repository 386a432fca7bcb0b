//! Habitkeep: the persistence core of a habit tracker.
//!
//! Habitkeep owns the data side of a habit-tracking application:
//! - An ordered collection of habit records (name, frequency, completion flag)
//! - Create / toggle / delete operations with stable per-record ids
//! - Durable state backed by a single JSON document with atomic writes
//! - Typed errors that distinguish "no data yet" from "storage corrupt"
//!
//! The presentation layer (GUI, TUI, whatever renders the list) is an external
//! collaborator: it calls the store's operations in response to user actions
//! and renders the collection the store returns. Nothing in this crate draws,
//! networks, or schedules.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation layer (external)                      │  ← out of scope
//! └─────────────────────────────────────────────────────┘
//!                        │ add / set_completed / remove / load
//! ┌─────────────────────────────────────────────────────┐
//! │  Store Layer (store/)                               │  ← HabitStore
//! │  - Ordered collection ownership                     │
//! │  - Id allocation                                    │
//! │  - Mutate-then-persist orchestration                │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Storage Layer (storage/)                           │
//! │  - Backend trait                                    │
//! │  - JSON document I/O with atomic writes             │
//! │  - Wire-shape record types                          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Default data path (infrastructure/)              │
//! │  - Error types (domain/error)                       │
//! │  - Habit model (domain/habit)                       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Core domain types (Habit, ids, errors)
//! - [`store`]: The habit store owning the collection
//! - [`storage`]: JSON file persistence layer
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: Optional tracing setup for hosts
//!
//! # Examples
//!
//! ```no_run
//! use habitkeep::HabitStore;
//!
//! let mut store = HabitStore::open("/tmp/habits.json");
//! store.load()?;
//!
//! let water = store.add("Drink water", "Daily")?;
//! store.add("Read", "Weekly")?;
//! store.set_completed(water.id, true)?;
//!
//! for habit in store.habits() {
//!     println!("{} ({}) done={}", habit.name, habit.frequency, habit.is_completed);
//! }
//! # Ok::<(), habitkeep::HabitkeepError>(())
//! ```

pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod store;

pub use domain::{Habit, HabitId, HabitkeepError, Result};
pub use storage::{JsonFile, Storage};
pub use store::HabitStore;
