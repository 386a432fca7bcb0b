//! Infrastructure layer for filesystem and environment interactions.
//!
//! Currently this covers storage location defaults: where the persisted habit
//! document lives when the host application does not choose a path itself.

pub mod paths;

pub use paths::default_data_file;
