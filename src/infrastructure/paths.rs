//! Storage location defaults.
//!
//! This module resolves the fixed per-installation location of the habit
//! document. Callers that want a different location (tests, portable installs)
//! pass their own path to the store instead.

use std::path::PathBuf;

/// Directory name under the platform data dir that holds our files.
const APP_DIR: &str = "habitkeep";

/// File name of the persisted habit document.
const DATA_FILE: &str = "habits.json";

/// Returns the default location of the habit document.
///
/// Resolves to `<platform data dir>/habitkeep/habits.json`, e.g.
/// `~/.local/share/habitkeep/habits.json` on Linux. Returns `None` when the
/// platform data directory cannot be determined (no home directory).
///
/// # Examples
///
/// ```
/// use habitkeep::infrastructure::default_data_file;
///
/// if let Some(path) = default_data_file() {
///     assert!(path.ends_with("habitkeep/habits.json"));
/// }
/// ```
#[must_use]
pub fn default_data_file() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(DATA_FILE))
}
