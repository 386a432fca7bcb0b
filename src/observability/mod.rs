//! Tracing initialization for host applications.
//!
//! The library itself only emits through the `tracing` macros and never
//! installs a global subscriber. Host applications (or integration tests) that
//! want to see those events can call [`init_tracing`] once at startup.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a formatting `tracing` subscriber with the given filter directive.
///
/// `filter` uses the usual `tracing_subscriber` directive syntax, e.g.
/// `"info"` or `"habitkeep=debug"`; `None` defaults to `"info"`.
///
/// Idempotent: only the first call takes effect, later calls are ignored. If
/// another subscriber is already installed globally, this one quietly steps
/// aside — observability is optional.
///
/// # Examples
///
/// ```
/// habitkeep::observability::init_tracing(Some("habitkeep=debug"));
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(filter: Option<&str>) {
    INIT.call_once(|| {
        let filter = EnvFilter::new(filter.unwrap_or("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}
