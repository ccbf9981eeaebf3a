//! Tracing initialization and subscriber setup.
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a `fmt`
//! layer writing to a rotating [`LogFile`].

use super::file_writer::LogFile;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a filter directive. Overrides the config.
pub const LOG_ENV: &str = "KEYB_LOG";

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "keyb.log";

/// Initializes the tracing subscriber with file output.
///
/// # Parameters
///
/// * `level` - Filter directive from the configuration, e.g. `debug`
/// * `path` - Log file; defaults to `keyb.log` in the data directory
///
/// # Level Resolution
///
/// 1. `KEYB_LOG` environment variable if set
/// 2. `level` if given
/// 3. Otherwise logging stays off
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently does nothing if the directory cannot be created or the
///   directive is invalid
/// - Only the first call installs a subscriber
///
/// Returns `true` when a subscriber was installed.
///
/// # Example
///
/// ```rust
/// use keyb::observability::init_logging;
///
/// let dir = std::env::temp_dir().join("keyb-doc");
/// init_logging(Some("debug"), Some(dir.join("keyb.log")));
/// tracing::debug!("logging is now active");
/// ```
pub fn init_logging(level: Option<&str>, path: Option<PathBuf>) -> bool {
    let directive = std::env::var(LOG_ENV)
        .ok()
        .filter(|value| !value.is_empty())
        .or_else(|| level.map(str::to_string));
    let Some(directive) = directive else {
        return false;
    };

    let Some(path) = path.or_else(|| crate::infrastructure::data_dir().map(|dir| dir.join(LOG_FILE))) else {
        return false;
    };
    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let Ok(filter) = EnvFilter::try_new(&directive) else {
        return false;
    };

    let layer = fmt::layer()
        .with_writer(LogFile::new(path))
        .with_ansi(false)
        .with_target(true);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(directive = %directive, "logging initialized");
    }
    installed
}
