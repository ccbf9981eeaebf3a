//! Logging to a rotating file.
//!
//! The interactive view owns the terminal, so `tracing` output is written to
//! `<data dir>/keyb/keyb.log` instead of stderr.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → LogFile (rotating)
//! ```
//!
//! # Configuration
//!
//! The filter directive is taken from:
//! 1. `KEYB_LOG` environment variable (highest priority)
//! 2. `settings.log_level` in the configuration
//! 3. `debug` when `settings.debug` is set
//!
//! Without any of these, no subscriber is installed.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use file_writer::LogFile;
pub use init::{init_logging, LOG_ENV, LOG_FILE};
