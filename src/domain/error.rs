//! Error types for keyb.
//!
//! This module defines the centralized error type [`KeybError`] and a type alias
//! [`Result`] used by the outer layers (configuration, bindings file, export,
//! terminal I/O). The list core itself is total and never returns errors.

use thiserror::Error;

/// The main error type for keyb operations.
///
/// Every variant is raised before the list controller is constructed or after
/// the interactive session ends, so the user sees it on stderr rather than in
/// the alternate screen.
///
/// # Examples
///
/// ```
/// use keyb::KeybError;
///
/// fn validate() -> Result<(), KeybError> {
///     Err(KeybError::Config("sep_width must be positive".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum KeybError {
    /// Filesystem or terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The keybindings file could not be read, parsed or written.
    #[error("Bindings error: {0}")]
    Bindings(String),

    /// A key string in the `[keys]` section is not a valid key combination.
    #[error("Keymap error: {0}")]
    Keymap(String),

    /// Exporting the list failed.
    #[error("Export error: {0}")]
    Export(String),
}

/// A specialized `Result` type for keyb operations.
pub type Result<T> = std::result::Result<T, KeybError>;
