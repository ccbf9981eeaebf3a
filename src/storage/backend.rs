//! Storage backend abstraction.
//!
//! The [`BindingStore`] trait hides where the keybindings come from. The CLI
//! and the `add` subcommand only ever talk to the trait, so tests can swap in
//! an in-memory store.

use crate::domain::error::Result;
use crate::domain::Bindings;

/// Abstraction over keybinding persistence.
///
/// # Implementations
///
/// - [`FileStore`](super::FileStore): TOML or JSON file with atomic writes
///
/// # Examples
///
/// ```no_run
/// use keyb::storage::{BindingStore, FileStore};
/// use std::path::PathBuf;
///
/// let store = FileStore::new(PathBuf::from("/tmp/keyb.toml"));
/// let bindings = store.load()?;
/// println!("{} keybindings", bindings.len());
/// # Ok::<(), keyb::KeybError>(())
/// ```
pub trait BindingStore {
    /// Loads all applications and their keybindings.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing data cannot be read or parsed.
    fn load(&self) -> Result<Bindings>;

    /// Replaces the stored keybindings with `bindings`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. Implementations never leave a
    /// partially written store behind.
    fn save(&self, bindings: &Bindings) -> Result<()>;

    /// Appends one keybinding and persists the result.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`load`](Self::load) and [`save`](Self::save).
    fn add_entry(&self, app: &str, name: &str, key: &str, ignore_prefix: bool) -> Result<()> {
        let mut bindings = self.load()?;
        bindings.add_entry(app, name, key, ignore_prefix);
        self.save(&bindings)?;
        tracing::debug!(app = %app, name = %name, "keybinding added");
        Ok(())
    }
}
