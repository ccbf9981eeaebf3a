//! File-based keybindings store.
//!
//! The file format is chosen by extension: `.json` is JSON, everything else
//! is TOML. Writes go to a temporary file first which is then renamed over
//! the target, so a crash never leaves a truncated file.
//!
//! # File Format
//!
//! ```toml
//! [[apps]]
//! name = "vim"
//!
//! [[apps.keybinds]]
//! name = "save"
//! key = ":w"
//! ```

use crate::domain::error::{KeybError, Result};
use crate::domain::Bindings;
use crate::infrastructure::paths;
use crate::storage::backend::BindingStore;
use std::path::{Path, PathBuf};

/// Serialization format of a keybindings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Picks the format from the file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    /// Serializes `bindings`.
    ///
    /// # Errors
    ///
    /// Returns [`KeybError::Bindings`] if serialization fails.
    pub fn serialize(self, bindings: &Bindings) -> Result<String> {
        match self {
            Self::Toml => toml::to_string_pretty(bindings).map_err(|e| e.to_string()),
            Self::Json => serde_json::to_string_pretty(bindings).map_err(|e| e.to_string()),
        }
        .map_err(|e| KeybError::Bindings(format!("failed to serialize keybindings: {e}")))
    }

    /// Parses `contents`.
    ///
    /// # Errors
    ///
    /// Returns [`KeybError::Bindings`] on malformed input.
    pub fn deserialize(self, contents: &str) -> Result<Bindings> {
        match self {
            Self::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
        }
        .map_err(|e| KeybError::Bindings(format!("failed to parse keybindings: {e}")))
    }
}

/// Keybindings file store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: Format,
}

impl FileStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let format = Format::from_path(&path);
        Self { path, format }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file with an example application when it does not exist.
    ///
    /// Returns `true` if the file was created.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory or the file cannot be
    /// written.
    pub fn ensure_exists(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        tracing::debug!(path = ?self.path, "creating keybindings file");
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        self.save(&Bindings::example(&self.path.display().to_string()))?;
        Ok(true)
    }
}

impl BindingStore for FileStore {
    fn load(&self) -> Result<Bindings> {
        let _span = tracing::debug_span!("file_store_load", path = ?self.path).entered();

        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            KeybError::Bindings(format!("failed to read \"{}\": {e}", self.path.display()))
        })?;
        let bindings = self.format.deserialize(&contents).map_err(|e| match e {
            KeybError::Bindings(msg) => KeybError::Bindings(format!("{}: {msg}", self.path.display())),
            other => other,
        })?;

        tracing::debug!(apps = bindings.apps.len(), keybinds = bindings.len(), "keybindings loaded");
        Ok(bindings)
    }

    fn save(&self, bindings: &Bindings) -> Result<()> {
        let _span = tracing::debug_span!("file_store_save", path = ?self.path).entered();

        let text = self.format.serialize(bindings)?;
        let tmp_path = paths::tmp_path(&self.path);

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, text)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.path)?;

        tracing::debug!("keybindings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_example_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("keyb.toml"));

        assert!(store.ensure_exists().unwrap());
        assert!(!store.ensure_exists().unwrap());

        let bindings = store.load().unwrap();
        assert_eq!(bindings.apps[0].name, "example");
        assert_eq!(bindings.apps[0].keybinds[0].key, store.path().display().to_string());
    }

    #[test]
    fn add_entry_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("keyb.toml"));
        store.ensure_exists().unwrap();

        store.add_entry("vim", "save", ":w", false).unwrap();
        store.add_entry("vim", "quit", ":q", true).unwrap();

        let bindings = store.load().unwrap();
        assert_eq!(bindings.apps.len(), 2);
        assert_eq!(bindings.apps[1].keybinds.len(), 2);
        assert!(bindings.apps[1].keybinds[1].ignore_prefix);
        assert!(!paths::tmp_path(store.path()).exists());
    }

    #[test]
    fn json_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keyb.json");
        std::fs::write(
            &path,
            r#"{"apps": [{"name": "tmux", "prefix": "ctrl+b", "keybinds": [{"name": "split", "key": "%"}]}]}"#,
        )
        .unwrap();

        let store = FileStore::new(path);
        let bindings = store.load().unwrap();
        assert_eq!(bindings.apps[0].prefix, "ctrl+b");

        store.save(&bindings).unwrap();
        assert_eq!(store.load().unwrap(), bindings);
    }

    #[test]
    fn malformed_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keyb.toml");
        std::fs::write(&path, "[[apps]]\nname = ").unwrap();

        let err = FileStore::new(path).load().unwrap_err();
        match err {
            KeybError::Bindings(msg) => assert!(msg.contains("keyb.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.toml"));
        assert!(matches!(store.load(), Err(KeybError::Bindings(_))));
    }
}
