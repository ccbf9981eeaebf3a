//! Storage layer for the keybindings file and exports.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction
//! - `file`: TOML/JSON file store with atomic writes
//! - `export`: `--print` and `--export` output

pub mod backend;
pub mod export;
pub mod file;

pub use backend::BindingStore;
pub use export::{export, print, ExportFormat};
pub use file::{FileStore, Format};
