//! Infrastructure layer for filesystem, environment and terminal
//! interactions.
//!
//! Locates the configuration, keybindings and log files, expands
//! user-supplied paths and sets up the terminal for the interactive view.

pub mod paths;
pub mod terminal;

pub use paths::{
    config_dir, data_dir, default_config_path, default_keyb_path, expand_path, tmp_path,
};
pub use terminal::TerminalGuard;
