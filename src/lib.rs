//! keyb: a terminal cheatsheet for your keybindings.
//!
//! keyb reads a file of applications and their keybindings and shows them as
//! one scrollable list, grouped under a heading per application:
//! - VIM-like navigation with wraparound and half/full paging
//! - Fuzzy search over every row, or over group names with `h:`
//! - Aligned key column with optional per-application prefix
//! - Plain-text printing and JSON/TOML export
//! - Themes, borders and configurable key bindings
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI & host loop (main.rs)                          │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← List controller
//! │  - Key map and event handling                       │
//! │  - Cursor/viewport sync                             │
//! │  - Fuzzy filtering                                  │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Config        │
//! │ (ui/)         │   │ (storage/)    │   │ (config)      │
//! │ - Rendering   │   │ - TOML/JSON   │   │ - Settings    │
//! │ - Theming     │   │ - Export      │   │ - Colors      │
//! │ - Components  │   │ - Backend API │   │ - Keys        │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Paths and terminal setup (infrastructure/)       │
//! │  - Rows, tables, bindings (domain/)                 │
//! │  - Error types (domain/error)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing to a rotating log file                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: List controller with event/action model
//! - [`config`]: User configuration
//! - [`domain`]: Rows, tables, bindings and errors
//! - [`infrastructure`]: Paths and terminal setup
//! - [`observability`]: Logging
//! - [`storage`]: Keybindings file and exports
//! - [`ui`]: Terminal rendering with theme support
//!
//! # Example
//!
//! ```rust
//! use keyb::{handle_event, initialize, Config, Event};
//! use keyb::domain::Bindings;
//!
//! let mut bindings = Bindings::default();
//! bindings.add_entry("vim", "save", ":w", false);
//! bindings.add_entry("vim", "quit", ":q", false);
//!
//! let mut viewer = initialize(&Config::default(), &bindings, 24)?;
//! handle_event(&mut viewer.list, &Event::StepDown);
//! assert_eq!(viewer.list.selected_row().map(|row| row.label.as_str()), Some("save"));
//! # Ok::<(), keyb::KeybError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, Event, InputMode, KeyMap, List, ListOptions, SearchFocus};
pub use config::Config;
pub use domain::{Bindings, KeybError, Result};
pub use ui::{Chrome, Theme};

/// Everything the interactive view needs.
#[derive(Debug)]
pub struct Viewer {
    pub list: List,
    pub keymap: KeyMap,
    pub theme: Theme,
    pub chrome: Chrome,
}

/// Builds the interactive view for a terminal of `rows` lines.
///
/// # Errors
///
/// Returns [`KeybError::Keymap`] for an invalid key string and
/// [`KeybError::Config`] for a theme that cannot be loaded.
pub fn initialize(config: &Config, bindings: &Bindings, rows: usize) -> Result<Viewer> {
    let _span = tracing::debug_span!("initialize", rows).entered();

    let keymap = KeyMap::from_config(&config.keys)?;
    let theme = Theme::load(&config.settings, &config.color)?;
    let chrome = Chrome::from_settings(&config.settings);

    let table = bindings.to_table(config.settings.sort_keys, &config.row_format(), config.layout());
    let list = List::new(
        table,
        ListOptions {
            viewport_height: chrome.viewport_height(rows),
            mouse_enabled: config.settings.mouse,
            start_in_search: config.settings.search_mode,
        },
    );

    tracing::debug!(rows = list.source().row_count(), "list initialized");
    Ok(Viewer {
        list,
        keymap,
        theme,
        chrome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_applies_settings() {
        let mut config = Config::default();
        config.settings.search_mode = true;
        config.settings.mouse = false;

        let mut bindings = Bindings::default();
        bindings.add_entry("vim", "save", ":w", false);

        let viewer = initialize(&config, &bindings, 10).unwrap();
        assert_eq!(viewer.list.height(), 7);
        assert!(viewer.list.mode().is_typing());
        assert!(!viewer.list.mouse_enabled());
        assert_eq!(viewer.list.source().row_count(), 2);
    }

    #[test]
    fn invalid_key_string_fails() {
        let mut config = Config::default();
        config.keys.quit = "ctrl+".to_string();
        let result = initialize(&config, &Bindings::default(), 10);
        assert!(matches!(result, Err(KeybError::Keymap(_))));
    }
}
