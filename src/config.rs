//! User configuration.
//!
//! The configuration file has three sections. Every field is optional and
//! falls back to its default.
//!
//! ```toml
//! [settings]
//! keyb_path = "~/.config/keyb/keyb.toml"
//! reverse = false
//! mouse = true
//! search_mode = false
//! sort_keys = "file"          # file | sensitive | insensitive
//! title = ""
//! prompt = "keys > "
//! prompt_location = "top"     # top | bottom
//! placeholder = "..."
//! prefix_sep = ";"
//! sep_width = 4
//! margin = 0
//! padding = 1
//! border = "hidden"           # hidden | normal | rounded | double | thick
//! theme = "keyb-default"
//!
//! [color]
//! filter_fg = "#FFA066"
//!
//! [keys]
//! quit = "q, ctrl+c"
//! ```
//!
//! Files ending in `.json` are read as JSON with the same layout.

use crate::domain::error::{KeybError, Result};
use crate::domain::{GroupOrder, Layout, RowFormat};
use crate::infrastructure::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the search prompt is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptLocation {
    #[default]
    Top,
    Bottom,
}

/// Box style drawn around the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// No border, no space reserved.
    #[default]
    Hidden,
    Normal,
    Rounded,
    Double,
    Thick,
}

/// Display and behaviour settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Keybindings file. Defaults to `keyb.toml` in the config directory.
    pub keyb_path: Option<String>,
    /// Show the cursor/viewport debug line and log at debug level.
    pub debug: bool,
    /// Print the key column before the description.
    pub reverse: bool,
    /// Enable mouse wheel scrolling.
    pub mouse: bool,
    /// Start with the search prompt focused.
    pub search_mode: bool,
    pub sort_keys: GroupOrder,
    pub title: String,
    pub prompt: String,
    pub prompt_location: PromptLocation,
    pub placeholder: String,
    pub prefix_sep: String,
    /// Minimum gap between the description and key columns.
    pub sep_width: usize,
    pub margin: usize,
    pub padding: usize,
    pub border: BorderStyle,
    /// Built-in theme name.
    pub theme: Option<String>,
    /// Path to a theme file. Takes precedence over `theme`.
    pub theme_file: Option<String>,
    /// `tracing` filter directive, e.g. `debug` or `keyb=trace`.
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keyb_path: None,
            debug: false,
            reverse: false,
            mouse: true,
            search_mode: false,
            sort_keys: GroupOrder::File,
            title: String::new(),
            prompt: "keys > ".to_string(),
            prompt_location: PromptLocation::Top,
            placeholder: "...".to_string(),
            prefix_sep: ";".to_string(),
            sep_width: crate::domain::layout::DEFAULT_SEPARATOR_WIDTH,
            margin: 0,
            padding: 1,
            border: BorderStyle::Hidden,
            theme: None,
            theme_file: None,
            log_level: None,
        }
    }
}

/// Hex color overrides applied on top of the theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub prompt: Option<String>,
    pub cursor_fg: Option<String>,
    pub cursor_bg: Option<String>,
    pub filter_fg: Option<String>,
    pub filter_bg: Option<String>,
    pub counter_fg: Option<String>,
    pub counter_bg: Option<String>,
    pub placeholder_fg: Option<String>,
    pub placeholder_bg: Option<String>,
    pub border_color: Option<String>,
}

/// Key bindings of the interface itself, as comma-separated key strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    pub quit: String,
    pub up: String,
    pub down: String,
    /// Step up while the prompt has focus.
    pub up_focus: String,
    /// Step down while the prompt has focus.
    pub down_focus: String,
    pub half_up: String,
    pub half_down: String,
    pub full_up: String,
    #[serde(alias = "full_bottom")]
    pub full_down: String,
    pub first_line: String,
    pub last_line: String,
    pub top: String,
    pub middle: String,
    pub bottom: String,
    pub search: String,
    pub clear_search: String,
    pub normal: String,
    pub focus_results: String,
    pub cursor_word_forward: String,
    pub cursor_word_backward: String,
    pub cursor_delete_word_backward: String,
    pub cursor_delete_word_forward: String,
    pub cursor_delete_after_cursor: String,
    pub cursor_delete_before_cursor: String,
    pub cursor_line_start: String,
    pub cursor_line_end: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            quit: "q, ctrl+c".to_string(),
            up: "k, up".to_string(),
            down: "j, down".to_string(),
            up_focus: "ctrl+k".to_string(),
            down_focus: "ctrl+j".to_string(),
            half_up: "ctrl+u".to_string(),
            half_down: "ctrl+d".to_string(),
            full_up: "ctrl+b".to_string(),
            full_down: "ctrl+f".to_string(),
            first_line: "g".to_string(),
            last_line: "G".to_string(),
            top: "H".to_string(),
            middle: "M".to_string(),
            bottom: "L".to_string(),
            search: "/".to_string(),
            clear_search: "alt+d".to_string(),
            normal: "esc".to_string(),
            focus_results: "enter".to_string(),
            cursor_word_forward: "alt+right, alt+f".to_string(),
            cursor_word_backward: "alt+left, alt+b".to_string(),
            cursor_delete_word_backward: "alt+backspace".to_string(),
            cursor_delete_word_forward: "alt+delete".to_string(),
            cursor_delete_after_cursor: "alt+k".to_string(),
            cursor_delete_before_cursor: "alt+u".to_string(),
            cursor_line_start: "home, ctrl+a".to_string(),
            cursor_line_end: "end, ctrl+e".to_string(),
        }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub settings: Settings,
    pub color: ColorConfig,
    pub keys: KeysConfig,
}

impl Config {
    /// Loads the configuration at `path`, or from the default location when
    /// `path` is `None`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`KeybError::Config`] if the file exists but cannot be read or
    /// parsed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use keyb::Config;
    ///
    /// let config = Config::load(None)?;
    /// println!("prompt: {}", config.settings.prompt);
    /// # Ok::<(), keyb::KeybError>(())
    /// ```
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path.map(Path::to_path_buf).or_else(paths::default_config_path) else {
            tracing::debug!("no config directory, using defaults");
            return Ok(Self::default());
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = ?path, "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(KeybError::Config(format!(
                    "failed to read config file \"{}\": {e}",
                    path.display()
                )));
            }
        };

        let config = Self::parse(&contents, &path)?;
        tracing::debug!(path = ?path, "config loaded");
        Ok(config)
    }

    /// Parses configuration text; the format is picked from `path`'s
    /// extension.
    ///
    /// # Errors
    ///
    /// Returns [`KeybError::Config`] on malformed input.
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let parsed = if is_json {
            serde_json::from_str(contents).map_err(|e| e.to_string())
        } else {
            toml::from_str(contents).map_err(|e| e.to_string())
        };

        parsed.map_err(|e| {
            KeybError::Config(format!("failed to parse config file \"{}\": {e}", path.display()))
        })
    }

    /// Resolves the keybindings file: `override_path`, then
    /// `settings.keyb_path`, then the default location.
    ///
    /// # Errors
    ///
    /// Returns [`KeybError::Config`] if no path is given and no config
    /// directory can be determined.
    pub fn keyb_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(paths::expand_path(&path.to_string_lossy()));
        }
        if let Some(path) = &self.settings.keyb_path {
            return Ok(paths::expand_path(path));
        }
        paths::default_keyb_path()
            .ok_or_else(|| KeybError::Config("cannot determine keybindings file location".to_string()))
    }

    /// Row formatting derived from the settings.
    #[must_use]
    pub fn row_format(&self) -> RowFormat {
        RowFormat {
            prefix_sep: self.settings.prefix_sep.clone(),
            reversed: self.settings.reverse,
        }
    }

    #[must_use]
    pub const fn layout(&self) -> Layout {
        Layout::with_separator(self.settings.sep_width)
    }

    /// Effective log filter: `log_level`, or `debug` when `debug` is set.
    #[must_use]
    pub fn log_level(&self) -> Option<String> {
        self.settings
            .log_level
            .clone()
            .or_else(|| self.settings.debug.then(|| "debug".to_string()))
    }
}
