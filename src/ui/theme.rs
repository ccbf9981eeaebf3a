//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents bundled into the binary or loaded from a file.
//! Every color is optional; an unset color leaves the terminal default in
//! place. The `[color]` section of the configuration is applied on top of the
//! selected theme.
//!
//! # Built-in Themes
//!
//! - `keyb-default`: Terminal colors with an orange match highlight (default)
//! - `catppuccin-mocha`: Dark theme with warm tones
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! heading_fg = "#89b4fa"
//! cursor_fg = "#1e1e2e"
//! cursor_bg = "#f5c2e7"
//! filter_fg = "#fab387"
//! prompt_fg = "#f5c2e7"
//! placeholder_fg = "#6c7086"
//! border = "#45475a"
//! ```
//!
//! # Example
//!
//! ```rust
//! use keyb::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::config::{ColorConfig, Settings};
use crate::domain::error::{KeybError, Result};
use crate::domain::RowStyles;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "keyb-default";

/// Color scheme used by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (e.g. `"#cdd6f4"`) for every UI element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeColors {
    pub header_fg: Option<String>,
    pub header_bg: Option<String>,
    /// Entry rows.
    pub text_normal: Option<String>,
    /// Group headings. Always bold.
    pub heading_fg: Option<String>,
    /// Row under the cursor. Always bold.
    pub cursor_fg: Option<String>,
    pub cursor_bg: Option<String>,
    /// Characters matched by the search query.
    pub filter_fg: Option<String>,
    pub filter_bg: Option<String>,
    pub prompt_fg: Option<String>,
    pub placeholder_fg: Option<String>,
    pub placeholder_bg: Option<String>,
    /// Key and match counters in the footer. Faint when unset.
    pub counter_fg: Option<String>,
    pub counter_bg: Option<String>,
    pub border: Option<String>,
    pub empty_state_fg: Option<String>,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is unknown.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keyb::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "keyb-default" => include_str!("../../themes/keyb-default.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`KeybError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            KeybError::Config(format!("failed to read theme file \"{}\": {e}", path.display()))
        })?;

        toml::from_str(&contents).map_err(|e| {
            KeybError::Config(format!("failed to parse theme file \"{}\": {e}", path.display()))
        })
    }

    /// Resolves the theme named by the settings and applies the color
    /// overrides.
    ///
    /// `theme_file` wins over `theme`; with neither set the default theme is
    /// used.
    ///
    /// # Errors
    ///
    /// Returns [`KeybError::Config`] for an unknown theme name or an
    /// unreadable theme file.
    pub fn load(settings: &Settings, overrides: &ColorConfig) -> Result<Self> {
        let mut theme = if let Some(file) = &settings.theme_file {
            Self::from_file(crate::infrastructure::expand_path(file))?
        } else {
            let name = settings.theme.as_deref().unwrap_or(DEFAULT_THEME);
            Self::from_name(name)
                .ok_or_else(|| KeybError::Config(format!("unknown theme \"{name}\"")))?
        };

        theme.apply_overrides(overrides);
        tracing::debug!(theme = %theme.name, "theme loaded");
        Ok(theme)
    }

    /// Replaces theme colors with every color set in `overrides`.
    pub fn apply_overrides(&mut self, overrides: &ColorConfig) {
        let colors = &mut self.colors;
        let pairs = [
            (&mut colors.prompt_fg, &overrides.prompt),
            (&mut colors.cursor_fg, &overrides.cursor_fg),
            (&mut colors.cursor_bg, &overrides.cursor_bg),
            (&mut colors.filter_fg, &overrides.filter_fg),
            (&mut colors.filter_bg, &overrides.filter_bg),
            (&mut colors.counter_fg, &overrides.counter_fg),
            (&mut colors.counter_bg, &overrides.counter_bg),
            (&mut colors.placeholder_fg, &overrides.placeholder_fg),
            (&mut colors.placeholder_bg, &overrides.placeholder_bg),
            (&mut colors.border, &overrides.border_color),
        ];
        for (slot, value) in pairs {
            if let Some(value) = value {
                *slot = Some(value.clone());
            }
        }
    }

    /// Opening sequences for the row styles of the list.
    #[must_use]
    pub fn row_styles(&self) -> RowStyles {
        let c = &self.colors;
        let cursor = format!("{}{}{}", Self::bold(), Self::fg_opt(&c.cursor_fg), Self::bg_opt(&c.cursor_bg));
        RowStyles {
            normal: Self::fg_opt(&c.text_normal),
            heading: format!("{}{}", Self::bold(), Self::fg_opt(&c.heading_fg)),
            selected: cursor.clone(),
            selected_heading: cursor,
            filtered: format!("{}{}", Self::fg_opt(&c.filter_fg), Self::bg_opt(&c.filter_bg)),
        }
    }

    /// Footer counter style.
    #[must_use]
    pub fn counter_style(&self) -> String {
        let c = &self.colors;
        if c.counter_fg.is_none() && c.counter_bg.is_none() {
            return Self::dim().to_string();
        }
        format!("{}{}", Self::fg_opt(&c.counter_fg), Self::bg_opt(&c.counter_bg))
    }

    /// Placeholder text style.
    #[must_use]
    pub fn placeholder_style(&self) -> String {
        let c = &self.colors;
        format!("{}{}", Self::fg_opt(&c.placeholder_fg), Self::bg_opt(&c.placeholder_bg))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground sequence, `\x1b[38;2;r;g;bm`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keyb::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#FFA066"), "\u{1b}[38;2;255;160;102m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background sequence, `\x1b[48;2;r;g;bm`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// [`Theme::fg`] for an optional color; empty when unset.
    #[must_use]
    pub fn fg_opt(hex: &Option<String>) -> String {
        hex.as_deref().map(Self::fg).unwrap_or_default()
    }

    /// [`Theme::bg`] for an optional color; empty when unset.
    #[must_use]
    pub fn bg_opt(hex: &Option<String>) -> String {
        hex.as_deref().map(Self::bg).unwrap_or_default()
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Swaps foreground and background. Used for the prompt caret.
    #[must_use]
    pub const fn reverse() -> &'static str {
        "\u{001b}[7m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `keyb-default` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in keyb-default theme should always parse")
    }
}
