//! Screen decoration around the list: title, prompt, border and spacing.

use crate::config::{BorderStyle, PromptLocation, Settings};

/// Lines taken by the header, the search prompt and the footer.
pub const CHROME_LINES: usize = 3;

/// Display settings for everything drawn around the viewport rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub title: String,
    /// Text in front of the query, e.g. `keys > `.
    pub prompt: String,
    /// Shown in the prompt while the query is empty.
    pub placeholder: String,
    pub prompt_location: PromptLocation,
    pub border: BorderStyle,
    /// Blank lines and columns outside the border.
    pub margin: usize,
    /// Blank columns between the border and the content.
    pub padding: usize,
    /// Show cursor and viewport positions in the footer.
    pub debug: bool,
}

impl Default for Chrome {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl Chrome {
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            title: settings.title.clone(),
            prompt: settings.prompt.clone(),
            placeholder: settings.placeholder.clone(),
            prompt_location: settings.prompt_location,
            border: settings.border,
            margin: settings.margin,
            padding: settings.padding,
            debug: settings.debug,
        }
    }

    /// Columns (and lines) taken by one side of the border.
    #[must_use]
    pub const fn border_width(&self) -> usize {
        match self.border {
            BorderStyle::Hidden => 0,
            _ => 1,
        }
    }

    /// Rows left for the list in a terminal of `rows` lines.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keyb::ui::Chrome;
    ///
    /// assert_eq!(Chrome::default().viewport_height(24), 21);
    /// assert_eq!(Chrome::default().viewport_height(2), 0);
    /// ```
    #[must_use]
    pub const fn viewport_height(&self, rows: usize) -> usize {
        rows.saturating_sub(CHROME_LINES + 2 * (self.margin + self.border_width()))
    }

    /// Content columns in a terminal of `cols` columns.
    #[must_use]
    pub const fn inner_width(&self, cols: usize) -> usize {
        cols.saturating_sub(2 * (self.margin + self.border_width() + self.padding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_and_margin_shrink_the_viewport() {
        let chrome = Chrome {
            border: BorderStyle::Rounded,
            margin: 1,
            ..Chrome::default()
        };
        assert_eq!(chrome.viewport_height(24), 24 - 3 - 4);
        assert_eq!(chrome.inner_width(80), 80 - 2 * (1 + 1 + 1));
    }

    #[test]
    fn hidden_border_reserves_nothing() {
        let chrome = Chrome {
            padding: 0,
            ..Chrome::default()
        };
        assert_eq!(chrome.border_width(), 0);
        assert_eq!(chrome.inner_width(80), 80);
    }
}
