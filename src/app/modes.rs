//! Input mode state types.
//!
//! The list is either browsed normally or filtered. While filtering, focus is
//! either on the search prompt (keys type into the query) or on the results
//! (keys navigate the filtered rows).
//!
//! # Example
//!
//! ```rust
//! use keyb::app::modes::{InputMode, SearchFocus};
//!
//! let mode = InputMode::Filtering(SearchFocus::Prompt);
//! assert!(mode.is_filtering());
//! assert!(mode.is_typing());
//! ```

/// Focus state within filtering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keys edit the search query.
    ///
    /// Every edit re-runs the matcher. `enter` moves focus to the results,
    /// `esc` leaves filtering.
    Prompt,

    /// Keys navigate the filtered rows with the normal bindings.
    ///
    /// `/` returns focus to the prompt with the query intact.
    Results,
}

/// Current input handling mode.
///
/// Selects the key table used to resolve key presses and what the header and
/// footer show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Browsing the full list.
    #[default]
    Normal,

    /// A search is active, see [`SearchFocus`].
    Filtering(SearchFocus),
}

impl InputMode {
    #[must_use]
    pub const fn is_filtering(self) -> bool {
        matches!(self, Self::Filtering(_))
    }

    /// True when key presses go to the search prompt.
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Filtering(SearchFocus::Prompt))
    }
}
