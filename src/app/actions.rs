//! Side effects requested by the event handler.
//!
//! [`handle_event`](super::handle_event) only mutates the list. Anything that
//! reaches outside of it is returned as an [`Action`] for the host loop to
//! carry out.
//!
//! # Example
//!
//! ```rust
//! use keyb::app::{handle_event, Action, Event, List, ListOptions};
//! use keyb::domain::Table;
//!
//! let mut list = List::new(Table::default(), ListOptions::default());
//! let (_, actions) = handle_event(&mut list, &Event::Quit);
//! assert_eq!(actions, vec![Action::Quit]);
//! ```

/// Commands executed by the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the interactive session and restore the terminal.
    Quit,
}
