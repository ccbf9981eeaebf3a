//! Application layer: list state, filtering and input handling.
//!
//! This module sits between the host loop (main.rs) and the domain layer.
//! Terminal input flows one way through it:
//!
//! ```text
//! Key press → KeyMap → Event → handle_event → List mutates → Actions
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects returned to the host loop
//! - [`filter`]: Fuzzy matching and the `h:` query grammar
//! - [`handler`]: Event processing
//! - [`keymap`]: Configurable key strings resolved to events
//! - [`modes`]: Input mode state machine types
//! - [`prompt`]: Search prompt editing
//! - [`state`]: The list controller
//!
//! # Example
//!
//! ```rust
//! use keyb::app::{handle_event, Event, List, ListOptions};
//! use keyb::domain::Table;
//!
//! let mut list = List::new(Table::default(), ListOptions::default());
//! let (redraw, actions) = handle_event(&mut list, &Event::StepDown);
//! assert!(redraw && actions.is_empty());
//! ```

pub mod actions;
pub mod filter;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod prompt;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keymap::KeyMap;
pub use modes::{InputMode, SearchFocus};
pub use prompt::Prompt;
pub use state::{List, ListOptions};
