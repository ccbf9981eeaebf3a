//! Domain layer: the list data model.
//!
//! Everything here is plain data plus pure functions. Nothing touches the
//! terminal or the filesystem.
//!
//! # Organization
//!
//! - [`row`]: a single heading or keybinding line
//! - [`layout`]: tab-stop computation shared by every row
//! - [`table`]: ordered, aligned row collection
//! - [`bindings`]: the keybindings file model and its conversion to a table
//! - [`error`]: error types and result alias
//!
//! # Examples
//!
//! ```
//! use keyb::domain::{Bindings, GroupOrder, Layout, RowFormat};
//!
//! let mut bindings = Bindings::default();
//! bindings.add_entry("vim", "save", ":w", false);
//!
//! let table = bindings.to_table(GroupOrder::File, &RowFormat::default(), Layout::default());
//! assert_eq!(table.render_plain(), "vim\nsave            :w");
//! ```

pub mod bindings;
pub mod error;
pub mod layout;
pub mod row;
pub mod table;

pub use bindings::{App, Bindings, GroupOrder, KeyBind};
pub use error::{KeybError, Result};
pub use layout::Layout;
pub use row::{Row, RowFormat, RowKind, RowStyles};
pub use table::Table;
