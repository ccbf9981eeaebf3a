//! Terminal rendering with theme support.
//!
//! ```text
//! List → UIViewModel::compute → UIViewModel → components → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready data computed from the list
//! - [`renderer`]: Frame rendering entry point
//! - [`components`]: Header, prompt, rows, footer, border
//! - [`chrome`]: Title, prompt and spacing settings
//! - [`helpers`]: Cursor positioning and width-aware padding
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod chrome;
pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use chrome::Chrome;
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
