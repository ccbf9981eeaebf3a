//! Composable UI component renderers.
//!
//! Each component draws its lines at a given row into the frame buffer and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title and, while filtering, the selected group
//! - [`search`]: Search prompt with placeholder and caret
//! - [`table`]: Viewport rows
//! - [`empty`]: Message shown when there is nothing to list
//! - [`footer`]: Key and match counters
//! - [`border`]: Box border around the content
//!
//! # Layout
//!
//! ```text
//! [margin]
//! [border top]
//! [Header]
//! [Search prompt]      (prompt_location = "top")
//! [Viewport rows]
//! [Search prompt]      (prompt_location = "bottom")
//! [Footer]
//! [border bottom]
//! [margin]
//! ```

pub mod border;
pub mod empty;
pub mod footer;
pub mod header;
pub mod search;
pub mod table;

use crate::config::PromptLocation;
use crate::ui::chrome::Chrome;
use crate::ui::helpers::Area;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::render_table_rows;

/// Content area of a `cols` wide terminal.
#[must_use]
pub fn area(chrome: &Chrome, theme: &Theme, cols: usize) -> Area {
    Area {
        col: chrome.margin + 1,
        width: chrome.inner_width(cols),
        padding: chrome.padding,
        border: border::glyphs(chrome.border),
        border_style: Theme::fg_opt(&theme.colors.border),
    }
}

/// Draws every line of the frame into `out`.
pub fn render_frame(
    out: &mut String,
    vm: &UIViewModel,
    chrome: &Chrome,
    theme: &Theme,
    rows: usize,
    cols: usize,
) {
    let area = area(chrome, theme, cols);
    let height = chrome.viewport_height(rows);
    let prompt_on_top = chrome.prompt_location == PromptLocation::Top;

    let mut row = chrome.margin + 1;
    row = border::render_edge(out, row, &area, true);
    row = render_header(out, row, &vm.header, theme, &area);
    if prompt_on_top {
        row = render_search_bar(out, row, &vm.search_bar, theme, &area);
    }

    row = match &vm.empty_state {
        Some(empty) => render_empty_state(out, row, height, empty, theme, &area),
        None => render_table_rows(out, row, height, &vm.rows, &area),
    };

    if !prompt_on_top {
        row = render_search_bar(out, row, &vm.search_bar, theme, &area);
    }
    row = render_footer(out, row, &vm.footer, theme, &area);
    border::render_edge(out, row, &area, false);
}
