//! List controller: cursor, viewport and filter state.
//!
//! [`List`] owns the source table built from the keybindings file and a
//! derived filtered table rebuilt on every query edit. The cursor indexes the
//! non-empty rows of whichever table is currently visible.
//!
//! # Invariants
//!
//! After every command:
//!
//! - `cursor < max_rows` when `max_rows > 0`, otherwise `cursor == 0`
//! - `offset <= cursor < offset + height` when `height > 0`
//! - `offset <= max(0, max_rows - height)`
//!
//! Every public command ends with [`List::reconcile`], which is the only
//! place those bounds are enforced.
//!
//! # Navigation
//!
//! Single steps and mouse wheel scrolling wrap around the ends of the list,
//! with the viewport snapping to the matching end. Paging clamps at the ends.
//!
//! # Example
//!
//! ```rust
//! use keyb::app::{List, ListOptions};
//! use keyb::domain::{Layout, Row, RowFormat, Table};
//!
//! let table = Table::with_rows(
//!     vec![Row::heading("vim"), Row::entry("save", ":w", "", "vim", false)],
//!     RowFormat::default(),
//!     Layout::default(),
//! );
//! let mut list = List::new(table, ListOptions::default());
//!
//! list.step_up();
//! assert_eq!(list.cursor(), 1);
//! list.step_down();
//! assert_eq!(list.cursor(), 0);
//! ```

use super::filter;
use super::modes::{InputMode, SearchFocus};
use super::prompt::Prompt;
use crate::domain::{Row, Table};

/// Rows moved by one mouse wheel notch.
pub const WHEEL_DELTA: usize = 3;

/// Distance kept from the window edges by the view top and view bottom jumps.
pub const VIEW_MARGIN: usize = 3;

/// Construction parameters for [`List`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Number of rows in the viewport.
    pub viewport_height: usize,
    /// React to mouse wheel events.
    pub mouse_enabled: bool,
    /// Open with the search prompt focused.
    pub start_in_search: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            viewport_height: 20,
            mouse_enabled: true,
            start_in_search: false,
        }
    }
}

/// Scrollable, filterable list of rows.
#[derive(Debug, Clone)]
pub struct List {
    table: Table,
    filtered: Table,
    cursor: usize,
    offset: usize,
    height: usize,
    mode: InputMode,
    prompt: Prompt,
    max_rows: usize,
    current_heading: String,
    mouse_enabled: bool,
    wheel_delta: usize,
}

impl List {
    /// Creates a list over `table`.
    #[must_use]
    pub fn new(table: Table, options: ListOptions) -> Self {
        let filtered = table.empty_like();
        let mode = if options.start_in_search {
            InputMode::Filtering(SearchFocus::Prompt)
        } else {
            InputMode::Normal
        };

        let mut list = Self {
            table,
            filtered,
            cursor: 0,
            offset: 0,
            height: options.viewport_height,
            mode,
            prompt: Prompt::default(),
            max_rows: 0,
            current_heading: String::new(),
            mouse_enabled: options.mouse_enabled,
            wheel_delta: WHEEL_DELTA,
        };
        list.reconcile();
        list
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// First visible row of the viewport.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }

    #[must_use]
    pub const fn mode(&self) -> InputMode {
        self.mode
    }

    #[must_use]
    pub const fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    #[must_use]
    pub const fn mouse_enabled(&self) -> bool {
        self.mouse_enabled
    }

    /// Group of the row under the cursor.
    #[must_use]
    pub fn current_heading(&self) -> &str {
        &self.current_heading
    }

    /// The full, unfiltered table.
    #[must_use]
    pub const fn source(&self) -> &Table {
        &self.table
    }

    /// Number of rows matched by the current query.
    #[must_use]
    pub const fn match_count(&self) -> usize {
        self.filtered.row_count()
    }

    /// The table currently shown: the filtered table when it has rows,
    /// otherwise the source table.
    #[must_use]
    pub fn visible(&self) -> &Table {
        if self.filtered.is_empty() {
            &self.table
        } else {
            &self.filtered
        }
    }

    fn visible_mut(&mut self) -> &mut Table {
        if self.filtered.is_empty() {
            &mut self.table
        } else {
            &mut self.filtered
        }
    }

    /// Rows inside the viewport, top to bottom.
    pub fn window(&self) -> impl Iterator<Item = &Row> {
        self.visible()
            .visible_rows()
            .skip(self.offset)
            .take(self.height)
    }

    #[must_use]
    pub fn selected_row(&self) -> Option<&Row> {
        self.visible().visible_row(self.cursor)
    }

    fn max_offset(&self) -> usize {
        self.max_rows.saturating_sub(self.height)
    }

    const fn past_view_top(&self) -> bool {
        self.cursor < self.offset
    }

    const fn past_view_bottom(&self) -> bool {
        self.cursor >= self.offset + self.height
    }

    fn goto_top(&mut self) {
        self.offset = 0;
    }

    fn goto_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    fn lines_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    fn lines_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    fn to_first(&mut self) {
        self.cursor = 0;
        self.goto_top();
    }

    fn to_last(&mut self) {
        self.cursor = self.max_rows.saturating_sub(1);
        self.goto_bottom();
    }

    /// Moves up `n` rows, wrapping to the last row past the top.
    fn wrapping_up(&mut self, n: usize) {
        if self.max_rows == 0 {
            return;
        }
        if self.cursor < n {
            self.to_last();
        } else {
            self.cursor -= n;
            if self.past_view_top() {
                self.lines_up(n);
            }
        }
    }

    /// Moves down `n` rows, wrapping to the first row past the bottom.
    fn wrapping_down(&mut self, n: usize) {
        if self.max_rows == 0 {
            return;
        }
        if self.cursor + n >= self.max_rows {
            self.to_first();
        } else {
            self.cursor += n;
            if self.past_view_bottom() {
                self.lines_down(n);
            }
        }
    }

    /// Moves up `n` rows, stopping at the first row.
    fn clamping_up(&mut self, n: usize) {
        if self.cursor < n {
            self.to_first();
        } else {
            self.cursor -= n;
            if self.past_view_top() {
                self.lines_up(n);
            }
        }
    }

    /// Moves down `n` rows, stopping at the last row.
    fn clamping_down(&mut self, n: usize) {
        if self.cursor + n >= self.max_rows {
            self.to_last();
        } else {
            self.cursor += n;
            if self.past_view_bottom() {
                self.lines_down(n);
            }
        }
    }

    const fn half_page(&self) -> usize {
        if self.height / 2 == 0 {
            1
        } else {
            self.height / 2
        }
    }

    const fn full_page(&self) -> usize {
        if self.height == 0 {
            1
        } else {
            self.height
        }
    }

    /// Margin for the view top/bottom jumps, shrunk so both stay inside small
    /// windows.
    fn view_margin(&self) -> usize {
        VIEW_MARGIN.min(self.height / 2)
    }

    pub fn step_up(&mut self) {
        self.wrapping_up(1);
        self.reconcile();
    }

    pub fn step_down(&mut self) {
        self.wrapping_down(1);
        self.reconcile();
    }

    pub fn half_page_up(&mut self) {
        self.clamping_up(self.half_page());
        self.reconcile();
    }

    pub fn half_page_down(&mut self) {
        self.clamping_down(self.half_page());
        self.reconcile();
    }

    pub fn full_page_up(&mut self) {
        self.clamping_up(self.full_page());
        self.reconcile();
    }

    pub fn full_page_down(&mut self) {
        self.clamping_down(self.full_page());
        self.reconcile();
    }

    pub fn first_line(&mut self) {
        self.to_first();
        self.reconcile();
    }

    pub fn last_line(&mut self) {
        self.to_last();
        self.reconcile();
    }

    /// Moves the cursor near the top of the window without scrolling.
    pub fn view_top(&mut self) {
        self.cursor = self.offset + self.view_margin();
        self.reconcile();
    }

    /// Moves the cursor to the middle of the window without scrolling.
    pub fn view_middle(&mut self) {
        self.cursor = self.offset + self.height / 2;
        self.reconcile();
    }

    /// Moves the cursor near the bottom of the window without scrolling.
    pub fn view_bottom(&mut self) {
        self.cursor = (self.offset + self.height).saturating_sub(self.view_margin().max(1));
        self.reconcile();
    }

    pub fn scroll_up(&mut self) {
        if self.mouse_enabled {
            self.wrapping_up(self.wheel_delta);
            self.reconcile();
        }
    }

    pub fn scroll_down(&mut self) {
        if self.mouse_enabled {
            self.wrapping_down(self.wheel_delta);
            self.reconcile();
        }
    }

    /// Replaces the viewport height. The cursor stays on its row.
    pub fn resize(&mut self, height: usize) {
        tracing::trace!(from = self.height, to = height, "viewport resized");
        self.height = height;
        self.reconcile();
    }

    /// Focuses the search prompt, keeping any query already typed.
    pub fn start_search(&mut self) {
        self.mode = InputMode::Filtering(SearchFocus::Prompt);
        self.reconcile();
    }

    /// Moves focus from the prompt to the results. An empty query leaves
    /// filtering altogether.
    pub fn focus_results(&mut self) {
        if self.prompt.is_empty() {
            self.mode = InputMode::Normal;
            self.reset();
        } else {
            self.mode = InputMode::Filtering(SearchFocus::Results);
        }
        self.reconcile();
    }

    /// Leaves filtering: the query is cleared and the filtered rows dropped.
    pub fn exit_search(&mut self) {
        tracing::debug!(query = %self.prompt.value(), "leaving search");
        self.mode = InputMode::Normal;
        self.reset();
        self.reconcile();
    }

    /// Clears the query and focuses the prompt, from any mode.
    pub fn clear_search(&mut self) {
        self.mode = InputMode::Filtering(SearchFocus::Prompt);
        self.reset();
        self.reconcile();
    }

    /// Applies `edit` to the prompt and re-filters when the query changed.
    ///
    /// Ignored unless the prompt has focus.
    pub fn edit_prompt<F: FnOnce(&mut Prompt)>(&mut self, edit: F) -> bool {
        if !self.mode.is_typing() {
            return false;
        }
        let before = self.prompt.value().to_string();
        edit(&mut self.prompt);
        if self.prompt.value() != before {
            self.refilter();
        }
        self.reconcile();
        true
    }

    /// Replaces the query, as if typed.
    pub fn set_query(&mut self, query: &str) {
        self.mode = InputMode::Filtering(SearchFocus::Prompt);
        self.prompt.set_value(query);
        self.refilter();
        self.reconcile();
    }

    /// Rebuilds the filtered table from the current query and moves back to
    /// the top. An empty query shows the whole list again.
    fn refilter(&mut self) {
        if self.prompt.is_empty() {
            self.filtered.reset();
        } else {
            self.filtered = filter::filter_table(&self.table, self.prompt.value());
        }
        self.to_first();
    }

    /// Drops the query and the filtered rows and moves back to the top.
    fn reset(&mut self) {
        self.prompt.clear();
        self.filtered.reset();
        self.to_first();
    }

    /// Brings cursor, viewport and selection marks back in line with the
    /// visible table.
    ///
    /// Runs as the last step of every command.
    pub fn reconcile(&mut self) {
        self.max_rows = self.visible().row_count();

        if self.max_rows == 0 {
            self.cursor = 0;
            self.offset = 0;
            self.current_heading.clear();
            return;
        }

        self.cursor = self.cursor.min(self.max_rows - 1);
        let cursor = self.cursor;
        self.visible_mut().select(cursor);
        self.current_heading = self
            .selected_row()
            .map(|row| row.parent_heading.clone())
            .unwrap_or_default();

        if self.height > 0 {
            if self.cursor < self.offset {
                self.offset = self.cursor;
            }
            if self.cursor >= self.offset + self.height {
                self.offset = self.cursor + 1 - self.height;
            }
        }
        self.offset = self.offset.min(self.max_offset());
    }
}
