//! Ordered, globally aligned collection of rows.
//!
//! A [`Table`] is built once per application group, then every group table is
//! joined into one master table representing the whole list. Every mutation
//! keeps `row_count` and the tab stop consistent with the rows in the same
//! call.

use super::layout::{self, Layout};
use super::row::{Row, RowFormat, RowStyles};

/// Ordered sequence of rows with a shared format and layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
    row_count: usize,
    tab_stop: usize,
    format: RowFormat,
    layout: Layout,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(RowFormat::default(), Layout::default())
    }
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new(format: RowFormat, layout: Layout) -> Self {
        Self {
            rows: Vec::new(),
            row_count: 0,
            tab_stop: layout.min_column_width,
            format,
            layout,
        }
    }

    /// Creates a table holding `rows`.
    #[must_use]
    pub fn with_rows(rows: Vec<Row>, format: RowFormat, layout: Layout) -> Self {
        let mut table = Self::new(format, layout);
        table.append_many(rows);
        table
    }

    /// Creates an empty table sharing this table's format and layout.
    #[must_use]
    pub fn empty_like(&self) -> Self {
        Self::new(self.format.clone(), self.layout)
    }

    /// Number of rows whose plain projection is non-empty.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    /// True when no row would produce output. Check before rendering.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Display column where the right cell starts.
    #[must_use]
    pub const fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    #[must_use]
    pub const fn format(&self) -> &RowFormat {
        &self.format
    }

    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// All stored rows, empty ones included.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Iterates over the rows that produce output, in order.
    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| !row.is_empty())
    }

    /// Returns the `n`-th non-empty row.
    #[must_use]
    pub fn visible_row(&self, n: usize) -> Option<&Row> {
        self.visible_rows().nth(n)
    }

    /// Marks the `n`-th non-empty row as selected and every other row as not.
    pub fn select(&mut self, n: usize) {
        for (i, row) in self.rows.iter_mut().filter(|row| !row.is_empty()).enumerate() {
            row.is_selected = i == n;
        }
    }

    /// Appends one row.
    pub fn append(&mut self, row: Row) {
        if !row.is_empty() {
            self.row_count += 1;
        }
        self.rows.push(row);
        self.align();
    }

    /// Appends several rows in order.
    pub fn append_many<I: IntoIterator<Item = Row>>(&mut self, rows: I) {
        for row in rows {
            if !row.is_empty() {
                self.row_count += 1;
            }
            self.rows.push(row);
        }
        self.align();
    }

    /// Moves every row of `other` onto the end of this table and re-aligns
    /// globally.
    pub fn join(&mut self, other: Self) {
        self.row_count += other.row_count;
        self.rows.extend(other.rows);
        self.align();
    }

    /// Recomputes the global tab stop from the current rows.
    pub fn align(&mut self) {
        self.tab_stop = layout::tab_stop(&self.rows, &self.format, &self.layout);
    }

    /// Clears rows and counters.
    pub fn reset(&mut self) {
        self.rows.clear();
        self.row_count = 0;
        self.tab_stop = self.layout.min_column_width;
    }

    /// `(row index, text)` for every non-empty row: the matcher's input.
    #[must_use]
    pub fn plain(&self) -> Vec<(usize, String)> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.is_empty())
            .map(|(i, row)| (i, row.text(&self.format)))
            .collect()
    }

    /// Aligned, unstyled lines of every non-empty row.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.visible_rows()
            .map(|row| row.render_plain(&self.format, self.tab_stop))
            .collect()
    }

    /// Aligned, unstyled projection: lines joined by `\n`, no trailing
    /// newline.
    ///
    /// # Example
    ///
    /// ```
    /// use keyb::domain::{Layout, Row, RowFormat, Table};
    ///
    /// let table = Table::with_rows(
    ///     vec![Row::heading("vim"), Row::entry("save", ":w", "", "vim", false)],
    ///     RowFormat::default(),
    ///     Layout::default(),
    /// );
    /// assert_eq!(table.render_plain(), "vim\nsave            :w");
    /// ```
    #[must_use]
    pub fn render_plain(&self) -> String {
        self.lines().join("\n")
    }

    /// Styled projection of every non-empty row, each padded or clipped to
    /// exactly `width` columns.
    #[must_use]
    pub fn render_styled(&self, width: usize, styles: &RowStyles) -> Vec<String> {
        self.visible_rows()
            .map(|row| row.render_styled(&self.format, self.tab_stop, width, styles))
            .collect()
    }
}
