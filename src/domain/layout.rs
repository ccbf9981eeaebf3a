//! Tab-stop layout shared by every row of a table.
//!
//! Alignment is a pure function of the rows: the key column starts at the same
//! display column for every row, across group boundaries. No writer state is
//! kept between calls, so computing it twice yields the same tab stop.

use super::row::{Row, RowFormat};
use unicode_width::UnicodeWidthStr;

/// Narrowest the label column is ever laid out.
pub const MIN_COLUMN_WIDTH: usize = 16;

/// Default gap between the label column and the key column.
pub const DEFAULT_SEPARATOR_WIDTH: usize = 4;

/// Column layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Minimum width of the left column, gap included.
    pub min_column_width: usize,
    /// Minimum number of spaces between the widest left cell and the right
    /// column.
    pub separator_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            min_column_width: MIN_COLUMN_WIDTH,
            separator_width: DEFAULT_SEPARATOR_WIDTH,
        }
    }
}

impl Layout {
    #[must_use]
    pub const fn with_separator(separator_width: usize) -> Self {
        Self {
            min_column_width: MIN_COLUMN_WIDTH,
            separator_width,
        }
    }
}

/// Computes the display column at which the right cell starts.
///
/// Empty rows take no part in the computation.
///
/// # Example
///
/// ```
/// use keyb::domain::{layout, Layout, Row, RowFormat};
///
/// let rows = vec![Row::entry("a rather long description", "x", "", "g", false)];
/// let stop = layout::tab_stop(&rows, &RowFormat::default(), &Layout::default());
/// assert_eq!(stop, 25 + 4);
/// ```
#[must_use]
pub fn tab_stop(rows: &[Row], format: &RowFormat, layout: &Layout) -> usize {
    let widest = rows
        .iter()
        .filter(|row| !row.is_empty())
        .map(|row| row.cells(format).0.width())
        .max()
        .unwrap_or(0);

    (widest + layout.separator_width).max(layout.min_column_width)
}
