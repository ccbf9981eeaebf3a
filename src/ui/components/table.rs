//! Viewport rows renderer.

use crate::ui::helpers::{draw_line, fit, Area};

/// Renders the styled `rows` and blank lines up to `height` lines.
///
/// Returns the row after the viewport.
pub fn render_table_rows(out: &mut String, row: usize, height: usize, rows: &[String], area: &Area) -> usize {
    let blank = fit("", area.width);
    for i in 0..height {
        let line = rows.get(i).filter(|line| !line.is_empty()).unwrap_or(&blank);
        draw_line(out, row + i, area, line);
    }
    row + height
}
