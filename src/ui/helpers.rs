//! Shared rendering utilities.
//!
//! Frames are assembled into a `String` of ANSI escape sequences and written
//! to the terminal in one go. Widths are display columns, not bytes, so wide
//! characters line up.

use super::components::border::BorderGlyphs;
use super::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rectangle the content lines are drawn into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    /// First column of each line, border included (1-indexed).
    pub col: usize,
    /// Content columns between the paddings.
    pub width: usize,
    /// Blank columns on each side of the content.
    pub padding: usize,
    pub border: Option<BorderGlyphs>,
    /// Opening sequence for border glyphs.
    pub border_style: String,
}

/// Moves the cursor to `row`, `col` (1-indexed).
///
/// # Example
///
/// ```rust
/// use keyb::ui::helpers::position_cursor;
///
/// let mut out = String::new();
/// position_cursor(&mut out, 5, 1);
/// assert_eq!(out, "\u{1b}[5;1H");
/// ```
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Truncates `text` to `width` columns and pads it with spaces to exactly
/// `width` columns.
///
/// # Example
///
/// ```rust
/// use keyb::ui::helpers::fit;
///
/// assert_eq!(fit("keyb", 6), "keyb  ");
/// assert_eq!(fit("keybindings", 4), "keyb");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// Left and right aligned text on one line of `width` columns.
///
/// The left text wins when both do not fit.
#[must_use]
pub fn spread(left: &str, right: &str, width: usize) -> String {
    let gap = width.saturating_sub(left.width() + right.width());
    if gap == 0 && !right.is_empty() {
        return fit(left, width);
    }
    fit(&format!("{left}{}{right}", " ".repeat(gap)), width)
}

/// Centers `text` on a line of `width` columns.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width()) / 2;
    fit(&format!("{}{text}", " ".repeat(pad)), width)
}

/// Draws one content line: side borders, padding and `content`.
///
/// `content` is expected to span exactly [`Area::width`] columns.
pub fn draw_line(out: &mut String, row: usize, area: &Area, content: &str) {
    position_cursor(out, row, area.col);
    let padding = " ".repeat(area.padding);

    if let Some(glyphs) = &area.border {
        out.push_str(&area.border_style);
        out.push(glyphs.vertical);
        out.push_str(Theme::reset());
    }
    out.push_str(&padding);
    out.push_str(content);
    out.push_str(Theme::reset());
    out.push_str(&padding);
    if let Some(glyphs) = &area.border {
        out.push_str(&area.border_style);
        out.push(glyphs.vertical);
        out.push_str(Theme::reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_counts_display_columns() {
        assert_eq!(fit("日本", 3), "日 ");
        assert_eq!(fit("", 2), "  ");
    }

    #[test]
    fn spread_pushes_right_text_to_the_edge() {
        assert_eq!(spread("keyb", "vim", 10), "keyb   vim");
        assert_eq!(spread("keyb", "tmux", 6), "keyb  ");
    }

    #[test]
    fn center_splits_padding() {
        assert_eq!(center("ab", 6), "  ab  ");
    }

    #[test]
    fn draw_line_without_border() {
        let area = Area {
            col: 2,
            width: 3,
            padding: 1,
            border: None,
            border_style: String::new(),
        };
        let mut out = String::new();
        draw_line(&mut out, 4, &area, "abc");
        assert_eq!(out, format!("\u{1b}[4;2H abc{} ", Theme::reset()));
    }
}
