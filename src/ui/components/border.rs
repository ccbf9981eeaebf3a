//! Box border around the content area.

use crate::config::BorderStyle;
use crate::ui::helpers::{position_cursor, Area};
use crate::ui::theme::Theme;

/// Characters of one border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

/// Glyphs for `style`; `None` for a hidden border.
#[must_use]
pub const fn glyphs(style: BorderStyle) -> Option<BorderGlyphs> {
    let (corners, horizontal, vertical) = match style {
        BorderStyle::Hidden => return None,
        BorderStyle::Normal => (['┌', '┐', '└', '┘'], '─', '│'),
        BorderStyle::Rounded => (['╭', '╮', '╰', '╯'], '─', '│'),
        BorderStyle::Double => (['╔', '╗', '╚', '╝'], '═', '║'),
        BorderStyle::Thick => (['┏', '┓', '┗', '┛'], '━', '┃'),
    };
    Some(BorderGlyphs {
        top_left: corners[0],
        top_right: corners[1],
        bottom_left: corners[2],
        bottom_right: corners[3],
        horizontal,
        vertical,
    })
}

/// Draws the top (`top == true`) or bottom edge at `row`.
///
/// Returns the next row; nothing is drawn for a hidden border.
pub fn render_edge(out: &mut String, row: usize, area: &Area, top: bool) -> usize {
    let Some(g) = &area.border else {
        return row;
    };
    let (left, right) = if top {
        (g.top_left, g.top_right)
    } else {
        (g.bottom_left, g.bottom_right)
    };
    let span = area.width + 2 * area.padding;

    position_cursor(out, row, area.col);
    out.push_str(&area.border_style);
    out.push(left);
    out.extend(std::iter::repeat(g.horizontal).take(span));
    out.push(right);
    out.push_str(Theme::reset());
    row + 1
}
