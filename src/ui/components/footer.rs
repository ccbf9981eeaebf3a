//! Footer component renderer.
//!
//! Shows the number of keys, the number of matches while filtering and, in
//! debug mode, the cursor and viewport positions.

use crate::ui::helpers::{draw_line, fit, Area};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;
use unicode_width::UnicodeWidthStr;

/// Plain footer text.
#[must_use]
pub fn footer_text(footer: &FooterInfo) -> String {
    let mut text = format!(" keys: {}", footer.key_count);
    if let Some(matches) = footer.matches {
        text.push_str(&format!("  {matches} matches"));
    }
    if let Some(debug) = &footer.debug {
        text.push_str("    ");
        text.push_str(debug);
    }
    text
}

/// Renders the footer line at `row` and returns the next row.
pub fn render_footer(
    out: &mut String,
    row: usize,
    footer: &FooterInfo,
    theme: &Theme,
    area: &Area,
) -> usize {
    let text = fit(&footer_text(footer), area.width);
    let counters = text.trim_end();
    let rest = " ".repeat(area.width.saturating_sub(counters.width()));

    let mut content = theme.counter_style();
    content.push_str(counters);
    content.push_str(Theme::reset());
    content.push_str(&rest);

    draw_line(out, row, area, &content);
    row + 1
}
