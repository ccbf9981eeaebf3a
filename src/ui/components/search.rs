//! Search prompt renderer.
//!
//! The prompt line is always shown. While the query is empty it carries the
//! placeholder; while the prompt has focus the caret is drawn in reverse
//! video.

use crate::ui::helpers::{draw_line, Area};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Renders the prompt line at `row` and returns the next row.
pub fn render_search_bar(
    out: &mut String,
    row: usize,
    search: &SearchBarInfo,
    theme: &Theme,
    area: &Area,
) -> usize {
    let mut content = Theme::fg_opt(&theme.colors.prompt_fg);
    content.push_str(&search.prompt);
    content.push_str(Theme::reset());
    let mut used = search.prompt.width();

    let (text, style) = if search.query.is_empty() {
        (search.placeholder.as_str(), theme.placeholder_style())
    } else {
        (search.query.as_str(), String::new())
    };
    let caret = search.caret.map(|caret| if search.query.is_empty() { 0 } else { caret });

    content.push_str(&style);
    for (i, ch) in text.chars().enumerate() {
        let w = ch.width().unwrap_or(0);
        if used + w > area.width {
            break;
        }
        if caret == Some(i) {
            content.push_str(Theme::reverse());
            content.push(ch);
            content.push_str(Theme::reset());
            content.push_str(&style);
        } else {
            content.push(ch);
        }
        used += w;
    }
    content.push_str(Theme::reset());

    if caret.is_some_and(|caret| caret >= text.chars().count()) && used < area.width {
        content.push_str(Theme::reverse());
        content.push(' ');
        content.push_str(Theme::reset());
        used += 1;
    }

    content.push_str(&" ".repeat(area.width.saturating_sub(used)));
    draw_line(out, row, area, &content);
    row + 1
}
