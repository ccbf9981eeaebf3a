//! Empty state component renderer.
//!
//! Fills the viewport when the keybindings file has no entries.

use crate::ui::helpers::{center, draw_line, fit, Area};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders `height` lines starting at `row` with the message centered
/// vertically. Returns the row after the viewport.
pub fn render_empty_state(
    out: &mut String,
    row: usize,
    height: usize,
    empty: &EmptyState,
    theme: &Theme,
    area: &Area,
) -> usize {
    let message_line = height.saturating_sub(2) / 2;

    for i in 0..height {
        let content = if i == message_line {
            format!(
                "{}{}",
                Theme::fg_opt(&theme.colors.empty_state_fg),
                center(&empty.message, area.width)
            )
        } else if i == message_line + 1 {
            format!("{}{}", Theme::dim(), center(&empty.subtitle, area.width))
        } else {
            fit("", area.width)
        };
        draw_line(out, row + i, area, &content);
    }
    row + height
}
