//! Header component renderer.
//!
//! The title sits on the left. While filtering, the group of the selected row
//! is shown on the right.

use crate::ui::helpers::{draw_line, spread, Area};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header line at `row` and returns the next row.
///
/// # Example
///
/// ```rust
/// use keyb::ui::components::header::render_header;
/// use keyb::ui::helpers::Area;
/// use keyb::ui::viewmodel::HeaderInfo;
/// use keyb::ui::Theme;
///
/// let header = HeaderInfo { title: "keyb".to_string(), heading: Some("vim".to_string()) };
/// let area = Area { col: 1, width: 20, padding: 0, border: None, border_style: String::new() };
/// let mut out = String::new();
/// assert_eq!(render_header(&mut out, 1, &header, &Theme::default(), &area), 2);
/// assert!(out.contains("keyb             vim"));
/// ```
pub fn render_header(
    out: &mut String,
    row: usize,
    header: &HeaderInfo,
    theme: &Theme,
    area: &Area,
) -> usize {
    let heading = header.heading.as_deref().unwrap_or("");
    let text = spread(&header.title, heading, area.width);

    let mut content = String::from(Theme::bold());
    content.push_str(&Theme::fg_opt(&theme.colors.header_fg));
    content.push_str(&Theme::bg_opt(&theme.colors.header_bg));
    content.push_str(&text);

    draw_line(out, row, area, &content);
    row + 1
}
