//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: [`UIViewModel::compute`] turns the [`List`]
//!    into display-ready data
//! 2. **Component Rendering**: the components draw the view model into a
//!    frame buffer
//!
//! The frame is returned as a single string so the host writes it in one
//! call.
//!
//! # Example
//!
//! ```rust
//! use keyb::app::{List, ListOptions};
//! use keyb::domain::Table;
//! use keyb::ui::{render, Chrome, Theme};
//!
//! let list = List::new(Table::default(), ListOptions::default());
//! let frame = render(&list, &Chrome::default(), &Theme::default(), 24, 80);
//! assert!(frame.contains("No key bindings found"));
//! ```

use crate::app::List;
use crate::ui::chrome::Chrome;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Clears the screen and homes the cursor.
const CLEAR: &str = "\u{1b}[2J\u{1b}[H";

/// Renders a full frame for a terminal of `rows` x `cols`.
#[must_use]
pub fn render(list: &List, chrome: &Chrome, theme: &Theme, rows: usize, cols: usize) -> String {
    let _span = tracing::trace_span!("render", rows, cols).entered();
    let viewmodel = UIViewModel::compute(list, chrome, theme, chrome.inner_width(cols));

    let mut out = String::from(CLEAR);
    components::render_frame(&mut out, &viewmodel, chrome, theme, rows, cols);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ListOptions;
    use crate::config::{BorderStyle, PromptLocation};
    use crate::domain::{Bindings, GroupOrder, Layout, RowFormat};

    /// Drops escape sequences, keeping the printed text.
    fn strip_ansi(frame: &str) -> String {
        let mut out = String::new();
        let mut chars = frame.chars();
        while let Some(ch) = chars.next() {
            if ch == '\u{1b}' {
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(ch);
            }
        }
        out
    }

    fn list(height: usize) -> List {
        let mut bindings = Bindings::default();
        bindings.add_entry("vim", "save", ":w", false);
        bindings.add_entry("tmux", "split", "%", false);
        bindings.apps[1].prefix = "ctrl+b".to_string();
        let table = bindings.to_table(GroupOrder::File, &RowFormat::default(), Layout::default());
        List::new(
            table,
            ListOptions {
                viewport_height: height,
                ..ListOptions::default()
            },
        )
    }

    #[test]
    fn frame_contains_rows_and_counters() {
        let chrome = Chrome {
            title: "keyb".to_string(),
            ..Chrome::default()
        };
        let text = strip_ansi(&render(&list(5), &chrome, &Theme::default(), 8, 40));

        assert!(text.contains("keyb"));
        assert!(text.contains("keys > ..."));
        assert!(text.contains(" vim"));
        assert!(text.contains("  split           ctrl+b ; %"));
        assert!(text.contains(" keys: 4"));
    }

    #[test]
    fn prompt_moves_to_the_bottom() {
        let chrome = Chrome {
            prompt_location: PromptLocation::Bottom,
            padding: 0,
            ..Chrome::default()
        };
        let frame = render(&list(5), &chrome, &Theme::default(), 8, 40);
        assert!(frame.contains("\u{1b}[1;1H\u{1b}[1m"));
        assert!(frame.contains("\u{1b}[7;1Hkeys > "));
    }

    #[test]
    fn border_is_drawn_around_content() {
        let chrome = Chrome {
            border: BorderStyle::Rounded,
            ..Chrome::default()
        };
        let text = strip_ansi(&render(&list(3), &chrome, &Theme::default(), 8, 20));
        assert!(text.contains(&format!("╭{}╮", "─".repeat(18))));
        assert!(text.contains(&format!("╰{}╯", "─".repeat(18))));
    }

    #[test]
    fn long_rows_are_clipped_inside_the_border() {
        let mut bindings = Bindings::default();
        bindings.add_entry("vim", &"x".repeat(60), ":w", false);
        let table = bindings.to_table(GroupOrder::File, &RowFormat::default(), Layout::default());
        let list = List::new(
            table,
            ListOptions {
                viewport_height: 3,
                ..ListOptions::default()
            },
        );
        let chrome = Chrome {
            border: BorderStyle::Rounded,
            ..Chrome::default()
        };
        assert_eq!(chrome.inner_width(30), 26);

        let text = strip_ansi(&render(&list, &chrome, &Theme::default(), 8, 30));
        assert!(text.contains(&format!("│   {} │", "x".repeat(24))));
        assert!(!text.contains(&"x".repeat(25)));
        assert!(!text.contains(":w"));
    }

    #[test]
    fn filtering_shows_selected_group_and_matches() {
        let mut list = list(5);
        list.set_query("split");
        let text = strip_ansi(&render(&list, &Chrome::default(), &Theme::default(), 8, 40));
        assert!(text.contains("tmux"));
        assert!(text.contains("1 matches"));
    }
}
