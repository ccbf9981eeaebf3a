//! View model types representing renderable UI state.
//!
//! View models are computed from the [`List`] on every frame and consumed by
//! the component renderers. They contain no logic, only display-ready data;
//! the viewport rows are already styled.

use super::chrome::Chrome;
use super::theme::Theme;
use crate::app::List;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    /// Styled rows inside the viewport, top to bottom.
    pub rows: Vec<String>,
    pub footer: FooterInfo,
    /// Set when there is nothing at all to list.
    pub empty_state: Option<EmptyState>,
}

/// Title line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Group of the selected row, shown on the right while filtering.
    pub heading: Option<String>,
}

/// Search prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub prompt: String,
    pub query: String,
    pub placeholder: String,
    /// Caret position in characters, present while the prompt has focus.
    pub caret: Option<usize>,
}

/// Counters and debug line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Rows in the full list.
    pub key_count: usize,
    /// Rows matched by the query, present while filtering.
    pub matches: Option<usize>,
    pub debug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

impl UIViewModel {
    /// Builds the view model for a content area `width` columns wide.
    #[must_use]
    pub fn compute(list: &List, chrome: &Chrome, theme: &Theme, width: usize) -> Self {
        let filtering = list.mode().is_filtering();
        let visible = list.visible();
        let styles = theme.row_styles();

        let rows = list
            .window()
            .map(|row| row.render_styled(visible.format(), visible.tab_stop(), width, &styles))
            .collect();

        let empty_state = list.source().is_empty().then(|| EmptyState {
            message: "No key bindings found".to_string(),
            subtitle: "Add one with: keyb add \"<app>; <name>; <key>\"".to_string(),
        });

        Self {
            header: HeaderInfo {
                title: chrome.title.clone(),
                heading: filtering.then(|| list.current_heading().to_string()),
            },
            search_bar: SearchBarInfo {
                prompt: chrome.prompt.clone(),
                query: list.prompt().value().to_string(),
                placeholder: chrome.placeholder.clone(),
                caret: list.mode().is_typing().then(|| list.prompt().caret()),
            },
            rows,
            footer: FooterInfo {
                key_count: list.source().row_count(),
                matches: filtering.then(|| list.match_count()),
                debug: chrome.debug.then(|| {
                    format!(
                        "Line: {} YOffset: {} Height: {}",
                        list.cursor(),
                        list.offset(),
                        list.height()
                    )
                }),
            },
            empty_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ListOptions;
    use crate::domain::{Bindings, GroupOrder, Layout, RowFormat, Table};

    fn list() -> List {
        let mut bindings = Bindings::default();
        bindings.add_entry("vim", "save", ":w", false);
        bindings.add_entry("vim", "quit", ":q", false);
        bindings.add_entry("tmux", "split", "%", false);
        let table = bindings.to_table(GroupOrder::File, &RowFormat::default(), Layout::default());
        List::new(
            table,
            ListOptions {
                viewport_height: 3,
                ..ListOptions::default()
            },
        )
    }

    #[test]
    fn normal_mode_has_no_heading_or_caret() {
        let vm = UIViewModel::compute(&list(), &Chrome::default(), &Theme::default(), 40);
        assert_eq!(vm.rows.len(), 3);
        assert_eq!(vm.header.heading, None);
        assert_eq!(vm.search_bar.caret, None);
        assert_eq!(vm.footer.key_count, 5);
        assert_eq!(vm.footer.matches, None);
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn filtering_shows_heading_and_match_count() {
        let mut list = list();
        list.set_query("split");
        let vm = UIViewModel::compute(&list, &Chrome::default(), &Theme::default(), 40);
        assert_eq!(vm.header.heading.as_deref(), Some("tmux"));
        assert_eq!(vm.search_bar.caret, Some(5));
        assert_eq!(vm.footer.matches, Some(1));
    }

    #[test]
    fn debug_line_reports_positions() {
        let chrome = Chrome {
            debug: true,
            ..Chrome::default()
        };
        let vm = UIViewModel::compute(&list(), &chrome, &Theme::default(), 40);
        assert_eq!(vm.footer.debug.as_deref(), Some("Line: 0 YOffset: 0 Height: 3"));
    }

    #[test]
    fn empty_source_sets_empty_state() {
        let list = List::new(Table::default(), ListOptions::default());
        let vm = UIViewModel::compute(&list, &Chrome::default(), &Theme::default(), 40);
        assert!(vm.rows.is_empty());
        assert!(vm.empty_state.is_some());
    }
}
