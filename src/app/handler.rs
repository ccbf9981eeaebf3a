//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point through which the host loop
//! changes the list. Key presses are resolved to [`Event`]s by the
//! [`KeyMap`](super::keymap::KeyMap) first, so the handler never sees raw
//! terminal input.
//!
//! # Event Types
//!
//! - **Navigation**: `StepUp`, `HalfPageDown`, `LastLine`, `ViewMiddle`, ...
//! - **Mouse**: `ScrollUp`, `ScrollDown`
//! - **Search**: `StartSearch`, `FocusResults`, `ExitSearch`, `ClearSearch`
//! - **Prompt editing**: `Char`, `Backspace`, word and line deletions
//! - **System**: `Resize`, `Quit`
//!
//! # Example
//!
//! ```rust
//! use keyb::app::{handle_event, Event, List, ListOptions};
//! use keyb::domain::{Layout, Row, RowFormat, Table};
//!
//! let table = Table::with_rows(
//!     vec![Row::heading("vim"), Row::entry("save", ":w", "", "vim", false)],
//!     RowFormat::default(),
//!     Layout::default(),
//! );
//! let mut list = List::new(table, ListOptions::default());
//!
//! let (redraw, actions) = handle_event(&mut list, &Event::StepDown);
//! assert!(redraw);
//! assert!(actions.is_empty());
//! assert_eq!(list.cursor(), 1);
//! ```

use super::actions::Action;
use super::prompt::Prompt;
use super::state::List;

/// Everything the list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor up one row, wrapping to the bottom.
    StepUp,
    /// Moves the cursor down one row, wrapping to the top.
    StepDown,
    HalfPageUp,
    HalfPageDown,
    FullPageUp,
    FullPageDown,
    FirstLine,
    LastLine,
    /// Cursor near the top of the window.
    ViewTop,
    ViewMiddle,
    /// Cursor near the bottom of the window.
    ViewBottom,
    /// Mouse wheel up.
    ScrollUp,
    /// Mouse wheel down.
    ScrollDown,
    /// Terminal resized; carries the new viewport height.
    Resize {
        height: usize,
    },

    /// Focuses the search prompt.
    StartSearch,
    /// Moves focus from the prompt to the filtered rows.
    FocusResults,
    /// Leaves filtering, dropping the query.
    ExitSearch,
    /// Empties the query and focuses the prompt.
    ClearSearch,

    /// Types a character into the prompt.
    Char(char),
    Backspace,
    Delete,
    CaretLeft,
    CaretRight,
    WordForward,
    WordBackward,
    DeleteWordBackward,
    DeleteWordForward,
    DeleteAfterCaret,
    DeleteBeforeCaret,
    LineStart,
    LineEnd,

    /// Ends the session.
    Quit,
}

impl Event {
    /// Prompt edit carried by this event, if any.
    fn prompt_edit(self) -> Option<fn(&mut Prompt)> {
        let edit: fn(&mut Prompt) = match self {
            Self::Backspace => Prompt::backspace,
            Self::Delete => Prompt::delete,
            Self::CaretLeft => Prompt::left,
            Self::CaretRight => Prompt::right,
            Self::WordForward => Prompt::word_forward,
            Self::WordBackward => Prompt::word_backward,
            Self::DeleteWordBackward => Prompt::delete_word_backward,
            Self::DeleteWordForward => Prompt::delete_word_forward,
            Self::DeleteAfterCaret => Prompt::delete_after_caret,
            Self::DeleteBeforeCaret => Prompt::delete_before_caret,
            Self::LineStart => Prompt::line_start,
            Self::LineEnd => Prompt::line_end,
            _ => return None,
        };
        Some(edit)
    }
}

/// Processes an event, mutates the list and returns the actions to execute.
///
/// # Parameters
///
/// * `list` - The list controller
/// * `event` - Event to process
///
/// # Returns
///
/// Whether the frame needs redrawing, and the actions for the host loop.
/// Every command leaves the list reconciled, so the cursor is always inside
/// the viewport when the frame is drawn.
///
/// # Tracing
///
/// Each call runs inside a debug-level `handle_event` span.
pub fn handle_event(list: &mut List, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match *event {
        Event::StepUp => list.step_up(),
        Event::StepDown => list.step_down(),
        Event::HalfPageUp => list.half_page_up(),
        Event::HalfPageDown => list.half_page_down(),
        Event::FullPageUp => list.full_page_up(),
        Event::FullPageDown => list.full_page_down(),
        Event::FirstLine => list.first_line(),
        Event::LastLine => list.last_line(),
        Event::ViewTop => list.view_top(),
        Event::ViewMiddle => list.view_middle(),
        Event::ViewBottom => list.view_bottom(),
        Event::ScrollUp | Event::ScrollDown if !list.mouse_enabled() => {
            return (false, vec![]);
        }
        Event::ScrollUp => list.scroll_up(),
        Event::ScrollDown => list.scroll_down(),
        Event::Resize { height } => list.resize(height),
        Event::StartSearch => {
            tracing::debug!("entering search mode");
            list.start_search();
        }
        Event::FocusResults => list.focus_results(),
        Event::ExitSearch => list.exit_search(),
        Event::ClearSearch => list.clear_search(),
        Event::Char(c) => {
            if !list.edit_prompt(|prompt| prompt.insert(c)) {
                return (false, vec![]);
            }
            tracing::trace!(query = %list.prompt().value(), char = %c, "search query updated");
        }
        Event::Quit => return (false, vec![Action::Quit]),
        edit => {
            let Some(edit) = edit.prompt_edit() else {
                return (false, vec![]);
            };
            if !list.edit_prompt(edit) {
                return (false, vec![]);
            }
        }
    }

    tracing::trace!(
        cursor = list.cursor(),
        offset = list.offset(),
        max_rows = list.max_rows(),
        mode = ?list.mode(),
        "list updated"
    );
    (true, vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{InputMode, SearchFocus};
    use crate::app::ListOptions;
    use crate::domain::{Bindings, GroupOrder, Layout, RowFormat};

    fn list() -> List {
        let mut bindings = Bindings::default();
        bindings.add_entry("firefox", "new tab", "ctrl+t", false);
        bindings.add_entry("firefox", "close tab", "ctrl+w", false);
        bindings.add_entry("vim", "save", ":w", false);
        bindings.add_entry("vim", "quit", ":q", false);
        let table = bindings.to_table(GroupOrder::File, &RowFormat::default(), Layout::default());
        List::new(table, ListOptions::default())
    }

    fn feed(list: &mut List, events: &[Event]) {
        for event in events {
            let _ = handle_event(list, event);
        }
    }

    #[test]
    fn quit_emits_action() {
        let mut list = list();
        assert_eq!(handle_event(&mut list, &Event::Quit), (false, vec![Action::Quit]));
    }

    #[test]
    fn typing_filters_the_list() {
        let mut list = list();
        feed(&mut list, &[Event::StartSearch, Event::Char('q'), Event::Char('u')]);
        assert_eq!(list.prompt().value(), "qu");
        assert_eq!(list.max_rows(), 1);
        assert_eq!(list.selected_row().map(|r| r.label.as_str()), Some("quit"));
    }

    #[test]
    fn characters_are_ignored_outside_the_prompt() {
        let mut list = list();
        let (redraw, _) = handle_event(&mut list, &Event::Char('j'));
        assert!(!redraw);
        assert!(list.prompt().is_empty());
    }

    #[test]
    fn prompt_editing_events() {
        let mut list = list();
        feed(
            &mut list,
            &[
                Event::StartSearch,
                Event::Char('n'),
                Event::Char('e'),
                Event::Char('w'),
                Event::Char(' '),
                Event::Char('t'),
                Event::DeleteWordBackward,
            ],
        );
        assert_eq!(list.prompt().value(), "new ");
        feed(&mut list, &[Event::LineStart, Event::Delete]);
        assert_eq!(list.prompt().value(), "ew ");
        feed(&mut list, &[Event::DeleteAfterCaret]);
        assert!(list.prompt().is_empty());
        assert_eq!(list.max_rows(), 6);
    }

    #[test]
    fn navigating_results_then_back_to_prompt() {
        let mut list = list();
        feed(&mut list, &[Event::StartSearch, Event::Char('t'), Event::Char('a'), Event::FocusResults]);
        assert_eq!(list.mode(), InputMode::Filtering(SearchFocus::Results));

        feed(&mut list, &[Event::StepDown]);
        assert_eq!(list.cursor(), 1);

        feed(&mut list, &[Event::StartSearch, Event::Backspace]);
        assert_eq!(list.prompt().value(), "t");
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn escape_restores_full_list() {
        let mut list = list();
        feed(&mut list, &[Event::StartSearch, Event::Char('s'), Event::ExitSearch]);
        assert_eq!(list.mode(), InputMode::Normal);
        assert_eq!(list.max_rows(), 6);
    }

    #[test]
    fn clear_search_from_results() {
        let mut list = list();
        feed(
            &mut list,
            &[Event::StartSearch, Event::Char('s'), Event::FocusResults, Event::ClearSearch],
        );
        assert!(list.mode().is_typing());
        assert!(list.prompt().is_empty());
    }

    #[test]
    fn resize_changes_height() {
        let mut list = list();
        feed(&mut list, &[Event::Resize { height: 2 }, Event::LastLine]);
        assert_eq!(list.height(), 2);
        assert_eq!(list.offset(), 4);
    }

    #[test]
    fn wheel_is_ignored_without_mouse() {
        let mut list = List::new(
            list().source().clone(),
            ListOptions {
                mouse_enabled: false,
                ..ListOptions::default()
            },
        );
        assert_eq!(handle_event(&mut list, &Event::ScrollDown), (false, vec![]));
    }
}
