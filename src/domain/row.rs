//! Row model: the atomic display unit of the list.
//!
//! A [`Row`] is either a group heading or one keybinding entry. The variant is
//! carried by [`RowKind`], so a heading that owns a key expression cannot be
//! constructed. Rows know how to project themselves to plain text (export and
//! fuzzy matching) and to styled text (interactive display).

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// ANSI reset sequence closing every styled run.
pub const RESET: &str = "\u{001b}[0m";

/// Columns a heading is indented by in the styled projection.
const HEADING_INDENT: usize = 1;

/// Columns an entry is indented by in the styled projection.
const ENTRY_INDENT: usize = 2;

/// Key expression attached to an entry row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Key expression, e.g. `ctrl+w v`.
    pub key: String,
    /// Group-wide prefix, e.g. `ctrl+b` for tmux. May be empty.
    pub prefix: String,
    /// Whether `prefix` is printed in front of `key`.
    ///
    /// Only ever true when `prefix` is non-empty.
    pub show_prefix: bool,
}

/// Heading or entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Group heading (application name).
    Heading,
    /// A single keybinding.
    Entry(Binding),
}

/// Formatting parameters shared by every row of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFormat {
    /// Text placed between a group prefix and the key.
    pub prefix_sep: String,
    /// Print the key column before the label column.
    pub reversed: bool,
}

impl Default for RowFormat {
    fn default() -> Self {
        Self {
            prefix_sep: ";".to_string(),
            reversed: false,
        }
    }
}

/// Opening escape sequences for each row style.
///
/// Produced by [`Theme::row_styles`](crate::ui::Theme::row_styles). Every
/// styled run is closed with [`RESET`], so the strings only need to open a
/// style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowStyles {
    pub normal: String,
    pub heading: String,
    pub selected: String,
    pub selected_heading: String,
    pub filtered: String,
}

/// One display line: a group heading or a keybinding entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Description of the binding, or the group name for headings.
    pub label: String,
    /// Heading or entry payload.
    pub kind: RowKind,
    /// Name of the group this row belongs to. Display only.
    pub parent_heading: String,
    /// Row is under the cursor.
    pub is_selected: bool,
    /// Row is part of a filter result.
    pub is_filtered: bool,
    /// Character positions in [`Row::text`] matched by the current query.
    pub matched_indexes: Vec<usize>,
}

impl Row {
    /// Creates a group heading.
    #[must_use]
    pub fn heading(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            parent_heading: label.clone(),
            label,
            kind: RowKind::Heading,
            is_selected: false,
            is_filtered: false,
            matched_indexes: Vec::new(),
        }
    }

    /// Creates a keybinding entry.
    ///
    /// The group prefix is shown unless it is empty or `ignore_prefix` is set.
    ///
    /// # Example
    ///
    /// ```
    /// use keyb::domain::{Row, RowFormat};
    ///
    /// let row = Row::entry("split pane", "%", "ctrl+b", "tmux", false);
    /// assert_eq!(row.text(&RowFormat::default()), "split pane\tctrl+b ; %");
    /// ```
    #[must_use]
    pub fn entry(
        label: impl Into<String>,
        key: impl Into<String>,
        prefix: impl Into<String>,
        parent_heading: impl Into<String>,
        ignore_prefix: bool,
    ) -> Self {
        let prefix = prefix.into();
        let show_prefix = !prefix.is_empty() && !ignore_prefix;
        Self {
            label: label.into(),
            kind: RowKind::Entry(Binding {
                key: key.into(),
                prefix,
                show_prefix,
            }),
            parent_heading: parent_heading.into(),
            is_selected: false,
            is_filtered: false,
            matched_indexes: Vec::new(),
        }
    }

    /// Creates an entry with no label and no key. It renders as nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::entry("", "", "", "", true)
    }

    #[must_use]
    pub const fn is_heading(&self) -> bool {
        matches!(self.kind, RowKind::Heading)
    }

    /// Returns the key expression of an entry, `None` for headings.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match &self.kind {
            RowKind::Heading => None,
            RowKind::Entry(binding) => Some(&binding.key),
        }
    }

    /// True when the row has neither label nor key and projects to `""`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_empty() && self.key().map_or(true, str::is_empty)
    }

    /// Drops the transient selection and filter marks.
    pub fn clear_marks(&mut self) {
        self.is_selected = false;
        self.is_filtered = false;
        self.matched_indexes.clear();
    }

    /// Key column text: `"<prefix> <sep> <key>"` or just `"<key>"`.
    fn key_column(binding: &Binding, format: &RowFormat) -> String {
        if binding.show_prefix {
            format!("{} {} {}", binding.prefix, format.prefix_sep, binding.key)
        } else {
            binding.key.clone()
        }
    }

    /// Returns the `(left, right)` cells of the row.
    ///
    /// Headings only fill the left cell and are never reversed.
    #[must_use]
    pub fn cells(&self, format: &RowFormat) -> (String, String) {
        match &self.kind {
            RowKind::Heading => (self.label.clone(), String::new()),
            RowKind::Entry(binding) => {
                let key = Self::key_column(binding, format);
                if format.reversed {
                    (key, self.label.clone())
                } else {
                    (self.label.clone(), key)
                }
            }
        }
    }

    /// Plain, unaligned projection with a tab between the two cells.
    ///
    /// This is the string the fuzzy matcher sees, so `matched_indexes` are
    /// character positions into it.
    #[must_use]
    pub fn text(&self, format: &RowFormat) -> String {
        if self.is_empty() {
            return String::new();
        }
        match self.kind {
            RowKind::Heading => format!("{}\t ", self.label),
            RowKind::Entry(_) => {
                let (left, right) = self.cells(format);
                format!("{left}\t{right}")
            }
        }
    }

    /// Aligned plain line: left cell padded to `tab_stop`, then the right cell.
    #[must_use]
    pub fn render_plain(&self, format: &RowFormat, tab_stop: usize) -> String {
        if self.is_empty() {
            return String::new();
        }
        let (left, right) = self.cells(format);
        let mut line = left;
        if !right.is_empty() {
            let pad = tab_stop.saturating_sub(line.width());
            line.push_str(&" ".repeat(pad));
            line.push_str(&right);
        }
        line.trim_end().to_string()
    }

    /// Styled line for interactive display.
    ///
    /// The base style is picked from selection and heading state; matched
    /// characters are wrapped in the filter style and the base style is
    /// re-opened after each of them. The line is padded with the base style up
    /// to `width` display columns and clipped at `width`.
    #[must_use]
    pub fn render_styled(
        &self,
        format: &RowFormat,
        tab_stop: usize,
        width: usize,
        styles: &RowStyles,
    ) -> String {
        if self.is_empty() {
            return String::new();
        }

        let base = match (self.is_selected, self.is_heading()) {
            (true, true) => &styles.selected_heading,
            (true, false) => &styles.selected,
            (false, true) => &styles.heading,
            (false, false) => &styles.normal,
        };
        let indent = if self.is_heading() { HEADING_INDENT } else { ENTRY_INDENT };
        let (left, right) = self.cells(format);

        let mut line = StyledLine::new(width, base, &styles.filtered);
        line.pad(indent);
        line.push_highlighted(&left, 0, &self.matched_indexes);
        if !right.is_empty() {
            line.pad(tab_stop.saturating_sub(left.width()));
            line.push_highlighted(&right, left.chars().count() + 1, &self.matched_indexes);
        }
        line.finish()
    }
}

/// Styled line under construction, never wider than `width` columns.
struct StyledLine<'a> {
    out: String,
    visual: usize,
    width: usize,
    base: &'a str,
    filtered: &'a str,
}

impl<'a> StyledLine<'a> {
    fn new(width: usize, base: &'a str, filtered: &'a str) -> Self {
        Self {
            out: base.to_string(),
            visual: 0,
            width,
            base,
            filtered,
        }
    }

    fn pad(&mut self, columns: usize) {
        let columns = columns.min(self.width.saturating_sub(self.visual));
        self.out.push_str(&" ".repeat(columns));
        self.visual += columns;
    }

    /// Appends `text`, wrapping characters whose position (shifted by
    /// `offset`) is in `matched` in the filter style. Stops at the first
    /// character that would not fit.
    fn push_highlighted(&mut self, text: &str, offset: usize, matched: &[usize]) {
        for (i, ch) in text.chars().enumerate() {
            let columns = ch.width().unwrap_or(0);
            if self.visual + columns > self.width {
                break;
            }
            if matched.contains(&(offset + i)) {
                self.out.push_str(self.filtered);
                self.out.push(ch);
                self.out.push_str(RESET);
                self.out.push_str(self.base);
            } else {
                self.out.push(ch);
            }
            self.visual += columns;
        }
    }

    fn finish(mut self) -> String {
        self.pad(self.width);
        self.out.push_str(RESET);
        self.out
    }
}
