//! Single-line search input.
//!
//! The caret is a character index into the value, so editing is safe for
//! multi-byte input.

/// Search query with a caret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prompt {
    value: String,
    caret: usize,
}

impl Prompt {
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Caret position in characters.
    #[must_use]
    pub const fn caret(&self) -> usize {
        self.caret
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, caret: usize) -> usize {
        self.value
            .char_indices()
            .nth(caret)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn chars(&self) -> Vec<char> {
        self.value.chars().collect()
    }

    /// Removes the characters in `start..end` and leaves the caret at `start`.
    fn remove_range(&mut self, start: usize, end: usize) {
        let (from, to) = (self.byte_offset(start), self.byte_offset(end));
        self.value.replace_range(from..to, "");
        self.caret = start;
    }

    /// Replaces the value and moves the caret to its end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.caret = self.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.caret = 0;
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.caret);
        self.value.insert(at, c);
        self.caret += 1;
    }

    /// Deletes the character before the caret.
    pub fn backspace(&mut self) {
        if self.caret > 0 {
            self.remove_range(self.caret - 1, self.caret);
        }
    }

    /// Deletes the character under the caret.
    pub fn delete(&mut self) {
        if self.caret < self.len() {
            self.remove_range(self.caret, self.caret + 1);
        }
    }

    pub fn left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.caret = (self.caret + 1).min(self.len());
    }

    pub fn line_start(&mut self) {
        self.caret = 0;
    }

    pub fn line_end(&mut self) {
        self.caret = self.len();
    }

    /// Caret position at the start of the previous word.
    fn word_start_before(&self) -> usize {
        let chars = self.chars();
        let mut i = self.caret;
        while i > 0 && chars[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !chars[i - 1].is_whitespace() {
            i -= 1;
        }
        i
    }

    /// Caret position at the end of the next word.
    fn word_end_after(&self) -> usize {
        let chars = self.chars();
        let mut i = self.caret;
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        while i < chars.len() && !chars[i].is_whitespace() {
            i += 1;
        }
        i
    }

    pub fn word_backward(&mut self) {
        self.caret = self.word_start_before();
    }

    pub fn word_forward(&mut self) {
        self.caret = self.word_end_after();
    }

    pub fn delete_word_backward(&mut self) {
        let start = self.word_start_before();
        self.remove_range(start, self.caret);
    }

    pub fn delete_word_forward(&mut self) {
        let (start, end) = (self.caret, self.word_end_after());
        self.remove_range(start, end);
    }

    /// Deletes everything from the caret to the end of the line.
    pub fn delete_after_caret(&mut self) {
        let (start, end) = (self.caret, self.len());
        self.remove_range(start, end);
    }

    /// Deletes everything from the start of the line to the caret.
    pub fn delete_before_caret(&mut self) {
        let end = self.caret;
        self.remove_range(0, end);
    }
}
