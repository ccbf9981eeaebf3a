//! Fuzzy filtering of the list.
//!
//! Scoring uses the skim algorithm from `fuzzy-matcher` (smart case). Results
//! are stable-sorted by descending score, so equally scored rows keep their
//! list order.
//!
//! # Query grammar
//!
//! - `h:<term>` matches `<term>` against group headings only; each matched
//!   heading brings its whole group along.
//! - anything else matches against keybinding rows only.

use crate::domain::{Row, Table};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Prefix selecting a heading query.
pub const HEADING_QUERY_PREFIX: &str = "h:";

/// One scored candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Caller-supplied index of the candidate.
    pub index: usize,
    pub score: i64,
    /// Character positions of the candidate matched by the term.
    pub matched_indexes: Vec<usize>,
}

/// Parsed search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'a> {
    Heading(&'a str),
    Entry(&'a str),
}

impl<'a> Query<'a> {
    #[must_use]
    pub fn parse(query: &'a str) -> Self {
        query
            .strip_prefix(HEADING_QUERY_PREFIX)
            .map_or(Self::Entry(query), Self::Heading)
    }

    #[must_use]
    pub const fn term(&self) -> &'a str {
        match self {
            Self::Heading(term) | Self::Entry(term) => term,
        }
    }
}

/// Scores `term` against every `(index, text)` candidate.
///
/// Candidates that do not match are dropped. An empty term matches nothing.
///
/// # Example
///
/// ```
/// use keyb::app::filter::find;
///
/// let candidates = vec![(0, "save file".to_string()), (1, "quit".to_string())];
/// let matches = find("sf", &candidates);
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].index, 0);
/// assert_eq!(matches[0].matched_indexes, vec![0, 5]);
/// ```
#[must_use]
pub fn find(term: &str, candidates: &[(usize, String)]) -> Vec<Match> {
    if term.is_empty() {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default();
    let mut matches: Vec<Match> = candidates
        .iter()
        .filter_map(|(index, text)| {
            matcher
                .fuzzy_indices(text, term)
                .map(|(score, matched_indexes)| Match {
                    index: *index,
                    score,
                    matched_indexes,
                })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

/// Builds the filtered table for `query` from `source`.
///
/// The result shares the source's format and layout and is aligned on its
/// own rows. Matched rows carry `is_filtered` and their highlight positions.
/// An empty query, or one without matches, yields an empty table.
#[must_use]
pub fn filter_table(source: &Table, query: &str) -> Table {
    let query = Query::parse(query);
    let _span = tracing::debug_span!("filter_table", query = ?query, rows = source.row_count()).entered();

    let rows = source.rows();
    let mut filtered = source.empty_like();

    match query {
        Query::Heading(term) => {
            let candidates: Vec<(usize, String)> = rows
                .iter()
                .enumerate()
                .filter(|(_, row)| row.is_heading() && !row.is_empty())
                .map(|(i, row)| (i, row.label.clone()))
                .collect();

            for m in find(term, &candidates) {
                filtered.append(marked(&rows[m.index], m.matched_indexes));
                let children = rows[m.index + 1..]
                    .iter()
                    .take_while(|row| !row.is_heading())
                    .filter(|row| !row.is_empty())
                    .map(|row| marked(row, Vec::new()));
                filtered.append_many(children.collect::<Vec<_>>());
            }
        }
        Query::Entry(term) => {
            let candidates: Vec<(usize, String)> = source
                .plain()
                .into_iter()
                .filter(|(i, _)| !rows[*i].is_heading())
                .collect();

            let matched = find(term, &candidates)
                .into_iter()
                .map(|m| marked(&rows[m.index], m.matched_indexes));
            filtered.append_many(matched.collect::<Vec<_>>());
        }
    }

    tracing::debug!(matches = filtered.row_count(), "filter applied");
    filtered
}

fn marked(row: &Row, matched_indexes: Vec<usize>) -> Row {
    let mut row = row.clone();
    row.clear_marks();
    row.is_filtered = true;
    row.matched_indexes = matched_indexes;
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bindings, GroupOrder, Layout, RowFormat};

    fn source() -> Table {
        let mut bindings = Bindings::default();
        bindings.add_entry("firefox", "new tab", "ctrl+t", false);
        bindings.add_entry("firefox", "close tab", "ctrl+w", false);
        bindings.add_entry("vim", "save", ":w", false);
        bindings.add_entry("vim", "quit", ":q", false);
        bindings.add_entry("tmux", "new window", "c", false);
        bindings.to_table(GroupOrder::File, &RowFormat::default(), Layout::default())
    }

    fn labels(table: &Table) -> Vec<&str> {
        table.visible_rows().map(|row| row.label.as_str()).collect()
    }

    #[test]
    fn parse_recognises_heading_prefix() {
        assert_eq!(Query::parse("h:vim"), Query::Heading("vim"));
        assert_eq!(Query::parse("vim"), Query::Entry("vim"));
        assert_eq!(Query::parse("xh:vim").term(), "xh:vim");
    }

    #[test]
    fn empty_term_matches_nothing() {
        let candidates = vec![(0, "anything".to_string())];
        assert!(find("", &candidates).is_empty());
    }

    #[test]
    fn ties_keep_candidate_order() {
        let candidates = vec![
            (0, "abc".to_string()),
            (1, "abc".to_string()),
            (2, "abc".to_string()),
        ];
        let order: Vec<usize> = find("abc", &candidates).iter().map(|m| m.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn results_are_sorted_by_score() {
        let candidates = vec![(0, "n_e_w".to_string()), (1, "new".to_string())];
        let matches = find("new", &candidates);
        assert_eq!(matches[0].index, 1);
        assert!(matches[0].score >= matches[1].score);
    }

    #[test]
    fn entry_query_skips_headings() {
        let filtered = filter_table(&source(), "vim");
        assert!(filtered.visible_rows().all(|row| !row.is_heading()));
    }

    #[test]
    fn entry_query_marks_rows() {
        let filtered = filter_table(&source(), "tab");
        let mut found = labels(&filtered);
        found.sort_unstable();
        assert_eq!(found, vec!["close tab", "new tab"]);
        assert!(filtered.visible_rows().all(|row| row.is_filtered && !row.matched_indexes.is_empty()));
    }

    #[test]
    fn heading_query_returns_whole_group() {
        let filtered = filter_table(&source(), "h:vim");
        assert_eq!(labels(&filtered), vec!["vim", "save", "quit"]);
        let heading = filtered.visible_row(0).unwrap();
        assert!(heading.is_heading());
        assert_eq!(heading.matched_indexes, vec![0, 1, 2]);
        assert!(filtered.visible_row(1).unwrap().matched_indexes.is_empty());
    }

    #[test]
    fn heading_query_without_term_is_empty() {
        assert!(filter_table(&source(), "h:").is_empty());
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_table(&source(), "zzzz").is_empty());
    }

    #[test]
    fn source_is_untouched() {
        let table = source();
        let before = table.clone();
        let _ = filter_table(&table, "tab");
        assert_eq!(table, before);
    }
}
