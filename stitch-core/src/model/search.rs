//! ``src/model/search.rs``
//!
//! Incremental name search over the current listing. Results are indices
//! into the listing they were computed against and are dropped whenever
//! that listing changes.

use crate::fs::listing::Entry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Text being typed in Search mode.
    draft: String,
    /// Last committed query.
    query: String,
    results: Vec<usize>,
    position: usize,
}

impl SearchState {
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[usize] {
        &self.results
    }

    #[must_use]
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// `(1-based position, total)` for the status line.
    #[must_use]
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.has_results()
            .then(|| (self.position + 1, self.results.len()))
    }

    pub fn begin_draft(&mut self) {
        self.draft.clear();
    }

    pub fn push(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn pop(&mut self) {
        self.draft.pop();
    }

    pub fn discard_draft(&mut self) {
        self.draft.clear();
    }

    /// Commits the draft as the query and runs it.
    pub fn commit(&mut self, listing: &[Entry]) -> Option<usize> {
        let query = std::mem::take(&mut self.draft);
        self.execute(&query, listing)
    }

    /// Replaces the result set with every entry whose name contains `query`
    /// (case-insensitive). Returns the first hit; an empty query clears.
    pub fn execute(&mut self, query: &str, listing: &[Entry]) -> Option<usize> {
        self.query = query.to_string();
        self.position = 0;
        self.results.clear();

        if query.is_empty() {
            return None;
        }

        let needle = query.to_lowercase();
        self.results.extend(
            listing
                .iter()
                .enumerate()
                .filter(|(_, entry)| entry.name.to_lowercase().contains(&needle))
                .map(|(i, _)| i),
        );
        self.results.first().copied()
    }

    /// Listing index of the next hit, wrapping around.
    pub fn next(&mut self) -> Option<usize> {
        let len = self.results.len();
        if len == 0 {
            return None;
        }
        self.position = (self.position + 1) % len;
        Some(self.results[self.position])
    }

    /// Listing index of the previous hit, wrapping around.
    pub fn previous(&mut self) -> Option<usize> {
        let len = self.results.len();
        if len == 0 {
            return None;
        }
        self.position = (self.position + len - 1) % len;
        Some(self.results[self.position])
    }

    /// Drop results; the listing they index has changed.
    pub fn invalidate(&mut self) {
        self.query.clear();
        self.results.clear();
        self.position = 0;
    }

    /// Drop results pointing past a listing of `len` entries.
    pub fn retain_within(&mut self, len: usize) {
        if self.results.iter().any(|&i| i >= len) {
            self.invalidate();
        }
    }
}
