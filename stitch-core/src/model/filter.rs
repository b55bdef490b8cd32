//! ``src/model/filter.rs``
//!
//! Listing filter: a case-insensitive substring matched against either the
//! whole name or the extension.
//!
//! The parent entry always passes, so a filter that is kept while drilling
//! into subdirectories never hides the way back up. In extension mode
//! directories pass as well.

use std::path::Path;

use crate::fs::listing::{Entry, EntryKind};

/// What the filter text is compared against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterKind {
    #[default]
    Name,
    Extension,
}

impl FilterKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Extension => "extension",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Name => Self::Extension,
            Self::Extension => Self::Name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    kind: FilterKind,
}

impl FilterState {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn kind(&self) -> FilterKind {
        self.kind
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn set_kind(&mut self, kind: FilterKind) {
        self.kind = kind;
    }

    pub fn toggle_kind(&mut self) -> FilterKind {
        self.kind = self.kind.toggled();
        self.kind
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
    }

    /// Remove the last character; `false` if there was nothing to remove.
    pub fn pop(&mut self) -> bool {
        self.query.pop().is_some()
    }

    /// Back to an empty name filter.
    pub fn reset(&mut self) {
        self.query.clear();
        self.kind = FilterKind::Name;
    }

    /// A matcher with the needle lowered once, or `None` when inactive.
    #[must_use]
    pub fn matcher(&self) -> Option<FilterMatcher> {
        if !self.is_active() {
            return None;
        }
        let lowered = self.query.to_lowercase();
        let needle = match self.kind {
            FilterKind::Name => lowered,
            FilterKind::Extension => lowered.trim_start_matches('.').to_string(),
        };
        Some(FilterMatcher {
            needle,
            kind: self.kind,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatcher {
    needle: String,
    kind: FilterKind,
}

impl FilterMatcher {
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        match (entry.kind, self.kind) {
            (EntryKind::Parent, _) => true,
            (EntryKind::Directory, FilterKind::Extension) => true,
            (_, FilterKind::Name) => entry.name.to_lowercase().contains(&self.needle),
            (EntryKind::File, FilterKind::Extension) => extension_of(&entry.name)
                .is_some_and(|ext| ext.to_lowercase().contains(&self.needle)),
        }
    }
}

fn extension_of(name: &str) -> Option<&str> {
    Path::new(name).extension().and_then(|ext| ext.to_str())
}
