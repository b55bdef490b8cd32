//! ``src/fs/listing.rs``
//!
//! # Listing Provider
//!
//! Reads one directory and returns its entries in display order: the parent
//! pseudo-entry (unless at a filesystem root), then directories, then
//! everything else, each group sorted by name. The active filter is applied
//! last. Entries are rebuilt on every call and never cached.

use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};

use compact_str::CompactString;
use tracing::trace;

use crate::{error::AppError, fs::probe::TextProbe, model::filter::FilterState};

pub const PARENT_NAME: &str = "..";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    Parent,
    Directory,
    File,
}

/// One row of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: CompactString,
    /// Absolute path; for the parent entry, the parent directory itself.
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    #[inline]
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Parent | EntryKind::Directory)
    }

    #[inline]
    #[must_use]
    pub const fn is_parent(&self) -> bool {
        matches!(self.kind, EntryKind::Parent)
    }

    /// Probes the file on every call; the answer may change between renders.
    #[must_use]
    pub fn is_text_file(&self, probe: &TextProbe) -> bool {
        self.kind == EntryKind::File && probe.is_text(&self.path)
    }
}

/// Lists `dir` in display order with `filter` applied.
pub fn list_directory(
    dir: &Path,
    filter: &FilterState,
    show_hidden: bool,
) -> Result<Vec<Entry>, AppError> {
    let read_dir = fs::read_dir(dir).map_err(|e| AppError::directory_unreadable(dir, e))?;

    let mut entries: Vec<Entry> = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| AppError::directory_unreadable(dir, e))?;
        let name = dir_entry.file_name().to_string_lossy().into_owned();

        if !show_hidden && name.starts_with('.') {
            continue;
        }

        let path = dir.join(&name);
        // Follows symlinks; a dangling link lists as a plain entry.
        let kind = if fs::metadata(&path).is_ok_and(|m| m.is_dir()) {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        entries.push(Entry {
            name: CompactString::from(name),
            path,
            kind,
        });
    }

    sort_entries(&mut entries);

    if let Some(parent) = dir.parent() {
        entries.insert(
            0,
            Entry {
                name: CompactString::const_new(PARENT_NAME),
                path: parent.to_path_buf(),
                kind: EntryKind::Parent,
            },
        );
    }

    if let Some(matcher) = filter.matcher() {
        entries.retain(|entry| matcher.matches(entry));
    }

    trace!(dir = %dir.display(), count = entries.len(), "Directory listed");
    Ok(entries)
}

/// Directories first, then byte-wise name order.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a: &Entry, b: &Entry| -> Ordering {
        a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name))
    });
}
