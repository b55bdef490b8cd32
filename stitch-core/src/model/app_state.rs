//! ``src/model/app_state.rs``
//!
//! The single application state passed `&mut` into every handler. It owns
//! the listing of the current directory and all the models derived from it,
//! and restores their invariants after every re-list.

use std::path::{Path, PathBuf};

use chrono::Local;
use compact_str::CompactString;
use tracing::{info, warn};

use crate::{
    config::Config,
    fs::{
        concat,
        listing::{self, Entry},
        probe::TextProbe,
    },
    model::{
        cursor::{Cursor, FRAME_ROWS, GridLayout, Viewport},
        filter::FilterState,
        mode::Mode,
        quick_mark::QuickMarkState,
        search::SearchState,
        selection::Selection,
        status::{StatusLevel, StatusLine},
    },
};

/// Transient windows drawn over Browse. They take keys first but are not modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popup {
    Help,
    Preview { title: CompactString, body: String },
    OutputPrompt { buffer: String },
}

#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub cwd: PathBuf,
    pub listing: Vec<Entry>,

    pub selection: Selection,
    pub cursor: Cursor,
    /// Row in the reorder list.
    pub reorder_cursor: Cursor,

    pub filter: FilterState,
    pub search: SearchState,
    pub quick_mark: Option<QuickMarkState>,

    mode: Mode,
    pub popup: Option<Popup>,
    pub status: StatusLine,
    pub viewport: Viewport,

    pub output_name: Option<String>,
    pub probe: TextProbe,
    pub quit: bool,

    listing_failed: bool,
}

impl AppState {
    pub fn new(config: Config, start_dir: PathBuf) -> Self {
        let probe = TextProbe::new(config.probe_bytes.max(1));
        let output_name = config.output_name.clone();
        let mut state = Self {
            config,
            cwd: start_dir,
            listing: Vec::new(),
            selection: Selection::new(),
            cursor: Cursor::default(),
            reorder_cursor: Cursor::default(),
            filter: FilterState::default(),
            search: SearchState::default(),
            quick_mark: None,
            mode: Mode::Browse,
            popup: None,
            status: StatusLine::default(),
            viewport: Viewport::default(),
            output_name,
            probe,
            quit: false,
            listing_failed: false,
        };
        state.refresh_listing();
        state
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Only the mode controller changes modes.
    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Re-list the current directory and clamp everything that indexes it.
    pub fn refresh_listing(&mut self) {
        match listing::list_directory(&self.cwd, &self.filter, self.config.show_hidden) {
            Ok(entries) => {
                self.listing = entries;
                self.listing_failed = false;
            }
            Err(e) => {
                self.listing.clear();
                if !self.listing_failed {
                    warn!(marker = "LIST_FAILED", error = %e, "Directory listing failed");
                    self.show_error(e.status_text());
                }
                self.listing_failed = true;
            }
        }
        self.cursor.clamp(self.listing.len());
        self.search.retain_within(self.listing.len());
    }

    /// Enter `dir`; the filter is kept, search results are not.
    pub fn change_directory(&mut self, dir: PathBuf) {
        info!(marker = "DIR_CHANGE", from = %self.cwd.display(), to = %dir.display(), "Changing directory");
        self.cwd = dir;
        self.cursor.reset();
        self.search.invalidate();
        self.quick_mark = None;
        self.listing_failed = false;
        self.refresh_listing();
    }

    /// `false` at a filesystem root.
    pub fn go_parent(&mut self) -> bool {
        match self.cwd.parent() {
            Some(parent) => {
                let parent = parent.to_path_buf();
                self.change_directory(parent);
                true
            }
            None => false,
        }
    }

    /// The listing changed under the search; drop results and re-list.
    pub fn filter_changed(&mut self) {
        self.search.invalidate();
        self.refresh_listing();
    }

    #[must_use]
    pub fn current_entry(&self) -> Option<&Entry> {
        self.listing.get(self.cursor.index())
    }

    #[must_use]
    pub fn layout(&self) -> GridLayout {
        GridLayout::for_viewport(self.viewport)
    }

    #[must_use]
    pub fn single_column_layout(&self) -> GridLayout {
        GridLayout::single_column(self.viewport)
    }

    /// Rows of the reorder list visible inside its border.
    #[must_use]
    pub fn reorder_rows(&self) -> usize {
        self.single_column_layout()
            .rows_per_column
            .saturating_sub(FRAME_ROWS)
            .max(1)
    }

    /// Text files of the visible (filtered) listing, in listing order.
    #[must_use]
    pub fn text_files(&self) -> Vec<Entry> {
        self.listing
            .iter()
            .filter(|entry| entry.is_text_file(&self.probe))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn text_file_candidates(&self) -> Vec<(PathBuf, CompactString)> {
        self.text_files()
            .into_iter()
            .map(|entry| (entry.path, entry.name))
            .collect()
    }

    /// Name used in banners: the name recorded at mark time, else the file name.
    #[must_use]
    pub fn display_name(&self, path: &Path) -> String {
        self.selection
            .name_of(path)
            .map(str::to_string)
            .or_else(|| path.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| path.display().to_string())
    }

    /// Destination for the next concatenation.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        concat::output_path(
            &self.cwd,
            self.output_name.as_deref(),
            &self.config.output_prefix,
            &self.config.timestamp_format,
            Local::now(),
        )
    }

    pub fn set_status(&mut self, message: impl Into<CompactString>, level: StatusLevel) {
        self.status = StatusLine::new(message, level);
    }

    #[inline]
    pub fn show_info(&mut self, message: impl Into<CompactString>) {
        self.set_status(message, StatusLevel::Info);
    }

    #[inline]
    pub fn show_success(&mut self, message: impl Into<CompactString>) {
        self.set_status(message, StatusLevel::Success);
    }

    #[inline]
    pub fn show_warning(&mut self, message: impl Into<CompactString>) {
        self.set_status(message, StatusLevel::Warning);
    }

    #[inline]
    pub fn show_error(&mut self, message: impl Into<CompactString>) {
        self.set_status(message, StatusLevel::Error);
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn names(state: &AppState) -> Vec<&str> {
        state.listing.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn starts_in_browse_with_listing() {
        let dir = sample_tree();
        let state = state_in(dir.path());

        assert_eq!(state.mode(), Mode::Browse);
        assert_eq!(names(&state), vec!["..", "sub", "a.txt", "b.txt", "data.bin"]);
        assert_eq!(state.cursor.index(), 0);
    }

    #[test]
    fn unreadable_directory_gives_empty_listing_and_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        state.change_directory(dir.path().join("nope"));

        assert!(state.listing.is_empty());
        assert_eq!(state.cursor.index(), 0);
        assert_eq!(state.status.level, StatusLevel::Error);
        assert!(state.status.message.starts_with("Error listing directory"));
    }

    #[test]
    fn shrinking_directory_clamps_cursor() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());
        let last = state.listing.len() - 1;
        state.cursor.set(last, state.listing.len());

        fs::remove_file(dir.path().join("data.bin")).unwrap();
        fs::remove_file(dir.path().join("b.txt")).unwrap();
        state.refresh_listing();

        assert_eq!(state.cursor.index(), state.listing.len() - 1);
    }

    #[test]
    fn directory_change_keeps_filter_and_clears_search() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());
        state.filter.push('t');
        state.filter_changed();
        state.search.execute("a", &state.listing.clone());
        assert!(state.search.has_results());

        state.change_directory(dir.path().join("sub"));

        assert_eq!(state.filter.query(), "t");
        assert!(!state.search.has_results());
        assert_eq!(names(&state), vec!["..", "inner.txt"]);
    }

    #[test]
    fn text_candidates_skip_dirs_and_binaries() {
        let dir = sample_tree();
        let state = state_in(dir.path());

        let names: Vec<_> = state
            .text_file_candidates()
            .into_iter()
            .map(|(_, name)| name)
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn output_path_honours_override() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());

        assert!(
            state
                .output_path()
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("concatenated_")
        );
        state.output_name = Some("all.txt".into());
        assert_eq!(state.output_path(), dir.path().join("all.txt"));
    }
}
