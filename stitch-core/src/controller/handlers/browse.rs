//! ``src/controller/handlers/browse.rs``
//!
//! Browse mode: movement, directory navigation, marking, mode entry and the
//! output commands. The only mode allowed to change directory.

use std::fs;

use bytesize::ByteSize;
use clipr::ClipboardSink;
use tracing::{debug, info};

use crate::{
    controller::{command::BrowseCommand, handlers::report_mark, mode_controller::transition},
    error::AppError,
    fs::{concat, listing::EntryKind},
    model::{
        app_state::{AppState, Popup},
        filter::FilterKind,
        mode::Mode,
        quick_mark::QuickMarkState,
        selection::BulkOutcome,
    },
};

pub fn handle(
    state: &mut AppState,
    cmd: BrowseCommand,
    clipboard: &mut dyn ClipboardSink,
) -> Result<(), AppError> {
    let count = state.listing.len();
    let layout = state.layout();

    match cmd {
        BrowseCommand::Up => state.cursor.move_up(),
        BrowseCommand::Down => state.cursor.move_down(count),
        BrowseCommand::Left => state.cursor.move_left(&layout),
        BrowseCommand::Right => state.cursor.move_right(&layout, count),
        BrowseCommand::PageUp => state.cursor.page_up(&layout),
        BrowseCommand::PageDown => state.cursor.page_down(&layout, count),
        BrowseCommand::Top => state.cursor.top(),
        BrowseCommand::Bottom => state.cursor.bottom(count),

        BrowseCommand::Enter => open_current(state)?,
        BrowseCommand::Parent => {
            if !state.go_parent() {
                state.show_info("Already at the filesystem root");
            }
        }

        BrowseCommand::MarkAdvance => mark_and_advance(state),
        BrowseCommand::UnmarkUp => unmark_and_retreat(state),
        BrowseCommand::MarkAll => mark_all(state),

        BrowseCommand::StartFilter(kind) => start_filter(state, kind)?,
        BrowseCommand::StartSearch => {
            state.search.begin_draft();
            transition(state, Mode::Search)?;
        }
        BrowseCommand::NextMatch => match state.search.next() {
            Some(index) => jump_to_match(state, index),
            None => state.show_info("No search results"),
        },
        BrowseCommand::PreviousMatch => match state.search.previous() {
            Some(index) => jump_to_match(state, index),
            None => state.show_info("No search results"),
        },

        BrowseCommand::EnterReorder => enter_reorder(state)?,
        BrowseCommand::EnterQuickMark => enter_quick_mark(state)?,

        BrowseCommand::Concatenate => concatenate(state)?,
        BrowseCommand::CopyConcatenation => copy_concatenation(state, clipboard)?,
        BrowseCommand::CopyFile => copy_file(state, clipboard)?,
        BrowseCommand::CopyPath => copy_path(state, clipboard)?,

        BrowseCommand::PromptOutput => {
            state.popup = Some(Popup::OutputPrompt {
                buffer: String::new(),
            });
        }
        BrowseCommand::Help => state.popup = Some(Popup::Help),
    }
    Ok(())
}

/// Enter a directory, go up on `..`, or preview a text file.
fn open_current(state: &mut AppState) -> Result<(), AppError> {
    let Some(entry) = state.current_entry().cloned() else {
        return Ok(());
    };

    match entry.kind {
        EntryKind::Parent => {
            state.go_parent();
        }
        EntryKind::Directory => state.change_directory(entry.path),
        EntryKind::File => {
            if !entry.is_text_file(&state.probe) {
                state.show_warning(format!("Not a text file: {}", entry.name));
                return Ok(());
            }
            let body = state.probe.read_prefix(&entry.path)?;
            debug!(path = %entry.path.display(), "Opening preview");
            state.popup = Some(Popup::Preview {
                title: entry.name,
                body,
            });
        }
    }
    Ok(())
}

fn mark_and_advance(state: &mut AppState) {
    let Some(entry) = state.current_entry().cloned() else {
        return;
    };
    let probe = state.probe;
    let outcome = state
        .selection
        .toggle_mark(&entry.path, &entry.name, entry.is_dir(), |p| probe.is_text(p));
    report_mark(state, outcome, &entry.name);
    state.cursor.move_down(state.listing.len());
}

fn unmark_and_retreat(state: &mut AppState) {
    let Some(entry) = state.current_entry().cloned() else {
        return;
    };
    let unmarked = state.selection.unmark(&entry.path);
    if unmarked {
        let count = state.selection.len();
        state.show_info(format!("Unmarked {} ({count} selected)", entry.name));
    }
    if state.cursor.index() > 0 {
        state.cursor.move_up();
    } else if !unmarked {
        state.show_info("Already at the top");
    }
}

fn mark_all(state: &mut AppState) {
    let candidates = state.text_file_candidates();
    match state.selection.mark_all(&candidates) {
        BulkOutcome::Marked(n) => {
            let total = state.selection.len();
            state.show_success(format!("Marked {n} files ({total} selected)"));
        }
        BulkOutcome::Unmarked(n) => {
            let total = state.selection.len();
            state.show_info(format!("Unmarked {n} files ({total} selected)"));
        }
        BulkOutcome::NoCandidates => state.show_warning("No text files to mark"),
    }
}

fn start_filter(state: &mut AppState, kind: FilterKind) -> Result<(), AppError> {
    if state.filter.kind() != kind {
        state.filter.set_kind(kind);
        if state.filter.is_active() {
            state.filter_changed();
        }
    }
    transition(state, Mode::Filter)
}

fn jump_to_match(state: &mut AppState, index: usize) {
    state.cursor.set(index, state.listing.len());
    if let Some((at, total)) = state.search.progress() {
        let query = state.search.query().to_string();
        state.show_info(format!("Match {at} of {total} for '{query}'"));
    }
}

fn enter_reorder(state: &mut AppState) -> Result<(), AppError> {
    if state.selection.is_empty() {
        state.show_warning("No files marked");
        return Ok(());
    }
    state.selection.reconcile();
    state.reorder_cursor.reset();
    transition(state, Mode::Reorder)?;
    state.show_info("Reorder: K/J move, r or Esc to finish");
    Ok(())
}

fn enter_quick_mark(state: &mut AppState) -> Result<(), AppError> {
    if state.mode() == Mode::Reorder {
        state.show_warning("Leave reorder mode first");
        return Ok(());
    }
    let Some(snapshot) = QuickMarkState::snapshot(state.text_files()) else {
        state.show_warning("No text files in this directory");
        return Ok(());
    };
    let total = snapshot.len();
    state.quick_mark = Some(snapshot);
    transition(state, Mode::QuickMark)?;
    state.show_info(format!("Quick-mark: {total} text files, press a letter to toggle"));
    Ok(())
}

fn concatenate(state: &mut AppState) -> Result<(), AppError> {
    let order = state.selection.materialize_order();
    if order.is_empty() {
        state.show_warning("No files marked");
        return Ok(());
    }

    let dest = state.output_path();
    info!(marker = "CONCAT_START", files = order.len(), dest = %dest.display(), "Concatenating");
    let report = concat::concatenate_to_file(&order, |p| state.display_name(p), &dest)?;

    let target = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dest.display().to_string());
    let summary = report.summary(&target);
    if report.is_complete() {
        state.show_success(summary);
    } else {
        state.show_warning(summary);
    }
    Ok(())
}

fn copy_concatenation(
    state: &mut AppState,
    clipboard: &mut dyn ClipboardSink,
) -> Result<(), AppError> {
    let order = state.selection.materialize_order();
    if order.is_empty() {
        state.show_warning("No files marked");
        return Ok(());
    }

    let (text, report) = concat::concatenate_to_string(&order, |p| state.display_name(p));
    clipboard.set_text(text)?;
    info!(
        marker = "CLIPBOARD_COPY",
        sink = clipboard.name(),
        files = report.written.len(),
        "Concatenation copied"
    );

    let summary = report.summary("clipboard");
    if report.is_complete() {
        state.show_success(summary);
    } else {
        state.show_warning(summary);
    }
    Ok(())
}

fn copy_file(state: &mut AppState, clipboard: &mut dyn ClipboardSink) -> Result<(), AppError> {
    let Some(entry) = state.current_entry().cloned() else {
        return Ok(());
    };
    if entry.kind != EntryKind::File {
        state.show_warning(format!("Not a file: {}", entry.name));
        return Ok(());
    }

    let bytes = fs::read(&entry.path).map_err(|e| AppError::file_unreadable(&entry.path, e))?;
    let size = ByteSize::b(bytes.len() as u64);
    clipboard.set_text(String::from_utf8_lossy(&bytes).into_owned())?;
    state.show_success(format!("Copied {} ({size}) to clipboard", entry.name));
    Ok(())
}

fn copy_path(state: &mut AppState, clipboard: &mut dyn ClipboardSink) -> Result<(), AppError> {
    let Some(entry) = state.current_entry().cloned() else {
        return Ok(());
    };
    let path = entry.path.display().to_string();
    clipboard.set_text(path.clone())?;
    state.show_success(format!("Copied path: {path}"));
    Ok(())
}
