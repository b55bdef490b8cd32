//! ``src/controller/mode_controller.rs``
//! ============================================================================
//! # ModeController: routes decoded commands to the active mode's handler
//!
//! Owns mode changes. Handlers ask for a transition through [`transition`],
//! which refuses anything but Browse ⇄ overlay. Handler errors never escape
//! [`ModeController::handle_key`]: they become an error status line.

use clipr::ClipboardSink;
use crossterm::event::KeyEvent;
use tracing::{debug, trace, warn};

use crate::{
    controller::{
        command::{Command, InputContext, Keymap},
        handlers::{browse, filter, popup, quick_mark, reorder, search},
    },
    error::AppError,
    model::{app_state::AppState, mode::Mode},
};

#[derive(Debug, Default)]
pub struct ModeController {
    keymap: Keymap,
}

impl ModeController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            keymap: Keymap::new(),
        }
    }

    /// Decode and apply one key press.
    pub fn handle_key(
        &self,
        state: &mut AppState,
        event: KeyEvent,
        clipboard: &mut dyn ClipboardSink,
    ) {
        let ctx = InputContext::of(state);
        let Some(command) = self.keymap.decode(ctx, event) else {
            trace!(?ctx, code = ?event.code, "Unbound key");
            return;
        };

        if let Err(e) = Self::dispatch(state, command, clipboard) {
            warn!(marker = "COMMAND_FAILED", ?command, error = %e, "Command failed");
            state.show_error(e.status_text());
        }
    }

    /// Apply one decoded command.
    pub fn dispatch(
        state: &mut AppState,
        command: Command,
        clipboard: &mut dyn ClipboardSink,
    ) -> Result<(), AppError> {
        debug!(marker = "COMMAND", ?command, mode = %state.mode(), "Dispatching");

        let result = match command {
            Command::Quit => {
                state.quit = true;
                Ok(())
            }
            Command::Popup(cmd) => popup::handle(state, cmd),
            Command::Browse(cmd) => browse::handle(state, cmd, clipboard),
            Command::Filter(cmd) => filter::handle(state, cmd),
            Command::Search(cmd) => search::handle(state, cmd),
            Command::Reorder(cmd) => reorder::handle(state, cmd),
            Command::QuickMark(cmd) => quick_mark::handle(state, cmd),
        };

        settle(state);
        result
    }
}

/// Move to `to`, or fail if the state machine has no such edge.
pub fn transition(state: &mut AppState, to: Mode) -> Result<(), AppError> {
    let from = state.mode();
    if !from.allows_transition(to) {
        return Err(AppError::InvalidTransition { from, to });
    }
    debug!(marker = "MODE_TRANSITION", %from, %to, "Mode transition");
    state.set_mode(to);
    Ok(())
}

/// Quick-mark cannot outlive its snapshot (dropped on directory change).
fn settle(state: &mut AppState) {
    if state.mode() == Mode::QuickMark && state.quick_mark.is_none() {
        debug!(marker = "MODE_TRANSITION", "Quick-mark snapshot gone, back to browse");
        state.set_mode(Mode::Browse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        controller::keys::{
            arrow_key, backspace_key, ctrl, enter_key, escape_key, key, shift_key,
        },
        model::app_state::test_support::{index_of, sample_tree, state_in},
    };
    use clipr::MemoryClipboard;
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;
    use std::{fs, path::PathBuf};

    fn press(state: &mut AppState, keys: &[KeyEvent]) -> MemoryClipboard {
        let controller = ModeController::new();
        let mut clipboard = MemoryClipboard::new();
        for &event in keys {
            controller.handle_key(state, event, &mut clipboard);
        }
        clipboard
    }

    fn order_names(state: &mut AppState) -> Vec<String> {
        state
            .selection
            .materialize_order()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn transition_rejects_overlay_to_overlay() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());

        transition(&mut state, Mode::Search).unwrap();
        let err = transition(&mut state, Mode::Filter).unwrap_err();

        assert!(matches!(
            err,
            AppError::InvalidTransition {
                from: Mode::Search,
                to: Mode::Filter
            }
        ));
        assert_eq!(state.mode(), Mode::Search);
    }

    #[test]
    fn reorder_then_concatenate_writes_reordered_output() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());
        state.output_name = Some("out.txt".into());
        let a = index_of(&state, "a.txt");
        state.cursor.set(a, state.listing.len());

        // mark a.txt, b.txt; reorder b above a; back to browse; concatenate
        press(
            &mut state,
            &[key('m'), key('m'), key('r'), key('j'), key('K'), key('r'), key('c')],
        );

        assert_eq!(state.mode(), Mode::Browse);
        assert_eq!(order_names(&mut state), vec!["b.txt", "a.txt"]);
        let out = fs::read_to_string(dir.path().join("out.txt")).unwrap();
        let b_at = out.find("FILE: b.txt").unwrap();
        let a_at = out.find("FILE: a.txt").unwrap();
        assert!(b_at < a_at);
        assert!(out.contains("bravo"));
    }

    #[test]
    fn reorder_refused_with_nothing_marked() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());

        press(&mut state, &[key('r')]);

        assert_eq!(state.mode(), Mode::Browse);
        assert_eq!(state.status.message, "No files marked");
    }

    #[test]
    fn filter_cancel_clears_and_commit_keeps() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());

        press(&mut state, &[key('f'), key('a'), key('.'), escape_key()]);
        assert_eq!(state.mode(), Mode::Browse);
        assert_eq!(state.filter.query(), "");

        press(&mut state, &[key('f'), key('b'), enter_key()]);
        assert_eq!(state.mode(), Mode::Browse);
        assert_eq!(state.filter.query(), "b");
        let names: Vec<_> = state.listing.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["..", "sub", "b.txt", "data.bin"]);
    }

    #[test]
    fn search_commit_jumps_and_n_wraps() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());

        press(&mut state, &[key('/'), key('T'), key('X'), key('T'), enter_key()]);
        assert_eq!(state.mode(), Mode::Browse);
        assert_eq!(state.cursor.index(), index_of(&state, "a.txt"));

        press(&mut state, &[key('n')]);
        assert_eq!(state.cursor.index(), index_of(&state, "b.txt"));
        press(&mut state, &[key('n')]);
        assert_eq!(state.cursor.index(), index_of(&state, "a.txt"));
    }

    #[test]
    fn search_miss_leaves_cursor() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());
        state.cursor.set(2, state.listing.len());

        press(&mut state, &[key('/'), key('z'), enter_key()]);

        assert_eq!(state.cursor.index(), 2);
        assert!(state.status.message.contains("Not found"));
    }

    #[test]
    fn quick_mark_toggles_by_letter_and_escapes() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());

        press(&mut state, &[key('v')]);
        assert_eq!(state.mode(), Mode::QuickMark);

        press(&mut state, &[key('b'), key('z'), escape_key()]);
        assert_eq!(state.mode(), Mode::Browse);
        assert!(state.quick_mark.is_none());
        assert_eq!(order_names(&mut state), vec!["b.txt"]);
    }

    #[test]
    fn quick_mark_refused_without_text_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blob"), [0u8; 8]).unwrap();
        let mut state = state_in(dir.path());

        press(&mut state, &[key('v')]);

        assert_eq!(state.mode(), Mode::Browse);
        assert!(state.status.message.contains("No text files"));
    }

    #[test]
    fn directory_change_ends_quick_mark() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());
        press(&mut state, &[key('v')]);

        state.change_directory(dir.path().join("sub"));
        press(&mut state, &[arrow_key(KeyCode::PageDown)]);

        assert_eq!(state.mode(), Mode::Browse);
    }

    #[test]
    fn enter_and_backspace_navigate() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());
        let sub = index_of(&state, "sub");
        state.cursor.set(sub, state.listing.len());

        press(&mut state, &[enter_key()]);
        assert_eq!(state.cwd, dir.path().join("sub"));
        assert_eq!(state.cursor.index(), 0);

        press(&mut state, &[backspace_key()]);
        assert_eq!(state.cwd, PathBuf::from(dir.path()));
    }

    #[test]
    fn clipboard_receives_concatenation_and_path() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());
        let a = index_of(&state, "a.txt");
        state.cursor.set(a, state.listing.len());

        let clipboard = press(&mut state, &[key('m'), key('y')]);
        let text = clipboard.content.unwrap();
        assert!(text.contains("FILE: a.txt"));
        assert!(text.contains("alpha"));

        state.cursor.set(a, state.listing.len());
        let clipboard = press(&mut state, &[key('p')]);
        let expected = dir.path().join("a.txt").to_string_lossy().into_owned();
        assert_eq!(clipboard.content, Some(expected));
    }

    #[test]
    fn clipboard_failure_is_a_status_not_a_crash() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());
        let a = index_of(&state, "a.txt");
        state.cursor.set(a, state.listing.len());
        let controller = ModeController::new();
        let mut clipboard = MemoryClipboard::unavailable();

        controller.handle_key(&mut state, key('p'), &mut clipboard);

        assert!(state.status.message.starts_with("Failed to copy to clipboard"));
        assert!(!state.quit);
    }

    #[test]
    fn ctrl_c_quits_from_overlay() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());

        press(&mut state, &[key('/'), ctrl('c')]);
        assert!(state.quit);
    }

    #[test]
    fn shift_arrow_moves_in_reorder() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());
        press(&mut state, &[key('a'), key('r'), key('j'), shift_key(KeyCode::Up)]);

        assert_eq!(order_names(&mut state), vec!["b.txt", "a.txt"]);
        assert_eq!(state.reorder_cursor.index(), 0);
    }
}
