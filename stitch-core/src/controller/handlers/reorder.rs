//! ``src/controller/handlers/reorder.rs``
//!
//! Reorder mode: a single-column view of the concatenation order.

use crate::{
    controller::{command::ReorderCommand, mode_controller::transition},
    error::AppError,
    model::{app_state::AppState, mode::Mode, selection::Direction},
};

pub fn handle(state: &mut AppState, cmd: ReorderCommand) -> Result<(), AppError> {
    state.selection.reconcile();
    let count = state.selection.len();

    match cmd {
        ReorderCommand::Up => state.reorder_cursor.move_up(),
        ReorderCommand::Down => state.reorder_cursor.move_down(count),
        ReorderCommand::MoveUp => shift(state, Direction::Up),
        ReorderCommand::MoveDown => shift(state, Direction::Down),
        ReorderCommand::Exit => {
            transition(state, Mode::Browse)?;
            state.show_info(format!("Concatenation order set ({count} files)"));
            return Ok(());
        }
    }

    let visible = state.reorder_rows();
    state.reorder_cursor.clamp(count);
    state.reorder_cursor.scroll_into_view(visible);
    Ok(())
}

fn shift(state: &mut AppState, direction: Direction) {
    let index = state.reorder_cursor.index();
    if let Some(moved) = state.selection.move_in_order(index, direction) {
        state.reorder_cursor.set(moved, state.selection.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::app_state::test_support::{sample_tree, state_in};
    use pretty_assertions::assert_eq;

    fn reorder_state(dir: &std::path::Path) -> AppState {
        let mut state = state_in(dir);
        let candidates = state.text_file_candidates();
        state.selection.mark_all(&candidates);
        transition(&mut state, Mode::Reorder).unwrap();
        state
    }

    fn order(state: &mut AppState) -> Vec<String> {
        state
            .selection
            .materialize_order()
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn move_down_then_up_restores_order() {
        let dir = sample_tree();
        let mut state = reorder_state(dir.path());

        handle(&mut state, ReorderCommand::MoveDown).unwrap();
        assert_eq!(order(&mut state), vec!["b.txt", "a.txt"]);
        assert_eq!(state.reorder_cursor.index(), 1);

        handle(&mut state, ReorderCommand::MoveUp).unwrap();
        assert_eq!(order(&mut state), vec!["a.txt", "b.txt"]);
        assert_eq!(state.reorder_cursor.index(), 0);
    }

    #[test]
    fn moves_at_ends_do_nothing() {
        let dir = sample_tree();
        let mut state = reorder_state(dir.path());

        handle(&mut state, ReorderCommand::MoveUp).unwrap();
        handle(&mut state, ReorderCommand::Down).unwrap();
        handle(&mut state, ReorderCommand::Down).unwrap();
        handle(&mut state, ReorderCommand::MoveDown).unwrap();

        assert_eq!(order(&mut state), vec!["a.txt", "b.txt"]);
        assert_eq!(state.reorder_cursor.index(), 1);
    }

    #[test]
    fn exit_returns_to_browse() {
        let dir = sample_tree();
        let mut state = reorder_state(dir.path());

        handle(&mut state, ReorderCommand::Exit).unwrap();

        assert_eq!(state.mode(), Mode::Browse);
    }

    #[test]
    fn scrolling_keeps_cursor_inside_the_box() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..20 {
            std::fs::write(dir.path().join(format!("f{i:02}.txt")), "x").unwrap();
        }
        let mut state = reorder_state(dir.path());
        // 24 rows: 17 for the body, 15 inside the border.
        assert_eq!(state.reorder_rows(), 15);

        for _ in 0..16 {
            handle(&mut state, ReorderCommand::Down).unwrap();
        }

        assert_eq!(state.reorder_cursor.index(), 16);
        assert_eq!(state.reorder_cursor.scroll_offset(), 2);
    }
}
