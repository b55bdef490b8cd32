//! ``src/controller/handlers/filter.rs``
//!
//! Filter mode: the listing is re-filtered on every keystroke.

use crate::{
    controller::{command::FilterCommand, mode_controller::transition},
    error::AppError,
    model::{app_state::AppState, mode::Mode},
};

pub fn handle(state: &mut AppState, cmd: FilterCommand) -> Result<(), AppError> {
    match cmd {
        FilterCommand::Insert(c) => {
            state.filter.push(c);
            refilter(state);
        }
        FilterCommand::Backspace => {
            if state.filter.pop() {
                refilter(state);
            }
        }
        FilterCommand::ToggleKind => {
            state.filter.toggle_kind();
            refilter(state);
        }
        FilterCommand::Commit => {
            transition(state, Mode::Browse)?;
            if state.filter.is_active() {
                let message = format!(
                    "Filter ({}): {}",
                    state.filter.kind().label(),
                    state.filter.query()
                );
                state.show_info(message);
            } else {
                state.show_info("Filter cleared");
            }
        }
        FilterCommand::Cancel => {
            state.filter.reset();
            refilter(state);
            transition(state, Mode::Browse)?;
            state.show_info("Filter cleared");
        }
    }
    Ok(())
}

fn refilter(state: &mut AppState) {
    state.filter_changed();
    state.cursor.reset();
}
