//! ``src/controller/handlers/quick_mark.rs``
//!
//! Quick-mark mode: one letter toggles one file of the snapshot.

use crate::{
    controller::{command::QuickMarkCommand, handlers::report_mark, mode_controller::transition},
    error::AppError,
    model::{app_state::AppState, mode::Mode},
};

pub fn handle(state: &mut AppState, cmd: QuickMarkCommand) -> Result<(), AppError> {
    let Some(quick) = state.quick_mark.as_mut() else {
        // Snapshot already dropped; the controller settles back to Browse.
        return Ok(());
    };

    match cmd {
        QuickMarkCommand::Toggle(letter) => {
            let Some(entry) = quick.resolve(letter).cloned() else {
                return Ok(());
            };
            let probe = state.probe;
            let outcome = state.selection.toggle_mark(
                &entry.path,
                &entry.name,
                entry.is_dir(),
                |p| probe.is_text(p),
            );
            report_mark(state, outcome, &entry.name);
        }
        QuickMarkCommand::NextPage => {
            quick.next_page();
        }
        QuickMarkCommand::PreviousPage => {
            quick.prev_page();
        }
        QuickMarkCommand::Exit => {
            state.quick_mark = None;
            transition(state, Mode::Browse)?;
        }
    }
    Ok(())
}
