//! ``src/controller/handlers/search.rs``
//!
//! Search mode: type a query, Enter runs it against the current listing.

use tracing::debug;

use crate::{
    controller::{command::SearchCommand, mode_controller::transition},
    error::AppError,
    model::{app_state::AppState, mode::Mode},
};

pub fn handle(state: &mut AppState, cmd: SearchCommand) -> Result<(), AppError> {
    match cmd {
        SearchCommand::Insert(c) => state.search.push(c),
        SearchCommand::Backspace => state.search.pop(),
        SearchCommand::Commit => {
            transition(state, Mode::Browse)?;
            let hit = state.search.commit(&state.listing);
            let query = state.search.query().to_string();
            debug!(%query, hits = state.search.results().len(), "Search committed");

            match hit {
                Some(index) => {
                    state.cursor.set(index, state.listing.len());
                    let total = state.search.results().len();
                    state.show_info(format!("Match 1 of {total} for '{query}'"));
                }
                None if query.is_empty() => state.show_info("Search cleared"),
                None => state.show_warning(format!("Not found: {query}")),
            }
        }
        SearchCommand::Cancel => {
            state.search.discard_draft();
            transition(state, Mode::Browse)?;
        }
    }
    Ok(())
}
