pub mod browse;
pub mod filter;
pub mod popup;
pub mod quick_mark;
pub mod reorder;
pub mod search;

use crate::model::{app_state::AppState, selection::MarkOutcome};

/// Status line for a single mark toggle, shared by browse and quick-mark.
pub(crate) fn report_mark(state: &mut AppState, outcome: MarkOutcome, name: &str) {
    let count = state.selection.len();
    match outcome {
        MarkOutcome::Marked => state.show_success(format!("Marked {name} ({count} selected)")),
        MarkOutcome::Unmarked => state.show_info(format!("Unmarked {name} ({count} selected)")),
        MarkOutcome::RejectedDirectory => {
            state.show_warning(format!("Cannot mark directory: {name}"));
        }
        MarkOutcome::RejectedNotText => state.show_warning(format!("Not a text file: {name}")),
    }
}
