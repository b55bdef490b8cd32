//! ``src/controller/handlers/popup.rs``
//!
//! Help, preview and the output-name prompt. The mode is left untouched.

use tracing::info;

use crate::{
    controller::command::PopupCommand,
    error::AppError,
    model::app_state::{AppState, Popup},
};

pub fn handle(state: &mut AppState, cmd: PopupCommand) -> Result<(), AppError> {
    match (cmd, state.popup.as_mut()) {
        (PopupCommand::Close, _) => state.popup = None,
        (PopupCommand::Insert(c), Some(Popup::OutputPrompt { buffer })) => buffer.push(c),
        (PopupCommand::Backspace, Some(Popup::OutputPrompt { buffer })) => {
            buffer.pop();
        }
        (PopupCommand::Submit, Some(Popup::OutputPrompt { buffer })) => {
            let name = buffer.trim().to_string();
            state.popup = None;
            if name.is_empty() {
                state.show_info("Output name unchanged");
            } else {
                info!(marker = "OUTPUT_NAME", %name, "Output name set");
                state.show_success(format!("Output file set to {name}"));
                state.output_name = Some(name);
            }
        }
        // Text commands only reach an open prompt.
        (_, _) => state.popup = None,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::app_state::test_support::{sample_tree, state_in};

    fn prompt(state: &mut AppState, text: &str) {
        state.popup = Some(Popup::OutputPrompt {
            buffer: String::new(),
        });
        for c in text.chars() {
            handle(state, PopupCommand::Insert(c)).unwrap();
        }
    }

    #[test]
    fn submit_sets_output_name() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());

        prompt(&mut state, "all.txtx");
        handle(&mut state, PopupCommand::Backspace).unwrap();
        handle(&mut state, PopupCommand::Submit).unwrap();

        assert_eq!(state.output_name.as_deref(), Some("all.txt"));
        assert!(state.popup.is_none());
    }

    #[test]
    fn empty_submit_keeps_name() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());
        state.output_name = Some("keep.txt".into());

        prompt(&mut state, "   ");
        handle(&mut state, PopupCommand::Submit).unwrap();

        assert_eq!(state.output_name.as_deref(), Some("keep.txt"));
    }

    #[test]
    fn escape_cancels_prompt() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());

        prompt(&mut state, "x");
        handle(&mut state, PopupCommand::Close).unwrap();

        assert!(state.popup.is_none());
        assert!(state.output_name.is_none());
    }
}
