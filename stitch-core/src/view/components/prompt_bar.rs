//! ``src/view/components/prompt_bar.rs``
//! ============================================================================
//! # `PromptBar`: single-line text input
//!
//! Filter and search type into the bottom line; the output-name prompt is a
//! small centered box.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    model::{app_state::AppState, mode::Mode},
    view::{theme, ui::centered_rect},
};

pub struct PromptBar;

impl PromptBar {
    /// `Some` while the active mode is capturing text.
    pub fn input_line(state: &AppState) -> Option<Line<'static>> {
        let (label, text, hint) = match state.mode() {
            Mode::Filter => (
                format!("Filter ({}): ", state.filter.kind().label()),
                state.filter.query().to_string(),
                "  [Enter keep, Esc clear, Tab name/extension]",
            ),
            Mode::Search => (
                "Search: ".to_string(),
                state.search.draft().to_string(),
                "  [Enter search, Esc cancel]",
            ),
            _ => return None,
        };
        Some(Line::from(vec![
            Span::styled(label, theme::header_style()),
            Span::styled(format!("{text}_"), theme::base_style()),
            Span::styled(hint, theme::hint_style()),
        ]))
    }

    pub fn render_output_prompt(
        frame: &mut Frame<'_>,
        buffer: &str,
        current: Option<&str>,
        area: Rect,
    ) {
        let overlay_area = centered_rect(50, 20, area);
        frame.render_widget(Clear, overlay_area);

        let placeholder = current.unwrap_or("timestamped name");
        let prompt = Paragraph::new(vec![
            Line::from(Span::styled(format!("{buffer}_"), theme::base_style())),
            Line::from(Span::styled(
                format!("current: {placeholder}  (empty keeps it)"),
                theme::hint_style(),
            )),
        ])
        .block(
            Block::default()
                .title(" Output file name ")
                .title_alignment(Alignment::Left)
                .borders(Borders::ALL)
                .border_style(theme::border_style())
                .style(theme::base_style()),
        );
        frame.render_widget(prompt, overlay_area);
    }
}
