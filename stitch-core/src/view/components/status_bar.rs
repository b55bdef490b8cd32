//! ``src/view/components/status_bar.rs``
//!
//! The status message line and the mode line beneath it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    model::{app_state::AppState, mode::Mode},
    view::theme,
};

pub struct StatusBar;

impl StatusBar {
    pub fn render_status(frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        let line = Paragraph::new(state.status.message.as_str())
            .style(theme::status_style(state.status.level));
        frame.render_widget(line, area);
    }

    /// Mode badge on the left; filter, search and page info on the right.
    pub fn render_mode_line(frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let mut left = vec![Span::styled(format!(" {} ", state.mode()), theme::mode_style())];
        if state.filter.is_active() {
            left.push(Span::styled(
                format!(
                    "  filter ({}): {}",
                    state.filter.kind().label(),
                    state.filter.query()
                ),
                theme::search_hit_style(),
            ));
        }
        if let Some((at, total)) = state.search.progress() {
            left.push(Span::styled(
                format!("  search '{}': {at}/{total}", state.search.query()),
                theme::search_hit_style(),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(left)), halves[0]);

        let right = match state.mode() {
            Mode::Reorder => format!("{} in order", state.selection.len()),
            Mode::QuickMark => String::new(),
            _ => {
                let layout = state.layout();
                format!(
                    "Page {}/{}  {} items  {} marked",
                    state.cursor.page(&layout) + 1,
                    layout.page_count(state.listing.len()),
                    state.listing.len(),
                    state.selection.len()
                )
            }
        };
        frame.render_widget(
            Paragraph::new(right)
                .style(theme::hint_style())
                .alignment(Alignment::Right),
            halves[1],
        );
    }
}
