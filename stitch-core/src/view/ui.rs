//! src/view/ui.rs
//! ============================================================
//! Frame renderer. Draws the whole screen from `&AppState`; it never mutates
//! state, so everything it shows was settled by the controller beforehand.
//!
//! ```text
//! header      cwd, marked count
//! rule
//! body        grid | reorder list | quick-mark list
//! status      last message
//! mode line   mode, filter, search, page
//! rule
//! footer      output destination
//! help line   key hints or the text being typed
//! ```

use ratatui::{
    prelude::*,
    widgets::Paragraph,
};
use tracing::trace;

use crate::{
    model::{
        app_state::{AppState, Popup},
        mode::Mode,
    },
    view::{
        components::{
            file_grid::FileGrid, help_overlay::HelpOverlay, order_list::OrderList,
            preview_overlay::PreviewOverlay, prompt_bar::PromptBar,
            quick_mark_list::QuickMarkList, status_bar::StatusBar,
        },
        theme,
    },
};

#[derive(Debug, Default)]
pub struct UIRenderer {
    frames: u64,
}

impl UIRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, f: &mut Frame<'_>, state: &AppState) {
        let area = f.area();
        f.render_widget(Paragraph::new("").style(theme::base_style()), area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(1), // rule
                Constraint::Min(1),    // body
                Constraint::Length(1), // status
                Constraint::Length(1), // mode line
                Constraint::Length(1), // rule
                Constraint::Length(1), // footer
                Constraint::Length(1), // help line
            ])
            .split(area);

        Self::draw_header(f, state, rows[0]);
        Self::draw_rule(f, rows[1]);
        Self::draw_body(f, state, rows[2]);
        StatusBar::render_status(f, state, rows[3]);
        StatusBar::render_mode_line(f, state, rows[4]);
        Self::draw_rule(f, rows[5]);
        Self::draw_footer(f, state, rows[6]);
        Self::draw_help_line(f, state, rows[7]);
        Self::draw_popup(f, state, area);

        self.frames += 1;
        trace!(frame = self.frames, mode = %state.mode(), "Frame rendered");
    }

    fn draw_header(f: &mut Frame<'_>, state: &AppState, area: Rect) {
        let header = Line::from(vec![
            Span::styled(" stitch ", theme::mode_style()),
            Span::raw(" "),
            Span::styled(state.cwd.display().to_string(), theme::header_style()),
            Span::styled(
                format!("   {} marked", state.selection.len()),
                theme::marked_style(),
            ),
        ]);
        f.render_widget(Paragraph::new(header), area);
    }

    fn draw_rule(f: &mut Frame<'_>, area: Rect) {
        let rule = "─".repeat(usize::from(area.width));
        f.render_widget(Paragraph::new(rule).style(theme::rule_style()), area);
    }

    fn draw_body(f: &mut Frame<'_>, state: &AppState, area: Rect) {
        match state.mode() {
            Mode::Reorder => OrderList::render(f, state, area),
            Mode::QuickMark => QuickMarkList::render(f, state, area),
            Mode::Browse | Mode::Filter | Mode::Search => FileGrid::render(f, state, area),
        }
    }

    fn draw_footer(f: &mut Frame<'_>, state: &AppState, area: Rect) {
        let target = match state.output_name.as_deref() {
            Some(name) => name.to_string(),
            None => format!("{}_<timestamp>.txt", state.config.output_prefix),
        };
        let footer = Line::from(vec![
            Span::styled("Output: ", theme::hint_style()),
            Span::styled(target, Style::default().fg(theme::FOREGROUND)),
        ]);
        f.render_widget(Paragraph::new(footer), area);
    }

    fn draw_help_line(f: &mut Frame<'_>, state: &AppState, area: Rect) {
        if let Some(input) = PromptBar::input_line(state) {
            f.render_widget(Paragraph::new(input), area);
            return;
        }
        let hints = match state.mode() {
            Mode::Reorder => "↑↓ select  K/J move  r/Esc done  q quit",
            Mode::QuickMark => "a-z A-Z toggle  PgUp/PgDn page  Esc done",
            _ => "m mark  a all  f/e filter  / search  r reorder  v quick  c concat  y copy  ? help  q quit",
        };
        f.render_widget(Paragraph::new(hints).style(theme::hint_style()), area);
    }

    fn draw_popup(f: &mut Frame<'_>, state: &AppState, area: Rect) {
        match &state.popup {
            Some(Popup::Help) => HelpOverlay::render(f, area),
            Some(Popup::Preview { title, body }) => PreviewOverlay::render(f, title, body, area),
            Some(Popup::OutputPrompt { buffer }) => {
                PromptBar::render_output_prompt(f, buffer, state.output_name.as_deref(), area);
            }
            None => {}
        }
    }
}

/// A `percent_x` by `percent_y` rectangle centered in `area`.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        app_state::test_support::{index_of, sample_tree, state_in},
        cursor::Viewport,
    };
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(state: &mut AppState, width: u16, height: u16) -> String {
        state.viewport = Viewport {
            rows: height,
            cols: width,
        };
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut renderer = UIRenderer::new();
        terminal.draw(|f| renderer.render(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn browse_screen_shows_listing_and_marks() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());
        let a = index_of(&state, "a.txt");
        let probe = state.probe;
        let entry = state.listing[a].clone();
        state
            .selection
            .toggle_mark(&entry.path, &entry.name, false, |p| probe.is_text(p));

        let screen = draw(&mut state, 100, 20);

        assert!(screen.contains("sub/"));
        assert!(screen.contains("[x] a.txt"));
        assert!(screen.contains("BROWSE"));
        assert!(screen.contains("1 marked"));
    }

    #[test]
    fn reorder_screen_lists_order() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());
        let candidates = state.text_file_candidates();
        state.selection.mark_all(&candidates);
        crate::controller::mode_controller::transition(&mut state, Mode::Reorder).unwrap();

        let screen = draw(&mut state, 80, 16);

        assert!(screen.contains("1. a.txt"));
        assert!(screen.contains("2. b.txt"));
        assert!(screen.contains("REORDER"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let dir = sample_tree();
        let mut state = state_in(dir.path());
        state.popup = Some(Popup::Help);

        draw(&mut state, 10, 4);
    }

    fn reorder_twenty(dir: &std::path::Path) -> AppState {
        for i in 0..20 {
            std::fs::write(dir.join(format!("f{i:02}.txt")), "x").unwrap();
        }
        let mut state = state_in(dir);
        let candidates = state.text_file_candidates();
        state.selection.mark_all(&candidates);
        crate::controller::mode_controller::transition(&mut state, Mode::Reorder).unwrap();
        state
    }

    #[test]
    fn reorder_cursor_stays_on_screen_past_the_fold() {
        use crate::controller::{command::ReorderCommand, handlers::reorder};

        let dir = tempfile::tempdir().unwrap();
        let mut state = reorder_twenty(dir.path());
        state.viewport = Viewport { rows: 24, cols: 80 };
        for _ in 0..16 {
            reorder::handle(&mut state, ReorderCommand::Down).unwrap();
        }

        let screen = draw(&mut state, 80, 24);
        assert!(screen.contains("17. f16.txt"));
        assert!(!screen.contains("f00.txt"));

        // Shrinking the terminal must not push the cursor row out of the box.
        let screen = draw(&mut state, 80, 14);
        assert!(screen.contains("17. f16.txt"));
    }

    #[test]
    fn empty_listing_renders() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir.path().join("missing"));

        let screen = draw(&mut state, 80, 12);

        assert!(state.listing.is_empty());
        assert_eq!(state.cursor.index(), 0);
        assert!(screen.contains("(empty)"));
        assert!(screen.contains("Error listing directory"));
    }
}
