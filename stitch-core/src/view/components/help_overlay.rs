//! ``src/view/components/help_overlay.rs``
//!
//! Key reference, grouped by mode. Any key closes it.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::view::{theme, ui::centered_rect};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Browse",
        &[
            ("↑↓←→ hjkl", "Move (←→ by column)"),
            ("PgUp/PgDn ^b/^f", "Previous/next page"),
            ("g/G Home/End", "First/last entry"),
            ("Enter", "Open directory or preview file"),
            ("Backspace", "Parent directory"),
            ("m / Space", "Toggle mark and move down"),
            ("u", "Unmark and move up"),
            ("a", "Toggle all visible text files"),
            ("c", "Concatenate marked files"),
            ("y / Y / p", "Copy output / file / path"),
            ("o", "Set output file name"),
            ("q / ^c", "Quit"),
        ],
    ),
    (
        "Modes",
        &[
            ("f / e", "Filter by name / extension (Tab toggles)"),
            ("/  n  N", "Search, next, previous match"),
            ("r", "Reorder marked files"),
            ("v", "Quick-mark by letter"),
        ],
    ),
    (
        "Reorder",
        &[
            ("↑↓ jk", "Select"),
            ("K J  u d  ⇧↑ ⇧↓", "Move selected file up/down"),
            ("r / Esc", "Done"),
        ],
    ),
    (
        "Quick-mark",
        &[
            ("a-z A-Z", "Toggle the file with that letter"),
            ("PgDn → / PgUp ←", "Next/previous page"),
            ("Esc", "Done"),
        ],
    ),
];

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame<'_>, area: Rect) {
        let overlay_area = centered_rect(70, 85, area);
        frame.render_widget(Clear, overlay_area);

        let mut lines: Vec<Line<'_>> = Vec::new();
        for (title, keys) in SECTIONS {
            lines.push(Line::from(Span::styled(
                *title,
                Style::default()
                    .fg(theme::YELLOW)
                    .add_modifier(Modifier::BOLD),
            )));
            for (key, what) in *keys {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {key:<18}"), Style::default().fg(theme::CYAN)),
                    Span::raw(*what),
                ]));
            }
            lines.push(Line::from(""));
        }

        let help = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .title(" Help ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(theme::border_style())
                    .style(theme::base_style()),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(help, overlay_area);
    }
}
