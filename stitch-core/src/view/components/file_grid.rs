//! ``src/view/components/file_grid.rs``
//!
//! Browse listing laid out column-major over up to four columns. Only the
//! page holding the cursor is drawn.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::{
    fs::listing::Entry,
    model::app_state::AppState,
    view::theme,
};

pub struct FileGrid;

impl FileGrid {
    pub fn render(frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        if state.listing.is_empty() {
            let empty = Paragraph::new("(empty)").style(theme::hint_style());
            frame.render_widget(empty, area);
            return;
        }

        let layout = state.layout();
        let page = state.cursor.page(&layout);
        let (start, end) = layout.page_bounds(page, state.listing.len());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, layout.columns as u32); layout.columns])
            .split(area);

        let hits = state.search.results();
        for (col, chunk) in state.listing[start..end]
            .chunks(layout.rows_per_column)
            .enumerate()
        {
            let Some(&col_area) = columns.get(col) else {
                break;
            };
            let first = start + col * layout.rows_per_column;
            let items: Vec<ListItem<'_>> = chunk
                .iter()
                .enumerate()
                .map(|(row, entry)| {
                    let index = first + row;
                    Self::item(
                        state,
                        entry,
                        index == state.cursor.index(),
                        hits.contains(&index),
                        col_area.width,
                    )
                })
                .collect();
            frame.render_widget(List::new(items), col_area);
        }
    }

    fn item<'a>(
        state: &AppState,
        entry: &'a Entry,
        selected: bool,
        hit: bool,
        width: u16,
    ) -> ListItem<'a> {
        let marked = state.selection.is_marked(&entry.path);
        let marker = if marked { "[x] " } else { "    " };
        let suffix = if entry.is_dir() && !entry.is_parent() { "/" } else { "" };

        let mut style = if marked {
            theme::marked_style()
        } else if entry.is_dir() {
            theme::directory_style()
        } else if hit {
            theme::search_hit_style()
        } else {
            Style::default().fg(theme::FOREGROUND)
        };
        if selected {
            style = style.patch(theme::cursor_style());
        }

        let max = usize::from(width).saturating_sub(marker.len() + suffix.len() + 1);
        let name = truncate(&entry.name, max);
        ListItem::new(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(format!("{name}{suffix}"), style),
        ]))
    }
}

/// Cut `name` to `max` characters, marking the cut with `~`.
pub(crate) fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }
    let mut out: String = name.chars().take(max.saturating_sub(1)).collect();
    out.push('~');
    out
}
