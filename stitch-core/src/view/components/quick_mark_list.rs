//! ``src/view/components/quick_mark_list.rs``
//!
//! Quick-mark view: one page of the snapshot, each file behind its letter.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::{
    model::{app_state::AppState, quick_mark::PAGE_SIZE},
    view::{components::file_grid::truncate, theme},
};

pub struct QuickMarkList;

impl QuickMarkList {
    pub fn render(frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        let Some(quick) = state.quick_mark.as_ref() else {
            return;
        };

        let block = Block::default()
            .title(format!(
                " Quick-mark: page {}/{} ({} files) ",
                quick.page() + 1,
                quick.page_count(),
                quick.len()
            ))
            .borders(Borders::ALL)
            .border_style(theme::border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = usize::from(inner.height).max(1);
        let entries: Vec<_> = quick.page_entries().collect();
        let columns = entries.len().div_ceil(rows).clamp(1, PAGE_SIZE);
        let areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(inner);

        for (col, chunk) in entries.chunks(rows).enumerate() {
            let Some(&col_area) = areas.get(col) else {
                break;
            };
            let max = usize::from(col_area.width).saturating_sub(8);
            let items: Vec<ListItem<'_>> = chunk
                .iter()
                .map(|(letter, entry)| {
                    let marked = state.selection.is_marked(&entry.path);
                    let style = if marked {
                        theme::marked_style()
                    } else {
                        Style::default().fg(theme::FOREGROUND)
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{letter}) "), theme::letter_style()),
                        Span::styled(if marked { "[x] " } else { "    " }, style),
                        Span::styled(truncate(&entry.name, max), style),
                    ]))
                })
                .collect();
            frame.render_widget(List::new(items), col_area);
        }
    }
}
