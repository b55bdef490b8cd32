//! ``src/view/components/order_list.rs``
//!
//! Reorder view: the concatenation order as a numbered single column.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::{model::app_state::AppState, view::theme};

pub struct OrderList;

impl OrderList {
    pub fn render(frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        let order = state.selection.order();
        let block = Block::default()
            .title(format!(" Concatenation order ({}) ", order.len()))
            .borders(Borders::ALL)
            .border_style(theme::border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // A resize can shrink the box between key presses.
        let mut view = state.reorder_cursor;
        view.scroll_into_view(usize::from(inner.height));
        let offset = view.scroll_offset();
        let width = order.len().to_string().len();
        let items: Vec<ListItem<'_>> = order
            .iter()
            .enumerate()
            .skip(offset)
            .take(usize::from(inner.height))
            .map(|(i, path)| {
                let name = state.display_name(path);
                let style = if i == state.reorder_cursor.index() {
                    theme::cursor_style().fg(theme::YELLOW)
                } else {
                    Style::default().fg(theme::FOREGROUND)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>width$}. ", i + 1), theme::hint_style()),
                    Span::styled(name, style),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items), inner);
    }
}
