//! ``src/view/components/preview_overlay.rs``

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::view::{theme, ui::centered_rect};

/// Leading bytes of a text file in a centered box.
pub struct PreviewOverlay;

impl PreviewOverlay {
    pub fn render(frame: &mut Frame<'_>, title: &str, body: &str, area: Rect) {
        let overlay_area = centered_rect(80, 80, area);
        frame.render_widget(Clear, overlay_area);

        let preview = Paragraph::new(body)
            .block(
                Block::default()
                    .title(format!(" {title} "))
                    .title_bottom(" any key to close ")
                    .borders(Borders::ALL)
                    .border_style(theme::border_style())
                    .style(theme::base_style()),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(preview, overlay_area);
    }
}
