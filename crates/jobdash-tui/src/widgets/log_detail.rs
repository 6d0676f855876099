//! Body of a single log, shown verbatim

use jobdash_app::screen::LogDetailScreen;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::render_load_state;
use crate::theme::styles;

pub struct LogDetailView<'a> {
    screen: &'a LogDetailScreen,
}

impl<'a> LogDetailView<'a> {
    pub fn new(screen: &'a LogDetailScreen) -> Self {
        Self { screen }
    }
}

impl Widget for LogDetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let scroll = &self.screen.scroll;
        let position = format!(
            " {}/{} ",
            (scroll.offset + scroll.visible_lines).min(scroll.total_lines),
            scroll.total_lines
        );
        let block = styles::glass_block(true)
            .title(format!(" Log {} ", self.screen.log_id))
            .title_bottom(Line::styled(position, styles::text_muted()).right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }
        if render_load_state(&self.screen.load, "Loading log...", inner, buf) {
            return;
        }

        // An empty body renders as an empty view
        let Some(body) = &self.screen.body else {
            return;
        };
        let lines: Vec<Line> = body
            .body
            .lines()
            .skip(scroll.offset)
            .take(inner.height as usize)
            .map(Line::raw)
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
