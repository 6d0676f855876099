//! Blocking alert dialog

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use crate::theme::styles;

const ALERT_WIDTH: u16 = 50;
const ALERT_HEIGHT: u16 = 7;

/// Center a fixed-size rect within an area, clamped to the area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Modal message that must be dismissed before anything else responds
pub struct AlertDialog<'a> {
    message: &'a str,
}

impl<'a> AlertDialog<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog = centered_rect(ALERT_WIDTH, ALERT_HEIGHT, area);
        Clear.render(dialog, buf);

        let block = styles::modal_block(" Alert ");
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        let lines = vec![
            Line::styled(self.message, styles::text_primary()),
            Line::raw(""),
            Line::styled("[Enter] OK", styles::keybinding()),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
