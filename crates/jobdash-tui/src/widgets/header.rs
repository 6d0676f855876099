//! Header bar: app title, breadcrumb and the address row

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

/// Main header showing the title, the breadcrumb of the current route and
/// the current path (or the address being edited)
pub struct MainHeader<'a> {
    path: Option<&'a str>,
    breadcrumb: Option<&'a str>,
    address_input: Option<&'a str>,
    server: Option<&'a str>,
}

impl<'a> MainHeader<'a> {
    pub fn new(path: Option<&'a str>) -> Self {
        Self {
            path,
            breadcrumb: None,
            address_input: None,
            server: None,
        }
    }

    pub fn breadcrumb(mut self, breadcrumb: Option<&'a str>) -> Self {
        self.breadcrumb = breadcrumb;
        self
    }

    /// Show the address row in edit mode with `text`
    pub fn address_input(mut self, text: Option<&'a str>) -> Self {
        self.address_input = text;
        self
    }

    pub fn server(mut self, server: &'a str) -> Self {
        self.server = Some(server);
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let editing = self.address_input.is_some();
        let block = styles::glass_block(editing);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Title row
        let mut title = vec![
            Span::raw(" "),
            Span::styled("jobdash", styles::accent_bold()),
        ];
        if let Some(crumb) = self.breadcrumb {
            title.push(Span::styled(" / ", styles::text_muted()));
            title.push(Span::styled(crumb, styles::text_secondary()));
        }
        let title = Line::from(title);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        // Server, right-aligned when it fits
        if let Some(server) = self.server {
            let width = server.width() as u16 + 1;
            let used = title.width() as u16 + 2;
            if used + width <= inner.width {
                let x = inner.x + inner.width - width;
                buf.set_line(
                    x,
                    inner.y,
                    &Line::styled(server, styles::text_muted()),
                    width,
                );
            }
        }

        if inner.height < 2 {
            return;
        }

        // Address row
        let address = match self.address_input {
            Some(text) => Line::from(vec![
                Span::styled(" : ", styles::keybinding()),
                Span::styled(text, styles::text_primary()),
                Span::styled("█", styles::accent()),
            ]),
            None => Line::from(vec![
                Span::styled(" › ", styles::text_muted()),
                Span::styled(self.path.unwrap_or(""), styles::accent()),
            ]),
        };
        buf.set_line(inner.x, inner.y + 1, &address, inner.width);
    }
}
