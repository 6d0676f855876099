//! Live output of a job run

use jobdash_app::screen::{JobRunScreen, RunStatus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct RunOutputView<'a> {
    run: &'a JobRunScreen,
}

impl<'a> RunOutputView<'a> {
    pub fn new(run: &'a JobRunScreen) -> Self {
        Self { run }
    }

    fn title(&self) -> Line<'a> {
        let (icon, label, style) = styles::run_indicator(&self.run.status);
        Line::from(vec![
            Span::raw(" "),
            Span::styled(icon, style),
            Span::raw(" "),
            Span::styled(self.run.job_id.as_str(), styles::accent_bold()),
            Span::styled(format!(" {} ", label), style),
        ])
    }

    fn footer(&self) -> Line<'static> {
        let scroll = &self.run.output.scroll;
        let follow = if self.run.following {
            Span::styled(" ⬇ Follow ", styles::status_green())
        } else {
            Span::styled(" ⬆ Paused ", styles::keybinding())
        };
        let position = if scroll.total_lines == 0 {
            "0/0 ".to_string()
        } else {
            let first = scroll.offset + 1;
            let last = (scroll.offset + scroll.visible_lines).min(scroll.total_lines);
            format!("{}-{}/{} ", first, last, scroll.total_lines)
        };
        Line::from(vec![follow, Span::styled(position, styles::text_muted())])
    }
}

impl Widget for RunOutputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(self.title())
            .title_bottom(self.footer().right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if let RunStatus::Failed(reason) = &self.run.status {
            if self.run.output.text().is_empty() {
                Paragraph::new(Line::styled(reason.as_str(), styles::status_red()))
                    .render(inner, buf);
                return;
            }
        }

        let lines: Vec<Line> = self
            .run
            .output
            .lines()
            .skip(self.run.output.scroll.offset)
            .take(inner.height as usize)
            .map(Line::raw)
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
