//! Job list table

use jobdash_app::screen::JobListScreen;
use jobdash_core::Job;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{render_load_state, window_start};
use crate::theme::styles;

/// Width of the id column
const ID_WIDTH: usize = 16;

/// All visible jobs, one row each, with the per-row actions in the title
pub struct JobTable<'a> {
    jobs: Vec<&'a Job>,
    screen: &'a JobListScreen,
    focused: bool,
}

impl<'a> JobTable<'a> {
    pub fn new(jobs: &'a [Job], screen: &'a JobListScreen) -> Self {
        Self {
            jobs: screen.visible_jobs(jobs),
            screen,
            focused: !screen.form.editing,
        }
    }

    fn row(&self, index: usize, job: &'a Job) -> Line<'a> {
        let selected = index == self.screen.selected && self.focused;
        let marker = if selected { "▶ " } else { "  " };
        let line = Line::from(vec![
            Span::raw(marker),
            Span::raw(format!("{:<width$}", job.id, width = ID_WIDTH)),
            Span::raw(" "),
            Span::styled(job.cmd.as_str(), styles::text_secondary()),
        ]);
        if selected {
            line.style(styles::focused_selected())
        } else {
            line
        }
    }
}

impl Widget for JobTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Jobs ({}) ", self.jobs.len());
        let block = styles::glass_block(self.focused).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }
        if render_load_state(&self.screen.load, "Loading jobs...", inner, buf) {
            return;
        }
        if self.jobs.is_empty() {
            Paragraph::new(Line::styled(
                "No jobs. Press n to create one.",
                styles::text_muted(),
            ))
            .render(inner, buf);
            return;
        }

        let rows = inner.height as usize;
        let start = window_start(self.screen.selected, rows);
        let lines: Vec<Line> = self
            .jobs
            .iter()
            .enumerate()
            .skip(start)
            .take(rows)
            .map(|(i, job)| self.row(i, *job))
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
