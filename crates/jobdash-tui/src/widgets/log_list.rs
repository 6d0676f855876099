//! Log list table with paging controls

use chrono::{DateTime, Utc};
use jobdash_app::screen::LogListScreen;
use jobdash_core::{LogSummary, PageCursors};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{render_load_state, window_start};
use crate::theme::styles;

pub struct LogTable<'a> {
    logs: &'a [LogSummary],
    screen: &'a LogListScreen,
    cursors: Option<PageCursors>,
}

impl<'a> LogTable<'a> {
    pub fn new(
        logs: &'a [LogSummary],
        screen: &'a LogListScreen,
        cursors: Option<PageCursors>,
    ) -> Self {
        Self {
            logs,
            screen,
            cursors,
        }
    }

    fn title(&self) -> String {
        match &self.screen.query.job {
            Some(job) => format!(" Logs for {} ", job),
            None => " Logs ".to_string(),
        }
    }

    /// Paging controls, absent for an unpaged listing
    fn footer(&self) -> Line<'static> {
        let mut spans = Vec::new();
        if let Some(c) = self.cursors {
            if let Some(prev) = c.previous {
                spans.push(Span::styled(format!(" ‹ {} ", prev), styles::keybinding()));
            }
            spans.push(Span::styled(
                format!(" page {} ", c.current),
                styles::accent_bold(),
            ));
            if let Some(next) = c.next {
                spans.push(Span::styled(format!(" {} › ", next), styles::keybinding()));
            }
        }
        spans.push(Span::styled(
            format!(" {} total ", self.screen.total),
            styles::text_muted(),
        ));
        Line::from(spans)
    }

    fn row(&self, index: usize, log: &'a LogSummary) -> Line<'a> {
        let selected = index == self.screen.selected;
        let (status, status_style) = match log.status {
            Some(0) => ("0".to_string(), styles::status_green()),
            Some(code) => (code.to_string(), styles::status_red()),
            None => ("-".to_string(), styles::text_muted()),
        };
        let line = Line::from(vec![
            Span::raw(if selected { "▶ " } else { "  " }),
            Span::raw(format!("{:<8} ", log.id)),
            Span::styled(format!("{:<16} ", log.name), styles::text_primary()),
            Span::styled(format!("{:<10} ", log.user), styles::text_secondary()),
            Span::styled(
                format!("{:<19} ", format_time(log.start)),
                styles::text_secondary(),
            ),
            Span::styled(
                format!("{:>8} ", format_duration(log)),
                styles::text_muted(),
            ),
            Span::styled(status, status_style),
        ]);
        if selected {
            line.style(styles::focused_selected())
        } else {
            line
        }
    }
}

impl Widget for LogTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(self.title())
            .title_bottom(self.footer().right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }
        if render_load_state(&self.screen.load, "Loading logs...", inner, buf) {
            return;
        }

        let header = Line::styled(
            format!(
                "  {:<8} {:<16} {:<10} {:<19} {:>8} {}",
                "ID", "JOB", "USER", "START", "TIME", "EXIT"
            ),
            Style::default().add_modifier(Modifier::BOLD),
        );
        buf.set_line(inner.x, inner.y, &header, inner.width);

        let body = Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1),
            ..inner
        };
        if self.logs.is_empty() {
            Paragraph::new(Line::styled("No logs", styles::text_muted())).render(body, buf);
            return;
        }

        let rows = body.height as usize;
        let start = window_start(self.screen.selected, rows);
        let lines: Vec<Line> = self
            .logs
            .iter()
            .enumerate()
            .skip(start)
            .take(rows)
            .map(|(i, log)| self.row(i, log))
            .collect();
        Paragraph::new(lines).render(body, buf);
    }
}

fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// `1h02m`, `3m05s` or `42s`; blank while either end is unknown
fn format_duration(log: &LogSummary) -> String {
    let Some(d) = log.duration() else {
        return String::new();
    };
    let secs = d.num_seconds();
    match (secs / 3600, secs % 3600 / 60, secs % 60) {
        (0, 0, s) => format!("{}s", s),
        (0, m, s) => format!("{}m{:02}s", m, s),
        (h, m, _) => format!("{}h{:02}m", h, m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use chrono::TimeZone;
    use jobdash_app::screen::LoadState;
    use jobdash_core::LogQuery;

    fn ready(query: LogQuery, total: usize) -> LogListScreen {
        LogListScreen {
            load: LoadState::Ready,
            total,
            ..LogListScreen::new(query)
        }
    }

    #[test]
    fn test_paging_footer_shows_neighbours() {
        let logs = vec![LogSummary::new("51", "deploy")];
        let screen = ready(LogQuery::at_page(2), 120);
        let cursors = Some(PageCursors::around(2, true));

        let mut term = TestTerminal::with_size(100, 10);
        term.render_widget(LogTable::new(&logs, &screen, cursors), term.area());

        assert!(term.buffer_contains("‹ 1"));
        assert!(term.buffer_contains("page 2"));
        assert!(term.buffer_contains("3 ›"));
        assert!(term.buffer_contains("120 total"));
    }

    #[test]
    fn test_unpaged_listing_has_no_controls() {
        let logs = vec![LogSummary::new("1", "deploy")];
        let screen = ready(LogQuery::new(), 1);

        let mut term = TestTerminal::with_size(100, 10);
        term.render_widget(LogTable::new(&logs, &screen, None), term.area());

        assert!(!term.buffer_contains("page"));
        assert!(term.buffer_contains("1 total"));
    }

    #[test]
    fn test_job_filter_in_title() {
        let screen = ready(LogQuery::for_job("backup"), 0);

        let mut term = TestTerminal::with_size(100, 10);
        term.render_widget(LogTable::new(&[], &screen, None), term.area());

        assert!(term.buffer_contains("Logs for backup"));
        assert!(term.buffer_contains("No logs"));
    }

    #[test]
    fn test_row_columns() {
        let mut log = LogSummary::new("7", "deploy");
        log.user = "ana".into();
        log.start = Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
        log.end = Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 3, 5).unwrap());
        log.status = Some(1);
        let screen = ready(LogQuery::new(), 1);

        let mut term = TestTerminal::with_size(100, 10);
        term.render_widget(LogTable::new(&[log], &screen, None), term.area());

        assert!(term.buffer_contains("2024-03-01 12:00:00"));
        assert!(term.buffer_contains("3m05s"));
        assert!(term.buffer_contains("ana"));
    }

    #[test]
    fn test_format_duration_units() {
        let mut log = LogSummary::new("1", "x");
        assert_eq!(format_duration(&log), "");

        log.start = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        log.end = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 42).unwrap());
        assert_eq!(format_duration(&log), "42s");

        log.end = Some(Utc.with_ymd_and_hms(2024, 1, 1, 1, 2, 0).unwrap());
        assert_eq!(format_duration(&log), "1h02m");
    }
}
