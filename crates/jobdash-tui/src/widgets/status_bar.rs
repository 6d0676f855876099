//! Status bar: key hints for the current mode and the latest notice

use jobdash_app::{AppState, Screen, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// `(key, action)` pairs shown in the status bar
pub fn key_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    match state.ui_mode() {
        UiMode::Alert => return vec![("Enter", "dismiss")],
        UiMode::AddressInput => return vec![("Enter", "go"), ("Esc", "cancel")],
        UiMode::FormInput => return vec![("Enter", "save"), ("Esc", "cancel")],
        UiMode::Normal => {}
    }

    let mut hints = match &state.screen {
        Screen::JobList(_) => vec![
            ("Enter", "run"),
            ("d", "delete"),
            ("n", "new"),
            ("e", "edit"),
            ("L", "logs"),
        ],
        Screen::LogList(list) => {
            let mut hints = vec![("Enter", "view")];
            match state.log_cursors() {
                Some(c) => {
                    if c.previous.is_some() {
                        hints.push(("p", "prev page"));
                    }
                    if c.next.is_some() {
                        hints.push(("n", "next page"));
                    }
                }
                None if list.query.job.is_none() => hints.push(("n", "paged")),
                None => {}
            }
            hints
        }
        Screen::JobRun(run) => vec![
            ("f", if run.following { "pause" } else { "follow" }),
            ("↑↓", "scroll"),
        ],
        Screen::LogDetail(_) => vec![("↑↓", "scroll"), ("Esc", "back")],
        Screen::Blank => Vec::new(),
    };
    hints.extend([("j", "jobs"), ("l", "logs"), (":", "go to"), ("q", "quit")]);
    hints
}

/// Status bar widget
pub struct StatusBar<'a> {
    hints: Vec<(&'static str, &'static str)>,
    notice: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            hints: key_hints(state),
            notice: state.notice.as_deref(),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette::BORDER_DIM));

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("[{}]", key), styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        if let Some(notice) = self.notice {
            spans.push(Span::styled(" │ ", styles::text_muted()));
            spans.push(Span::styled(notice, styles::text_primary()));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
