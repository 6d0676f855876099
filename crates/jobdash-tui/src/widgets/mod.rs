//! Custom widget components

mod alert;
mod header;
mod job_form;
mod job_list;
mod log_detail;
mod log_list;
mod run_output;
mod status_bar;

pub use alert::{centered_rect, AlertDialog};
pub use header::MainHeader;
pub use job_form::JobFormView;
pub use job_list::JobTable;
pub use log_detail::LogDetailView;
pub use log_list::LogTable;
pub use run_output::RunOutputView;
pub use status_bar::{key_hints, StatusBar};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use jobdash_app::screen::{LoadState, REQUEST_FAILED};

use crate::theme::styles;

/// Placeholder for a screen whose fetch hasn't produced rows.
/// Returns `true` if it drew something.
fn render_load_state(load: &LoadState, loading: &str, area: Rect, buf: &mut Buffer) -> bool {
    let line = match load {
        LoadState::Loading => Line::styled(loading, styles::text_muted()),
        LoadState::Failed(reason) => {
            let text = if reason.is_empty() {
                REQUEST_FAILED
            } else {
                reason.as_str()
            };
            Line::styled(text.to_string(), styles::status_red())
        }
        LoadState::Ready => return false,
    };
    Paragraph::new(line).render(area, buf);
    true
}

/// First row of a window of `rows` lines that keeps `selected` visible
fn window_start(selected: usize, rows: usize) -> usize {
    if rows == 0 {
        return selected;
    }
    selected.saturating_sub(rows - 1)
}
