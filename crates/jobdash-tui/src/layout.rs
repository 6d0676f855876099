//! Screen layout for the TUI
//!
//! Header on top, the mounted screen in the middle and a one-row status bar
//! at the bottom. The job list additionally splits its body into the table
//! and the job form.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: border + title row + address row + border
pub const HEADER_HEIGHT: u16 = 4;

/// Status bar: top border + hints row
pub const STATUS_HEIGHT: u16 = 2;

/// Job form: border + command row + error row + status row + border
pub const FORM_HEIGHT: u16 = 5;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Mounted screen
    pub body: Rect,
    pub status: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Split the job list body into `(table, form)`
pub fn split_job_list(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(FORM_HEIGHT)]).split(body);
    (chunks[0], chunks[1])
}

/// Rows of text visible inside a bordered block
pub fn inner_rows(area: Rect) -> usize {
    area.height.saturating_sub(2) as usize
}
