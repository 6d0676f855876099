//! Screen states
//!
//! Exactly one [`Screen`] is mounted at a time in [`AppState::screen`]. Each
//! mount gets a fresh [`ScreenId`]; background fetches carry the id of the
//! screen that started them so late replies can be recognised and dropped.
//!
//! [`AppState::screen`]: crate::state::AppState::screen

use std::collections::HashSet;
use std::fmt;

use jobdash_core::{Job, LogBody, LogQuery};

use crate::form::JobForm;

/// Status text for any transport failure
pub const REQUEST_FAILED: &str = "request failed";

/// Identity of one screen mount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(u64);

impl ScreenId {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Progress of a screen's initial fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scrolling
// ─────────────────────────────────────────────────────────────────────────────

/// Vertical scroll position over a block of text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// First visible line
    pub offset: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl ScrollState {
    pub fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// Record the viewport height, keeping the offset in range
    pub fn set_visible_lines(&mut self, visible: usize) {
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Screens
// ─────────────────────────────────────────────────────────────────────────────

/// The single render target
#[derive(Debug, Clone, Default)]
pub enum Screen {
    /// Before the first navigation
    #[default]
    Blank,
    JobList(JobListScreen),
    JobRun(JobRunScreen),
    LogList(LogListScreen),
    LogDetail(LogDetailScreen),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Blank => "blank",
            Screen::JobList(_) => "job list",
            Screen::JobRun(_) => "job run",
            Screen::LogList(_) => "log list",
            Screen::LogDetail(_) => "log detail",
        }
    }

    pub fn is_job_run(&self) -> bool {
        matches!(self, Screen::JobRun(_))
    }
}

/// All jobs, with the job form underneath
#[derive(Debug, Clone, Default)]
pub struct JobListScreen {
    pub load: LoadState,
    /// Index into the visible rows
    pub selected: usize,
    /// Rows removed by a successful delete, until the next fetch
    pub hidden: HashSet<String>,
    pub form: JobForm,
}

impl JobListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows to display: the cached jobs minus deleted ones
    pub fn visible_jobs<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        jobs.iter()
            .filter(|job| !self.hidden.contains(&job.id))
            .collect()
    }

    pub fn selected_job<'a>(&self, jobs: &'a [Job]) -> Option<&'a Job> {
        self.visible_jobs(jobs).get(self.selected).copied()
    }
}

/// Lifecycle of a run's output stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RunStatus {
    #[default]
    Connecting,
    Streaming,
    Finished,
    Failed(String),
}

/// Text streamed from a job run
#[derive(Debug, Clone, Default)]
pub struct RunOutput {
    text: String,
    /// Completed lines so far
    newlines: usize,
    pub scroll: ScrollState,
}

impl RunOutput {
    /// Append a chunk; it may start or end in the middle of a line
    pub fn push(&mut self, chunk: &str) {
        self.newlines += chunk.bytes().filter(|b| *b == b'\n').count();
        self.text.push_str(chunk);
        let open_line = !self.text.is_empty() && !self.text.ends_with('\n');
        self.scroll.total_lines = self.newlines + usize::from(open_line);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// Move the view down by `step` lines, stopping at the last line
    pub fn advance(&mut self, step: usize) {
        self.scroll.scroll_down(step);
    }
}

/// Live output of one job run
#[derive(Debug, Clone)]
pub struct JobRunScreen {
    pub job_id: String,
    pub status: RunStatus,
    pub output: RunOutput,
    /// Whether the view keeps scrolling to new output
    pub following: bool,
}

impl JobRunScreen {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            status: RunStatus::Connecting,
            output: RunOutput::default(),
            following: true,
        }
    }
}

/// One page of log summaries
#[derive(Debug, Clone, Default)]
pub struct LogListScreen {
    pub query: LogQuery,
    pub load: LoadState,
    pub selected: usize,
    /// Total matching logs reported by the backend
    pub total: usize,
}

impl LogListScreen {
    pub fn new(query: LogQuery) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }
}

/// Output of a single log
#[derive(Debug, Clone)]
pub struct LogDetailScreen {
    pub log_id: String,
    pub load: LoadState,
    pub body: Option<LogBody>,
    pub scroll: ScrollState,
}

impl LogDetailScreen {
    pub fn new(log_id: impl Into<String>) -> Self {
        Self {
            log_id: log_id.into(),
            load: LoadState::Loading,
            body: None,
            scroll: ScrollState::default(),
        }
    }

    pub fn set_body(&mut self, body: LogBody) {
        self.scroll = ScrollState {
            total_lines: body.body.lines().count(),
            ..ScrollState::default()
        };
        self.body = Some(body);
        self.load = LoadState::Ready;
    }
}
