//! Application state (Model in TEA pattern)

use jobdash_core::prelude::*;
use jobdash_core::{Job, LogSummary, PageCursors};

use crate::collection::Collection;
use crate::config::Settings;
use crate::router::{Route, Router};
use crate::screen::{
    JobListScreen, JobRunScreen, LoadState, LogDetailScreen, LogListScreen, Screen, ScreenId,
};

/// Which key handler receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Screen shortcuts
    Normal,
    /// Typing into the address bar
    AddressInput,
    /// Typing into the job form
    FormInput,
    /// A blocking alert awaits dismissal
    Alert,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub router: Router,

    /// Last fetched jobs
    pub jobs: Collection<Job>,

    /// Last fetched page of logs
    pub logs: Collection<LogSummary>,

    /// The mounted screen
    pub screen: Screen,

    /// Id of the mounted screen
    pub screen_id: ScreenId,

    /// Blocking message shown over everything else
    pub alert: Option<String>,

    /// Address bar text while editing
    pub address_input: Option<String>,

    /// One-line notice in the status bar, cleared on the next mount
    pub notice: Option<String>,

    pub settings: Settings,

    quitting: bool,
}

impl AppState {
    pub fn new() -> Result<Self> {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Result<Self> {
        Ok(Self {
            router: Router::with_default_routes()?,
            jobs: Collection::new(),
            logs: Collection::new(),
            screen: Screen::Blank,
            screen_id: ScreenId::default(),
            alert: None,
            address_input: None,
            notice: None,
            settings,
            quitting: false,
        })
    }

    /// Replace the mounted screen, returning the new screen's id
    pub fn mount(&mut self, screen: Screen) -> ScreenId {
        self.screen_id = self.screen_id.next();
        debug!("Mounting {} screen {}", screen.name(), self.screen_id);
        self.screen = screen;
        self.notice = None;
        self.screen_id
    }

    /// Whether `id` is the mounted screen
    pub fn is_current(&self, id: ScreenId) -> bool {
        self.screen_id == id
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.alert.is_some() {
            UiMode::Alert
        } else if self.address_input.is_some() {
            UiMode::AddressInput
        } else if self.job_list().is_some_and(|s| s.form.editing) {
            UiMode::FormInput
        } else {
            UiMode::Normal
        }
    }

    pub fn current_route(&self) -> Option<Route> {
        self.router.current_route()
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn job_list(&self) -> Option<&JobListScreen> {
        match &self.screen {
            Screen::JobList(s) => Some(s),
            _ => None,
        }
    }

    pub fn job_list_mut(&mut self) -> Option<&mut JobListScreen> {
        match &mut self.screen {
            Screen::JobList(s) => Some(s),
            _ => None,
        }
    }

    pub fn job_run(&self) -> Option<&JobRunScreen> {
        match &self.screen {
            Screen::JobRun(s) => Some(s),
            _ => None,
        }
    }

    pub fn job_run_mut(&mut self) -> Option<&mut JobRunScreen> {
        match &mut self.screen {
            Screen::JobRun(s) => Some(s),
            _ => None,
        }
    }

    pub fn log_list(&self) -> Option<&LogListScreen> {
        match &self.screen {
            Screen::LogList(s) => Some(s),
            _ => None,
        }
    }

    pub fn log_list_mut(&mut self) -> Option<&mut LogListScreen> {
        match &mut self.screen {
            Screen::LogList(s) => Some(s),
            _ => None,
        }
    }

    pub fn log_detail(&self) -> Option<&LogDetailScreen> {
        match &self.screen {
            Screen::LogDetail(s) => Some(s),
            _ => None,
        }
    }

    pub fn log_detail_mut(&mut self) -> Option<&mut LogDetailScreen> {
        match &mut self.screen {
            Screen::LogDetail(s) => Some(s),
            _ => None,
        }
    }

    /// Job under the cursor on the job list, once its fetch has landed
    pub fn selected_job(&self) -> Option<&Job> {
        self.job_list()
            .filter(|s| s.load == LoadState::Ready)
            .and_then(|s| s.selected_job(self.jobs.items()))
    }

    /// Log under the cursor on the log list, once its fetch has landed
    pub fn selected_log(&self) -> Option<&LogSummary> {
        self.log_list()
            .filter(|s| s.load == LoadState::Ready)
            .and_then(|s| self.logs.items().get(s.selected))
    }

    /// Paging cursors of the log page on screen
    ///
    /// The cache keeps the previous page while a fetch is pending or after it
    /// failed, so its cursors only count once the screen is ready.
    pub fn log_cursors(&self) -> Option<PageCursors> {
        self.log_list()
            .filter(|s| s.load == LoadState::Ready)
            .and_then(|_| self.logs.cursors())
    }
}
