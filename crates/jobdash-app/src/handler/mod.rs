//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `navigation`: Routing, history and the address bar
//! - `jobs`: Job list, deletes and the job form
//! - `run`: Job run screen and live-follow
//! - `logs`: Log list and log detail

pub(crate) mod jobs;
pub(crate) mod keys;
pub(crate) mod logs;
pub(crate) mod navigation;
pub(crate) mod run;
pub(crate) mod update;


use jobdash_core::{JobDraft, LogQuery};

use crate::message::Message;
use crate::screen::ScreenId;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// `GET /jobs` for the job list screen
    FetchJobs { screen: ScreenId },

    /// `GET /logs?job=&page=` for the log list screen
    FetchLogs { screen: ScreenId, query: LogQuery },

    /// `GET /logs?id=` for the log detail screen
    FetchLog { screen: ScreenId, id: String },

    /// `GET /addJob` with the form draft
    SaveJob { screen: ScreenId, draft: JobDraft },

    /// `GET /deleteJob`
    DeleteJob { screen: ScreenId, id: String },

    /// Open the run output stream and, when `follow` is set, start the
    /// follow poller for the run screen
    StartRun {
        screen: ScreenId,
        job_id: String,
        follow: bool,
    },

    /// Stop the follow poller and detach the run output stream
    StopRun,

    /// Resume the follow poller on the mounted run screen
    StartFollow { screen: ScreenId },

    /// Pause the follow poller; the output stream keeps running
    StopFollow,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Perform `action` first, then process `msg`
    pub fn action_then(action: UpdateAction, msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }
}
