//! Message types for the application (TEA pattern)

use jobdash_core::{Job, JobDraft, LogBody, LogPage, LogQuery, MutationResponse};

use crate::input_key::InputKey;
use crate::router::Route;
use crate::screen::ScreenId;

/// All possible messages/events in the application.
///
/// Completion messages carry the [`ScreenId`] of the screen that issued the
/// request and an error string in place of the client error, which is
/// logged where it happens.
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Go to a path as if clicked (resolves and mounts the route)
    Navigate { path: String },
    /// Re-mount the current route
    Refresh,
    HistoryBack,
    HistoryForward,
    /// Mount a resolved route (follow-up of a navigation)
    MountRoute(Route),

    // ─────────────────────────────────────────────────────────
    // Address bar
    // ─────────────────────────────────────────────────────────
    OpenAddressInput,
    AddressInput { text: String },
    SubmitAddress,
    CancelAddressInput,

    // ─────────────────────────────────────────────────────────
    // Lists and scrolling
    // ─────────────────────────────────────────────────────────
    SelectPrevious,
    SelectNext,
    ScrollUp(usize),
    ScrollDown(usize),
    ScrollToTop,
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Jobs
    // ─────────────────────────────────────────────────────────
    DeleteJob { id: String },
    NewJob,
    EditJob { job: Job },
    JobFormInput { text: String },
    SubmitJobForm,
    CancelJobForm,
    JobsLoaded {
        screen: ScreenId,
        result: Result<Vec<Job>, String>,
    },
    JobDeleted {
        screen: ScreenId,
        id: String,
        result: Result<MutationResponse, String>,
    },
    JobSaved {
        screen: ScreenId,
        draft: JobDraft,
        result: Result<MutationResponse, String>,
    },

    // ─────────────────────────────────────────────────────────
    // Job run
    // ─────────────────────────────────────────────────────────
    RunOutput { screen: ScreenId, text: String },
    RunFinished { screen: ScreenId },
    RunFailed { screen: ScreenId, error: String },
    ToggleFollow,
    /// Periodic scroll step from the follow poller
    FollowTick { screen: ScreenId },

    // ─────────────────────────────────────────────────────────
    // Logs
    // ─────────────────────────────────────────────────────────
    LogsLoaded {
        screen: ScreenId,
        query: LogQuery,
        result: Result<LogPage, String>,
    },
    LogLoaded {
        screen: ScreenId,
        result: Result<LogBody, String>,
    },

    // ─────────────────────────────────────────────────────────
    // Alert
    // ─────────────────────────────────────────────────────────
    DismissAlert,
}
