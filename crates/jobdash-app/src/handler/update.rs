//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::screen::Screen;
use crate::state::AppState;

use super::{jobs, keys, logs, navigation, run, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns an UpdateResult with optional follow-up message and action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Quit => {
            state.request_quit();
            if state.screen.is_job_run() {
                UpdateResult::action(UpdateAction::StopRun)
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate { path } => navigation::handle_navigate(state, &path),
        Message::Refresh => navigation::handle_refresh(state),
        Message::HistoryBack => navigation::handle_history_back(state),
        Message::HistoryForward => navigation::handle_history_forward(state),
        Message::MountRoute(route) => navigation::mount_route(state, route),

        Message::OpenAddressInput => navigation::handle_open_address(state),
        Message::AddressInput { text } => {
            if state.address_input.is_some() {
                state.address_input = Some(text);
            }
            UpdateResult::none()
        }
        Message::SubmitAddress => navigation::handle_submit_address(state),
        Message::CancelAddressInput => {
            state.address_input = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Lists and scrolling
        // ─────────────────────────────────────────────────────────
        Message::SelectPrevious => {
            move_selection(state, -1);
            UpdateResult::none()
        }
        Message::SelectNext => {
            move_selection(state, 1);
            UpdateResult::none()
        }
        Message::ScrollUp(n) => run::handle_scroll_up(state, n),
        Message::ScrollDown(n) => run::handle_scroll_down(state, n),
        Message::ScrollToTop => run::handle_scroll_to_top(state),
        Message::ScrollToBottom => run::handle_scroll_to_bottom(state),

        // ─────────────────────────────────────────────────────────
        // Jobs
        // ─────────────────────────────────────────────────────────
        Message::DeleteJob { id } => jobs::handle_delete(state, id),
        Message::NewJob => jobs::handle_new_job(state),
        Message::EditJob { job } => jobs::handle_edit_job(state, &job),
        Message::JobFormInput { text } => jobs::handle_form_input(state, text),
        Message::SubmitJobForm => jobs::handle_submit(state),
        Message::CancelJobForm => jobs::handle_cancel_form(state),
        Message::JobsLoaded { screen, result } => jobs::handle_jobs_loaded(state, screen, result),
        Message::JobDeleted { screen, id, result } => {
            jobs::handle_job_deleted(state, screen, id, result)
        }
        Message::JobSaved {
            screen,
            draft,
            result,
        } => jobs::handle_job_saved(state, screen, draft, result),

        // ─────────────────────────────────────────────────────────
        // Job run
        // ─────────────────────────────────────────────────────────
        Message::RunOutput { screen, text } => run::handle_output(state, screen, &text),
        Message::RunFinished { screen } => run::handle_finished(state, screen),
        Message::RunFailed { screen, error } => run::handle_failed(state, screen, error),
        Message::ToggleFollow => run::handle_toggle_follow(state),
        Message::FollowTick { screen } => run::handle_follow_tick(state, screen),

        // ─────────────────────────────────────────────────────────
        // Logs
        // ─────────────────────────────────────────────────────────
        Message::LogsLoaded {
            screen,
            query,
            result,
        } => logs::handle_logs_loaded(state, screen, query, result),
        Message::LogLoaded { screen, result } => logs::handle_log_loaded(state, screen, result),

        Message::DismissAlert => {
            state.alert = None;
            UpdateResult::none()
        }
    }
}

/// Move the cursor of whichever list is mounted, clamped to its rows
fn move_selection(state: &mut AppState, delta: isize) {
    let job_rows = state
        .job_list()
        .map_or(0, |s| s.visible_jobs(state.jobs.items()).len());
    let log_rows = state.logs.len();
    match &mut state.screen {
        Screen::JobList(s) => s.selected = step(s.selected, delta, job_rows),
        Screen::LogList(s) => s.selected = step(s.selected, delta, log_rows),
        _ => {}
    }
}

fn step(current: usize, delta: isize, rows: usize) -> usize {
    if rows == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(rows - 1)
}
