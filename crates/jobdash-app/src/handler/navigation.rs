//! Navigation handlers: routing, history and the address bar

use jobdash_core::prelude::*;
use jobdash_core::LogQuery;

use crate::message::Message;
use crate::router::{NavigateOptions, Route};
use crate::state::AppState;

use super::{jobs, logs, run, UpdateAction, UpdateResult};

/// Navigate to `path`, mounting the matching screen
pub(crate) fn handle_navigate(state: &mut AppState, path: &str) -> UpdateResult {
    match state.router.navigate(path, NavigateOptions::TRIGGER) {
        Some(route) => leave_then_mount(state, route),
        None => UpdateResult::none(),
    }
}

/// Mount the current route again
pub(crate) fn handle_refresh(state: &mut AppState) -> UpdateResult {
    match state.current_route() {
        Some(route) => leave_then_mount(state, route),
        None => UpdateResult::none(),
    }
}

pub(crate) fn handle_history_back(state: &mut AppState) -> UpdateResult {
    match state.router.back() {
        Some(route) => leave_then_mount(state, route),
        None => UpdateResult::none(),
    }
}

pub(crate) fn handle_history_forward(state: &mut AppState) -> UpdateResult {
    match state.router.forward() {
        Some(route) => leave_then_mount(state, route),
        None => UpdateResult::none(),
    }
}

/// Tear down the run screen, if mounted, before mounting `route`
fn leave_then_mount(state: &mut AppState, route: Route) -> UpdateResult {
    if state.screen.is_job_run() {
        debug!("Leaving run screen {}", state.screen_id);
        UpdateResult::action_then(UpdateAction::StopRun, Message::MountRoute(route))
    } else {
        mount_route(state, route)
    }
}

/// Invoke the screen handler bound to `route`
pub(crate) fn mount_route(state: &mut AppState, route: Route) -> UpdateResult {
    match route {
        Route::ListLogs => logs::mount_log_list(state, LogQuery::new()),
        Route::ListLogsForJob { job_id } => logs::mount_log_list(state, LogQuery::for_job(job_id)),
        Route::ListLogsPage { page } => logs::mount_log_list(state, LogQuery::at_page(page)),
        Route::ViewLog { log_id } => logs::mount_log_detail(state, log_id),
        Route::ListJobs => jobs::mount_job_list(state),
        Route::RunJob { job_id } => run::mount_job_run(state, job_id),
    }
}

pub(crate) fn handle_open_address(state: &mut AppState) -> UpdateResult {
    let current = state.router.current_path().unwrap_or_default().to_string();
    state.address_input = Some(current);
    UpdateResult::none()
}

pub(crate) fn handle_submit_address(state: &mut AppState) -> UpdateResult {
    match state.address_input.take() {
        Some(path) => handle_navigate(state, &path),
        None => UpdateResult::none(),
    }
}
