//! Job run screen handlers: output stream, live-follow and scrolling

use jobdash_core::prelude::*;

use crate::screen::{JobRunScreen, RunStatus, Screen, ScreenId, REQUEST_FAILED};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub(crate) fn mount_job_run(state: &mut AppState, job_id: String) -> UpdateResult {
    let screen = state.mount(Screen::JobRun(JobRunScreen::new(job_id.clone())));
    UpdateResult::action(UpdateAction::StartRun {
        screen,
        job_id,
        follow: true,
    })
}

/// Run screen for `screen`, if it is still mounted
fn mounted_run(state: &mut AppState, screen: ScreenId) -> Option<&mut JobRunScreen> {
    if !state.is_current(screen) {
        trace!("Ignoring run event for unmounted screen {}", screen);
        return None;
    }
    state.job_run_mut()
}

pub(crate) fn handle_output(state: &mut AppState, screen: ScreenId, text: &str) -> UpdateResult {
    if let Some(run) = mounted_run(state, screen) {
        run.output.push(text);
        if run.status == RunStatus::Connecting {
            run.status = RunStatus::Streaming;
        }
    }
    UpdateResult::none()
}

pub(crate) fn handle_finished(state: &mut AppState, screen: ScreenId) -> UpdateResult {
    if let Some(run) = mounted_run(state, screen) {
        info!("Run of job {} finished", run.job_id);
        run.status = RunStatus::Finished;
    }
    UpdateResult::none()
}

pub(crate) fn handle_failed(state: &mut AppState, screen: ScreenId, error: String) -> UpdateResult {
    if let Some(run) = mounted_run(state, screen) {
        warn!("Run of job {} failed: {}", run.job_id, error);
        run.status = RunStatus::Failed(REQUEST_FAILED.to_string());
    }
    UpdateResult::none()
}

pub(crate) fn handle_toggle_follow(state: &mut AppState) -> UpdateResult {
    let screen = state.screen_id;
    let Some(run) = state.job_run_mut() else {
        return UpdateResult::none();
    };

    run.following = !run.following;
    if run.following {
        run.output.scroll.scroll_to_bottom();
        UpdateResult::action(UpdateAction::StartFollow { screen })
    } else {
        UpdateResult::action(UpdateAction::StopFollow)
    }
}

pub(crate) fn handle_follow_tick(state: &mut AppState, screen: ScreenId) -> UpdateResult {
    let step = state.settings.follow.scroll_step;
    if let Some(run) = mounted_run(state, screen) {
        if run.following {
            run.output.advance(step);
        }
    }
    UpdateResult::none()
}

/// Scrolling up on the run screen pauses live-follow
fn pause_follow(run: &mut JobRunScreen) -> UpdateResult {
    if run.following {
        run.following = false;
        UpdateResult::action(UpdateAction::StopFollow)
    } else {
        UpdateResult::none()
    }
}

pub(crate) fn handle_scroll_up(state: &mut AppState, n: usize) -> UpdateResult {
    match &mut state.screen {
        Screen::JobRun(run) => {
            run.output.scroll.scroll_up(n);
            pause_follow(run)
        }
        Screen::LogDetail(detail) => {
            detail.scroll.scroll_up(n);
            UpdateResult::none()
        }
        _ => UpdateResult::none(),
    }
}

pub(crate) fn handle_scroll_down(state: &mut AppState, n: usize) -> UpdateResult {
    match &mut state.screen {
        Screen::JobRun(run) => run.output.scroll.scroll_down(n),
        Screen::LogDetail(detail) => detail.scroll.scroll_down(n),
        _ => {}
    }
    UpdateResult::none()
}

pub(crate) fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    match &mut state.screen {
        Screen::JobRun(run) => {
            run.output.scroll.scroll_to_top();
            pause_follow(run)
        }
        Screen::LogDetail(detail) => {
            detail.scroll.scroll_to_top();
            UpdateResult::none()
        }
        _ => UpdateResult::none(),
    }
}

pub(crate) fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    match &mut state.screen {
        Screen::JobRun(run) => run.output.scroll.scroll_to_bottom(),
        Screen::LogDetail(detail) => detail.scroll.scroll_to_bottom(),
        _ => {}
    }
    UpdateResult::none()
}
