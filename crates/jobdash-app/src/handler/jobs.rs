//! Job list handlers: fetch, delete and the job form

use jobdash_core::prelude::*;
use jobdash_core::{Job, JobDraft, MutationResponse};

use crate::router::Route;
use crate::screen::{JobListScreen, LoadState, Screen, ScreenId, REQUEST_FAILED};
use crate::state::AppState;

use super::{navigation, UpdateAction, UpdateResult};

pub(crate) fn mount_job_list(state: &mut AppState) -> UpdateResult {
    let screen = state.mount(Screen::JobList(JobListScreen::new()));
    UpdateResult::action(UpdateAction::FetchJobs { screen })
}

pub(crate) fn handle_jobs_loaded(
    state: &mut AppState,
    screen: ScreenId,
    result: std::result::Result<Vec<Job>, String>,
) -> UpdateResult {
    if !state.is_current(screen) {
        debug!("Dropping job list for unmounted screen {}", screen);
        return UpdateResult::none();
    }

    match result {
        Ok(jobs) => {
            state.jobs.replace(jobs, None);
            if let Screen::JobList(s) = &mut state.screen {
                s.load = LoadState::Ready;
                s.hidden.clear();
                s.selected = s.selected.min(state.jobs.len().saturating_sub(1));
            }
        }
        Err(e) => {
            warn!("Failed to fetch jobs: {}", e);
            if let Some(s) = state.job_list_mut() {
                s.load = LoadState::Failed(REQUEST_FAILED.to_string());
            }
        }
    }
    UpdateResult::none()
}

pub(crate) fn handle_delete(state: &mut AppState, id: String) -> UpdateResult {
    if state.job_list().is_none() {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::DeleteJob {
        screen: state.screen_id,
        id,
    })
}

pub(crate) fn handle_job_deleted(
    state: &mut AppState,
    screen: ScreenId,
    id: String,
    result: std::result::Result<MutationResponse, String>,
) -> UpdateResult {
    match result {
        Ok(reply) if reply.success => {
            if !state.is_current(screen) {
                return UpdateResult::none();
            }
            if let Screen::JobList(s) = &mut state.screen {
                s.hidden.insert(id);
                let rows = s.visible_jobs(state.jobs.items()).len();
                s.selected = s.selected.min(rows.saturating_sub(1));
            }
            if !reply.msg.is_empty() {
                state.notice = Some(reply.msg);
            }
        }
        Ok(reply) => {
            let text = if reply.msg.is_empty() {
                format!("Could not delete job {}", id)
            } else {
                reply.msg
            };
            state.alert = Some(text);
        }
        Err(e) => {
            warn!("Failed to delete job {}: {}", id, e);
            if state.is_current(screen) {
                state.notice = Some(REQUEST_FAILED.to_string());
            }
        }
    }
    UpdateResult::none()
}

pub(crate) fn handle_new_job(state: &mut AppState) -> UpdateResult {
    if let Some(s) = state.job_list_mut() {
        s.form.open_new();
    }
    UpdateResult::none()
}

pub(crate) fn handle_edit_job(state: &mut AppState, job: &Job) -> UpdateResult {
    if let Some(s) = state.job_list_mut() {
        s.form.open_edit(job);
    }
    UpdateResult::none()
}

pub(crate) fn handle_form_input(state: &mut AppState, text: String) -> UpdateResult {
    if let Some(s) = state.job_list_mut() {
        s.form.set_cmd(text);
    }
    UpdateResult::none()
}

pub(crate) fn handle_cancel_form(state: &mut AppState) -> UpdateResult {
    if let Some(s) = state.job_list_mut() {
        s.form.editing = false;
    }
    UpdateResult::none()
}

pub(crate) fn handle_submit(state: &mut AppState) -> UpdateResult {
    let screen = state.screen_id;
    let Some(s) = state.job_list_mut() else {
        return UpdateResult::none();
    };
    if s.form.submitting {
        return UpdateResult::none();
    }

    s.form.editing = false;
    s.form.submitting = true;
    UpdateResult::action(UpdateAction::SaveJob {
        screen,
        draft: s.form.draft.clone(),
    })
}

pub(crate) fn handle_job_saved(
    state: &mut AppState,
    screen: ScreenId,
    draft: JobDraft,
    result: std::result::Result<MutationResponse, String>,
) -> UpdateResult {
    if !state.is_current(screen) {
        debug!("Dropping job form reply for unmounted screen {}", screen);
        return UpdateResult::none();
    }
    let Some(s) = state.job_list_mut() else {
        return UpdateResult::none();
    };
    let form = &mut s.form;
    form.submitting = false;

    match result {
        Ok(reply) if reply.success => {
            form.clear_errors();
            if draft.is_update() {
                // Remounting clears the notice, so set it afterwards
                let remounted = navigation::handle_navigate(state, &Route::ListJobs.path());
                if !reply.msg.is_empty() {
                    state.notice = Some(reply.msg);
                }
                remounted
            } else {
                form.set_status(reply.msg, true);
                form.reset();
                UpdateResult::action(UpdateAction::FetchJobs { screen })
            }
        }
        Ok(reply) => {
            form.apply_validation(&reply.validation_error);
            form.set_status(reply.msg, false);
            form.editing = true;
            UpdateResult::none()
        }
        Err(e) => {
            warn!("Failed to save job: {}", e);
            form.set_status(REQUEST_FAILED, false);
            form.editing = true;
            UpdateResult::none()
        }
    }
}
