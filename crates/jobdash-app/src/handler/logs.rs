//! Log list and log detail handlers

use jobdash_core::prelude::*;
use jobdash_core::{LogBody, LogPage, LogQuery};

use crate::screen::{LoadState, LogDetailScreen, LogListScreen, Screen, ScreenId, REQUEST_FAILED};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub(crate) fn mount_log_list(state: &mut AppState, query: LogQuery) -> UpdateResult {
    let screen = state.mount(Screen::LogList(LogListScreen::new(query.clone())));
    UpdateResult::action(UpdateAction::FetchLogs { screen, query })
}

pub(crate) fn handle_logs_loaded(
    state: &mut AppState,
    screen: ScreenId,
    query: LogQuery,
    result: std::result::Result<LogPage, String>,
) -> UpdateResult {
    if !state.is_current(screen) {
        debug!("Dropping logs {:?} for unmounted screen {}", query, screen);
        return UpdateResult::none();
    }

    match result {
        Ok(page) => {
            let total = page.length;
            state.logs.replace(page.entries, page.cursors);
            let rows = state.logs.len();
            if let Some(s) = state.log_list_mut() {
                s.load = LoadState::Ready;
                s.total = total;
                s.selected = s.selected.min(rows.saturating_sub(1));
            }
        }
        Err(e) => {
            warn!("Failed to fetch logs {:?}: {}", query, e);
            if let Some(s) = state.log_list_mut() {
                s.load = LoadState::Failed(REQUEST_FAILED.to_string());
            }
        }
    }
    UpdateResult::none()
}

pub(crate) fn mount_log_detail(state: &mut AppState, log_id: String) -> UpdateResult {
    let screen = state.mount(Screen::LogDetail(LogDetailScreen::new(log_id.clone())));
    UpdateResult::action(UpdateAction::FetchLog { screen, id: log_id })
}

pub(crate) fn handle_log_loaded(
    state: &mut AppState,
    screen: ScreenId,
    result: std::result::Result<LogBody, String>,
) -> UpdateResult {
    if !state.is_current(screen) {
        debug!("Dropping log body for unmounted screen {}", screen);
        return UpdateResult::none();
    }
    let Some(s) = state.log_detail_mut() else {
        return UpdateResult::none();
    };

    match result {
        Ok(body) => s.set_body(body),
        Err(e) => {
            warn!("Failed to fetch log {}: {}", s.log_id, e);
            s.load = LoadState::Failed(REQUEST_FAILED.to_string());
        }
    }
    UpdateResult::none()
}
