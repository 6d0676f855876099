//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::router::Route;
use crate::screen::{LoadState, LogListScreen, Screen};
use crate::state::{AppState, UiMode};

/// Lines moved by PageUp/PageDown
const PAGE_LINES: usize = 10;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode() {
        UiMode::Alert => handle_key_alert(key),
        UiMode::AddressInput => handle_key_address_input(state, key),
        UiMode::FormInput => handle_key_form_input(state, key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

fn navigate(route: Route) -> Option<Message> {
    Some(Message::Navigate { path: route.path() })
}

/// Only dismissal gets through while an alert is up
fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc => Some(Message::DismissAlert),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_address_input(state: &AppState, key: InputKey) -> Option<Message> {
    let mut text = state.address_input.clone().unwrap_or_default();
    match key {
        InputKey::Esc => Some(Message::CancelAddressInput),
        InputKey::Enter => Some(Message::SubmitAddress),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('u') => Some(Message::AddressInput {
            text: String::new(),
        }),
        InputKey::Backspace => {
            text.pop();
            Some(Message::AddressInput { text })
        }
        InputKey::Char(c) => {
            text.push(c);
            Some(Message::AddressInput { text })
        }
        _ => None,
    }
}

fn handle_key_form_input(state: &AppState, key: InputKey) -> Option<Message> {
    let mut text = state
        .job_list()
        .map(|s| s.form.draft.cmd.clone())
        .unwrap_or_default();
    match key {
        InputKey::Esc => Some(Message::CancelJobForm),
        InputKey::Enter => Some(Message::SubmitJobForm),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('u') => Some(Message::JobFormInput {
            text: String::new(),
        }),
        InputKey::Backspace => {
            text.pop();
            Some(Message::JobFormInput { text })
        }
        InputKey::Char(c) => {
            text.push(c);
            Some(Message::JobFormInput { text })
        }
        _ => None,
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    // Global shortcuts
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Char('l') => return navigate(Route::ListLogs),
        InputKey::Char('j') => return navigate(Route::ListJobs),
        InputKey::Char(':') => return Some(Message::OpenAddressInput),
        InputKey::Char('<') => return Some(Message::HistoryBack),
        InputKey::Char('>') => return Some(Message::HistoryForward),
        InputKey::Char('r') => return Some(Message::Refresh),
        _ => {}
    }

    match &state.screen {
        Screen::JobList(_) => handle_key_job_list(state, key),
        Screen::LogList(screen) => handle_key_log_list(state, screen, key),
        Screen::JobRun(_) => match key {
            InputKey::Char('f') => Some(Message::ToggleFollow),
            key => handle_key_scroll(key),
        },
        Screen::LogDetail(_) => handle_key_scroll(key),
        Screen::Blank => None,
    }
}

fn handle_key_job_list(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Down => Some(Message::SelectNext),
        InputKey::Char('n') => Some(Message::NewJob),
        InputKey::Enter => state.selected_job().and_then(|job| {
            navigate(Route::RunJob {
                job_id: job.id.clone(),
            })
        }),
        InputKey::Char('d') => state.selected_job().map(|job| Message::DeleteJob {
            id: job.id.clone(),
        }),
        InputKey::Char('e') => state
            .selected_job()
            .map(|job| Message::EditJob { job: job.clone() }),
        InputKey::Char('L') => state.selected_job().and_then(|job| {
            navigate(Route::ListLogsForJob {
                job_id: job.id.clone(),
            })
        }),
        _ => None,
    }
}

fn handle_key_log_list(state: &AppState, screen: &LogListScreen, key: InputKey) -> Option<Message> {
    let ready = screen.load == LoadState::Ready;
    let cursors = state.log_cursors();
    match key {
        InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Down => Some(Message::SelectNext),
        InputKey::Enter => state.selected_log().and_then(|log| {
            navigate(Route::ViewLog {
                log_id: log.id.clone(),
            })
        }),
        InputKey::Char('n') if ready => match cursors {
            Some(c) => c.next.and_then(|page| navigate(Route::ListLogsPage { page })),
            // Paged routes carry no job filter, so filtered lists stay unpaged
            None if screen.query.job.is_none() => navigate(Route::ListLogsPage { page: 1 }),
            None => None,
        },
        InputKey::Char('p') => cursors
            .and_then(|c| c.previous)
            .and_then(|page| navigate(Route::ListLogsPage { page })),
        _ => None,
    }
}

fn handle_key_scroll(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::ScrollUp(1)),
        InputKey::Down => Some(Message::ScrollDown(1)),
        InputKey::PageUp => Some(Message::ScrollUp(PAGE_LINES)),
        InputKey::PageDown => Some(Message::ScrollDown(PAGE_LINES)),
        InputKey::Home => Some(Message::ScrollToTop),
        InputKey::End => Some(Message::ScrollToBottom),
        InputKey::Esc => Some(Message::HistoryBack),
        _ => None,
    }
}
