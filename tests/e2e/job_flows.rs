//! Job list, delete and job form flows

use jobdash_app::form::CMD_FIELD;
use jobdash_app::screen::{LoadState, REQUEST_FAILED};
use jobdash_app::{InputKey, Message, UiMode};
use jobdash_client::test_utils::{FakeBackend, FakeCall};
use jobdash_core::{JobDraft, MutationResponse, ValidationError};

use crate::{engine, sample_jobs, settle, visit, TestEngine};

fn visible_ids(engine: &TestEngine) -> Vec<String> {
    let screen = engine.state.job_list().unwrap();
    screen
        .visible_jobs(engine.state.jobs.items())
        .iter()
        .map(|j| j.id.clone())
        .collect()
}

async fn press(engine: &mut TestEngine, key: InputKey) {
    engine.process_message(Message::Key(key));
    settle(engine).await;
}

async fn type_text(engine: &mut TestEngine, text: &str) {
    for c in text.chars() {
        engine.process_message(Message::Key(InputKey::Char(c)));
    }
    settle(engine).await;
}

#[tokio::test]
async fn test_job_list_loads_all_jobs() {
    let fake = FakeBackend::new().with_jobs(sample_jobs());
    let mut engine = engine(&fake);

    visit(&mut engine, "listJobs").await;

    assert_eq!(engine.state.job_list().unwrap().load, LoadState::Ready);
    assert_eq!(visible_ids(&engine), vec!["abc123", "backup", "report"]);
}

#[tokio::test]
async fn test_delete_removes_row() {
    let fake = FakeBackend::new().with_jobs(sample_jobs());
    let mut engine = engine(&fake);
    visit(&mut engine, "listJobs").await;

    press(&mut engine, InputKey::Down).await;
    press(&mut engine, InputKey::Char('d')).await;

    assert_eq!(visible_ids(&engine), vec!["abc123", "report"]);
    assert!(fake.calls().contains(&FakeCall::DeleteJob("backup".into())));
    assert_eq!(engine.state.ui_mode(), UiMode::Normal);

    // The next fetch agrees with the backend
    press(&mut engine, InputKey::Char('r')).await;
    assert_eq!(engine.state.jobs.len(), 2);
}

#[tokio::test]
async fn test_delete_failure_alerts_and_keeps_row() {
    let fake = FakeBackend::new().with_jobs(sample_jobs());
    let mut engine = engine(&fake);
    visit(&mut engine, "listJobs").await;

    // Someone else deleted it in the meantime
    engine.process_message(Message::DeleteJob {
        id: "ghost".into(),
    });
    settle(&mut engine).await;

    assert_eq!(engine.state.alert.as_deref(), Some("Job ghost does not exist"));
    assert_eq!(visible_ids(&engine).len(), 3);

    // Keys other than dismissal are swallowed
    press(&mut engine, InputKey::Char('l')).await;
    assert!(engine.state.job_list().is_some());
    press(&mut engine, InputKey::Enter).await;
    assert!(engine.state.alert.is_none());
}

#[tokio::test]
async fn test_create_validation_failure_names_fields() {
    let fake = FakeBackend::new().with_jobs(sample_jobs());
    let mut engine = engine(&fake);
    visit(&mut engine, "listJobs").await;

    fake.reply_to_create(
        MutationResponse::failed("Invalid job")
            .with_validation_error(ValidationError::new(CMD_FIELD, "cmd must not be empty")),
    );
    press(&mut engine, InputKey::Char('n')).await;
    press(&mut engine, InputKey::Enter).await;

    let form = &engine.state.job_list().unwrap().form;
    assert_eq!(form.error_for(CMD_FIELD), Some("cmd must not be empty"));
    assert_eq!(form.status.as_ref().unwrap().message, "Invalid job");
    assert!(form.editing);
    assert_eq!(engine.state.router.current_path(), Some("listJobs"));
    assert!(fake.calls().contains(&FakeCall::CreateJob(JobDraft::new(""))));
}

#[tokio::test]
async fn test_create_success_resets_form_and_refetches() {
    let fake = FakeBackend::new().with_jobs(sample_jobs());
    let mut engine = engine(&fake);
    visit(&mut engine, "listJobs").await;

    press(&mut engine, InputKey::Char('n')).await;
    type_text(&mut engine, "cleanup.sh").await;
    press(&mut engine, InputKey::Enter).await;

    let form = &engine.state.job_list().unwrap().form;
    assert!(form.errors.is_empty());
    assert!(form.draft.cmd.is_empty());
    assert_eq!(form.status.as_ref().unwrap().message, "Job created");
    assert_eq!(engine.state.jobs.len(), 4);
    assert!(engine.state.jobs.items().iter().any(|j| j.cmd == "cleanup.sh"));
}

#[tokio::test]
async fn test_edit_success_returns_to_job_list() {
    let fake = FakeBackend::new().with_jobs(sample_jobs());
    let mut engine = engine(&fake);
    visit(&mut engine, "listJobs").await;

    press(&mut engine, InputKey::Char('e')).await;
    press(&mut engine, InputKey::CharCtrl('u')).await;
    type_text(&mut engine, "make release").await;
    press(&mut engine, InputKey::Enter).await;

    assert_eq!(fake.jobs()[0].cmd, "make release");
    assert_eq!(engine.state.jobs.items()[0].cmd, "make release");
    assert_eq!(engine.state.router.current_path(), Some("listJobs"));
    assert_eq!(engine.state.notice.as_deref(), Some("Job updated"));
}

#[tokio::test]
async fn test_transport_failure_shows_request_failed() {
    let fake = FakeBackend::new();
    fake.set_transport_failure(true);
    let mut engine = engine(&fake);

    visit(&mut engine, "listJobs").await;

    assert_eq!(
        engine.state.job_list().unwrap().load,
        LoadState::Failed(REQUEST_FAILED.into())
    );
}

#[tokio::test]
async fn test_late_reply_for_left_screen_is_dropped() {
    let fake = FakeBackend::new().with_jobs(sample_jobs());
    let mut engine = engine(&fake);

    // Leave before the job fetch gets a chance to run
    engine.process_message(Message::Navigate {
        path: "listJobs".into(),
    });
    engine.process_message(Message::Navigate {
        path: "listLogs".into(),
    });
    settle(&mut engine).await;

    assert!(fake.calls().contains(&FakeCall::FetchJobs));
    assert!(!engine.state.jobs.is_loaded());
    assert!(engine.state.log_list().is_some());
}
