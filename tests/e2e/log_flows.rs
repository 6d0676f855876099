//! Log list paging, job filter and log detail

use jobdash_app::screen::{LoadState, REQUEST_FAILED};
use jobdash_app::{InputKey, Message};
use jobdash_client::test_utils::{FakeBackend, FakeCall, FAKE_PAGE_SIZE};
use jobdash_core::{LogQuery, LogSummary, PageCursors};

use crate::{engine, logs_for, sample_jobs, settle, visit};

#[tokio::test]
async fn test_second_page_has_both_neighbours() {
    let fake = FakeBackend::new().with_logs(logs_for("deploy", 120));
    let mut engine = engine(&fake);

    visit(&mut engine, "listLogs/page/2").await;

    assert_eq!(
        engine.state.logs.cursors(),
        Some(PageCursors {
            current: 2,
            previous: Some(1),
            next: Some(3),
        })
    );
    assert_eq!(engine.state.logs.len(), FAKE_PAGE_SIZE);
    assert_eq!(engine.state.logs.items()[0].id, "50");
    assert_eq!(engine.state.log_list().unwrap().total, 120);
}

#[tokio::test]
async fn test_first_page_has_no_previous() {
    let fake = FakeBackend::new().with_logs(logs_for("deploy", 10));
    let mut engine = engine(&fake);

    visit(&mut engine, "listLogs/page/1").await;

    let cursors = engine.state.logs.cursors().unwrap();
    assert_eq!(cursors.previous, None);
    assert_eq!(cursors.next, Some(2));
}

#[tokio::test]
async fn test_paging_keys_walk_pages_until_empty() {
    let fake = FakeBackend::new().with_logs(logs_for("deploy", 60));
    let mut engine = engine(&fake);
    visit(&mut engine, "listLogs").await;
    assert!(engine.state.logs.cursors().is_none());

    // Unpaged -> page 1 -> page 2 -> empty page 3
    for _ in 0..3 {
        engine.process_message(Message::Key(InputKey::Char('n')));
        settle(&mut engine).await;
    }
    assert_eq!(engine.state.router.current_path(), Some("listLogs/page/3"));
    assert!(engine.state.logs.is_empty());
    assert_eq!(engine.state.logs.cursors().unwrap().next, None);

    // No further page to go to
    engine.process_message(Message::Key(InputKey::Char('n')));
    settle(&mut engine).await;
    assert_eq!(engine.state.router.current_path(), Some("listLogs/page/3"));

    engine.process_message(Message::Key(InputKey::Char('p')));
    settle(&mut engine).await;
    assert_eq!(engine.state.router.current_path(), Some("listLogs/page/2"));
    assert_eq!(engine.state.logs.len(), 10);
}

#[tokio::test]
async fn test_logs_for_selected_job() {
    let mut logs = logs_for("backup", 2);
    logs.push(LogSummary::new("99", "abc123"));
    let fake = FakeBackend::new().with_jobs(sample_jobs()).with_logs(logs);
    let mut engine = engine(&fake);
    visit(&mut engine, "listJobs").await;

    engine.process_message(Message::Key(InputKey::Down));
    engine.process_message(Message::Key(InputKey::Char('L')));
    settle(&mut engine).await;

    assert_eq!(engine.state.router.current_path(), Some("listLogs/job/backup"));
    assert!(fake
        .calls()
        .contains(&FakeCall::FetchLogs(LogQuery::for_job("backup"))));
    assert_eq!(engine.state.logs.len(), 2);
    assert!(engine.state.logs.items().iter().all(|l| l.name == "backup"));
}

#[tokio::test]
async fn test_open_log_from_list() {
    let fake = FakeBackend::new()
        .with_logs(logs_for("deploy", 3))
        .with_body("1", "step 1\nstep 2\n");
    let mut engine = engine(&fake);
    visit(&mut engine, "listLogs").await;

    engine.process_message(Message::Key(InputKey::Down));
    engine.process_message(Message::Key(InputKey::Enter));
    settle(&mut engine).await;

    let detail = engine.state.log_detail().unwrap();
    assert_eq!(detail.log_id, "1");
    assert_eq!(detail.body.as_ref().unwrap().body, "step 1\nstep 2\n");
    assert_eq!(detail.scroll.total_lines, 2);

    // Esc goes back to the list
    engine.process_message(Message::Key(InputKey::Esc));
    settle(&mut engine).await;
    assert!(engine.state.log_list().is_some());
}

#[tokio::test]
async fn test_empty_log_body_is_ready() {
    let fake = FakeBackend::new();
    let mut engine = engine(&fake);

    visit(&mut engine, "viewLog/404").await;

    let detail = engine.state.log_detail().unwrap();
    assert_eq!(detail.load, LoadState::Ready);
    assert_eq!(detail.body.as_ref().unwrap().body, "");
}

#[tokio::test]
async fn test_failed_refilter_does_not_open_previous_rows() {
    let fake = FakeBackend::new().with_logs(logs_for("deploy", 3));
    let mut engine = engine(&fake);
    visit(&mut engine, "listLogs/job/deploy").await;
    assert_eq!(engine.state.logs.len(), 3);

    fake.set_transport_failure(true);
    visit(&mut engine, "listLogs/job/other").await;
    assert_eq!(
        engine.state.log_list().unwrap().load,
        LoadState::Failed(REQUEST_FAILED.into())
    );

    engine.process_message(Message::Key(InputKey::Enter));
    settle(&mut engine).await;
    assert_eq!(
        engine.state.router.current_path(),
        Some("listLogs/job/other")
    );
}
