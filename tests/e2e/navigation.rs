//! Routing, history and the address bar through the engine

use jobdash_app::{InputKey, Message, Route, Screen};
use jobdash_client::test_utils::{FakeBackend, FakeCall};
use jobdash_core::LogQuery;

use crate::{engine, sample_jobs, settle, visit};

#[tokio::test]
async fn test_start_opens_default_route() {
    let fake = FakeBackend::new();
    let mut engine = engine(&fake);

    engine.start();
    settle(&mut engine).await;

    assert_eq!(engine.state.router.current_path(), Some("listLogs"));
    assert!(matches!(engine.state.screen, Screen::LogList(_)));
    assert_eq!(fake.calls(), vec![FakeCall::FetchLogs(LogQuery::new())]);
}

#[tokio::test]
async fn test_start_falls_back_when_route_is_unknown() {
    let fake = FakeBackend::new();
    let mut engine = engine(&fake);
    engine.state.settings.ui.default_route = "nowhere/at/all".into();

    engine.start();
    settle(&mut engine).await;

    assert_eq!(engine.state.current_route(), Some(Route::ListLogs));
}

#[tokio::test]
async fn test_unmatched_path_is_a_no_op() {
    let fake = FakeBackend::new().with_jobs(sample_jobs());
    let mut engine = engine(&fake);
    visit(&mut engine, "listJobs").await;
    let calls = fake.calls().len();

    visit(&mut engine, "deleteEverything/now").await;

    assert!(matches!(engine.state.screen, Screen::JobList(_)));
    assert_eq!(fake.calls().len(), calls);
}

#[tokio::test]
async fn test_hash_prefixed_paths_are_normalized() {
    let fake = FakeBackend::new().with_body("9", "done");
    let mut engine = engine(&fake);

    visit(&mut engine, "#/viewLog/9").await;

    assert_eq!(engine.state.router.current_path(), Some("viewLog/9"));
    assert_eq!(fake.calls(), vec![FakeCall::FetchLog("9".into())]);
}

#[tokio::test]
async fn test_back_and_forward_refetch() {
    let fake = FakeBackend::new().with_jobs(sample_jobs());
    let mut engine = engine(&fake);
    visit(&mut engine, "listJobs").await;
    visit(&mut engine, "listLogs").await;

    engine.process_message(Message::Key(InputKey::Char('<')));
    settle(&mut engine).await;
    assert!(matches!(engine.state.screen, Screen::JobList(_)));

    engine.process_message(Message::Key(InputKey::Char('>')));
    settle(&mut engine).await;
    assert!(matches!(engine.state.screen, Screen::LogList(_)));

    let fetches = fake
        .calls()
        .into_iter()
        .filter(|c| *c == FakeCall::FetchJobs)
        .count();
    assert_eq!(fetches, 2);
}

#[tokio::test]
async fn test_address_bar_typing_navigates() {
    let fake = FakeBackend::new().with_jobs(sample_jobs());
    let mut engine = engine(&fake);
    visit(&mut engine, "listLogs").await;

    engine.process_message(Message::Key(InputKey::Char(':')));
    engine.process_message(Message::Key(InputKey::CharCtrl('u')));
    for c in "listJobs".chars() {
        engine.process_message(Message::Key(InputKey::Char(c)));
    }
    engine.process_message(Message::Key(InputKey::Enter));
    settle(&mut engine).await;

    assert!(engine.state.address_input.is_none());
    assert_eq!(engine.state.jobs.len(), 3);
}

#[tokio::test]
async fn test_quit_key() {
    let fake = FakeBackend::new();
    let mut engine = engine(&fake);
    engine.process_message(Message::Key(InputKey::Char('q')));
    assert!(engine.should_quit());
}
