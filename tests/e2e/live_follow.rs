//! Job run screen: output stream and the live-follow poller

use std::time::Duration;

use jobdash_app::screen::RunStatus;
use jobdash_app::{FollowState, InputKey, Message};
use jobdash_client::test_utils::{FakeBackend, FakeCall};

use crate::{engine, sample_jobs, settle, visit, TestEngine};

fn output(lines: usize) -> String {
    (0..lines).map(|i| format!("step {}\n", i)).collect()
}

fn run_fake() -> FakeBackend {
    let text = output(40);
    FakeBackend::new()
        .with_jobs(sample_jobs())
        .with_run_output("abc123", &[text.as_str()])
}

/// Sleep in paused time, then process whatever the timers produced
async fn advance(engine: &mut TestEngine, ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    settle(engine).await;
}

#[tokio::test(start_paused = true)]
async fn test_run_screen_streams_and_follows() {
    let fake = run_fake();
    let mut engine = engine(&fake);

    visit(&mut engine, "runJob/abc123").await;

    let target = engine.state.screen_id;
    assert_eq!(engine.follow_state(), FollowState::Running { target });
    assert!(engine.is_streaming());
    assert!(fake.calls().contains(&FakeCall::RunJob("abc123".into())));

    let run = engine.state.job_run().unwrap();
    assert_eq!(run.status, RunStatus::Streaming);
    assert_eq!(run.output.scroll.total_lines, 40);
    assert_eq!(run.output.scroll.offset, 0);

    engine
        .state
        .job_run_mut()
        .unwrap()
        .output
        .scroll
        .set_visible_lines(10);

    // 100ms period, 5 lines per tick
    advance(&mut engine, 350).await;
    assert_eq!(engine.state.job_run().unwrap().output.scroll.offset, 15);

    // Clamped at the last page
    advance(&mut engine, 1000).await;
    assert_eq!(engine.state.job_run().unwrap().output.scroll.offset, 30);
}

#[tokio::test(start_paused = true)]
async fn test_leaving_run_screen_stops_poller_and_stream() {
    let fake = run_fake();
    let mut engine = engine(&fake);
    visit(&mut engine, "runJob/abc123").await;
    advance(&mut engine, 250).await;

    visit(&mut engine, "listJobs").await;

    assert_eq!(engine.follow_state(), FollowState::Idle);
    assert!(!engine.is_streaming());
    assert_eq!(engine.state.jobs.len(), 3);

    // No ticks arrive any more
    tokio::time::sleep(Duration::from_millis(1000)).await;
    tokio::task::yield_now().await;
    assert!(engine.msg_rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_rerunning_keeps_a_single_poller() {
    let fake = run_fake();
    let mut engine = engine(&fake);
    visit(&mut engine, "runJob/abc123").await;
    let first = engine.state.screen_id;

    engine.process_message(Message::Refresh);
    settle(&mut engine).await;
    let second = engine.state.screen_id;

    assert_ne!(first, second);
    assert_eq!(
        engine.follow_state(),
        FollowState::Running { target: second }
    );
    let runs = fake
        .calls()
        .into_iter()
        .filter(|c| *c == FakeCall::RunJob("abc123".into()))
        .count();
    assert_eq!(runs, 2);
}

#[tokio::test(start_paused = true)]
async fn test_pause_and_resume_follow() {
    let fake = run_fake();
    let mut engine = engine(&fake);
    visit(&mut engine, "runJob/abc123").await;
    engine
        .state
        .job_run_mut()
        .unwrap()
        .output
        .scroll
        .set_visible_lines(10);

    engine.process_message(Message::Key(InputKey::Char('f')));
    assert_eq!(engine.follow_state(), FollowState::Idle);

    advance(&mut engine, 500).await;
    assert_eq!(engine.state.job_run().unwrap().output.scroll.offset, 0);

    // Resuming jumps to the end and keeps following
    engine.process_message(Message::Key(InputKey::Char('f')));
    assert!(matches!(engine.follow_state(), FollowState::Running { .. }));
    assert_eq!(engine.state.job_run().unwrap().output.scroll.offset, 30);
}

#[tokio::test(start_paused = true)]
async fn test_scrolling_up_pauses_follow() {
    let fake = run_fake();
    let mut engine = engine(&fake);
    visit(&mut engine, "runJob/abc123").await;

    engine.process_message(Message::Key(InputKey::Up));

    assert_eq!(engine.follow_state(), FollowState::Idle);
    assert!(!engine.state.job_run().unwrap().following);
    assert!(engine.is_streaming());
}

#[tokio::test(start_paused = true)]
async fn test_quit_from_run_screen_stops_everything() {
    let fake = run_fake();
    let mut engine = engine(&fake);
    visit(&mut engine, "runJob/abc123").await;

    engine.process_message(Message::Key(InputKey::Char('q')));

    assert!(engine.should_quit());
    assert_eq!(engine.follow_state(), FollowState::Idle);
    assert!(!engine.is_streaming());
}
