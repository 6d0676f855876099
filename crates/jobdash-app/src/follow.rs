//! Live-follow poller for the run screen.
//!
//! While running, a background task sends [`Message::FollowTick`] for its
//! target screen every period; the update loop advances the output view on
//! each tick. At most one poll task exists at a time: `start` stops the
//! previous one first, and `stop` is a no-op when idle.
//!
//! The task follows the usual polling shape: a `watch` shutdown channel
//! created before spawning, a `tokio::time::interval`, and a `select!` loop
//! that also exits when the message channel closes. `stop` both signals and
//! aborts the task so no tick can be sent after it returns.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::message::Message;
use crate::screen::ScreenId;

/// Observable poller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowState {
    Idle,
    Running { target: ScreenId },
}

struct ActiveFollow {
    target: ScreenId,
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

/// Cancellable repeating scroll timer
pub struct FollowPoller {
    period: Duration,
    active: Option<ActiveFollow>,
}

impl std::fmt::Debug for FollowPoller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FollowPoller")
            .field("period", &self.period)
            .field("state", &self.state())
            .finish()
    }
}

impl FollowPoller {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            active: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start ticking for `target`, replacing any running cycle.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, target: ScreenId, msg_tx: mpsc::Sender<Message>) {
        self.stop();

        let period = self.period;
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = ticker.tick() => {
                        if msg_tx.send(Message::FollowTick { screen: target }).await.is_err() {
                            // Channel closed - engine is shutting down
                            break;
                        }
                    }
                }
            }
            trace!("Follow task for screen {} exited", target);
        });

        debug!("Follow started for screen {} every {:?}", target, period);
        self.active = Some(ActiveFollow {
            target,
            shutdown_tx,
            task,
        });
    }

    /// Stop ticking. Returns whether a cycle was running.
    pub fn stop(&mut self) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };
        let _ = active.shutdown_tx.send(true);
        active.task.abort();
        debug!("Follow stopped for screen {}", active.target);
        true
    }

    pub fn state(&self) -> FollowState {
        match &self.active {
            Some(active) => FollowState::Running {
                target: active.target,
            },
            None => FollowState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }
}

impl Drop for FollowPoller {
    fn drop(&mut self) {
        self.stop();
    }
}
