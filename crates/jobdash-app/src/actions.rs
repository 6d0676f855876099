//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Network calls run on tokio tasks and report back through the message
//! channel. The run output stream and the follow poller are long-lived, so
//! their handles are kept in [`RunControl`] to be stopped when the run screen
//! is left.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use jobdash_client::{JobsApi, LogsApi};

use crate::follow::FollowPoller;
use crate::message::Message;
use crate::screen::ScreenId;
use crate::UpdateAction;

/// Backend clients used by the action handlers
pub struct Services<J, L> {
    pub jobs: Arc<J>,
    pub logs: Arc<L>,
}

impl<J, L> Services<J, L> {
    pub fn new(jobs: J, logs: L) -> Self {
        Self {
            jobs: Arc::new(jobs),
            logs: Arc::new(logs),
        }
    }
}

impl<J, L> Clone for Services<J, L> {
    fn clone(&self) -> Self {
        Self {
            jobs: Arc::clone(&self.jobs),
            logs: Arc::clone(&self.logs),
        }
    }
}

/// Handles of the run screen's background work
#[derive(Debug)]
pub struct RunControl {
    pub follow: FollowPoller,
    stream: Option<JoinHandle<()>>,
}

impl RunControl {
    pub fn new(follow_period: Duration) -> Self {
        Self {
            follow: FollowPoller::new(follow_period),
            stream: None,
        }
    }

    /// Whether a run output stream is attached
    pub fn is_streaming(&self) -> bool {
        self.stream.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop the poller and detach the output stream
    pub fn stop(&mut self) {
        self.follow.stop();
        if let Some(task) = self.stream.take() {
            task.abort();
            debug!("Run output stream detached");
        }
    }
}

impl Drop for RunControl {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<J, L>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    services: &Services<J, L>,
    run: &mut RunControl,
) where
    J: JobsApi + Send + Sync + 'static,
    L: LogsApi + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchJobs { screen } => {
            let jobs = Arc::clone(&services.jobs);
            tokio::spawn(async move {
                let result = jobs.fetch_jobs().await.map_err(|e| e.to_string());
                let _ = msg_tx.send(Message::JobsLoaded { screen, result }).await;
            });
        }

        UpdateAction::FetchLogs { screen, query } => {
            let logs = Arc::clone(&services.logs);
            tokio::spawn(async move {
                let result = logs.fetch_logs(&query).await.map_err(|e| e.to_string());
                let _ = msg_tx
                    .send(Message::LogsLoaded {
                        screen,
                        query,
                        result,
                    })
                    .await;
            });
        }

        UpdateAction::FetchLog { screen, id } => {
            let logs = Arc::clone(&services.logs);
            tokio::spawn(async move {
                let result = logs.fetch_log(&id).await.map_err(|e| e.to_string());
                let _ = msg_tx.send(Message::LogLoaded { screen, result }).await;
            });
        }

        UpdateAction::SaveJob { screen, draft } => {
            let jobs = Arc::clone(&services.jobs);
            tokio::spawn(async move {
                let result = jobs.create_job(&draft).await.map_err(|e| e.to_string());
                let _ = msg_tx
                    .send(Message::JobSaved {
                        screen,
                        draft,
                        result,
                    })
                    .await;
            });
        }

        UpdateAction::DeleteJob { screen, id } => {
            let jobs = Arc::clone(&services.jobs);
            tokio::spawn(async move {
                let result = jobs.delete_job(&id).await.map_err(|e| e.to_string());
                let _ = msg_tx
                    .send(Message::JobDeleted { screen, id, result })
                    .await;
            });
        }

        UpdateAction::StartRun {
            screen,
            job_id,
            follow,
        } => {
            run.stop();
            run.stream = Some(spawn_run_stream(
                Arc::clone(&services.jobs),
                screen,
                job_id,
                msg_tx.clone(),
            ));
            if follow {
                run.follow.start(screen, msg_tx);
            }
        }

        UpdateAction::StopRun => run.stop(),

        UpdateAction::StartFollow { screen } => run.follow.start(screen, msg_tx),

        UpdateAction::StopFollow => {
            run.follow.stop();
        }
    }
}

/// Forward decoded run output to the update loop until the stream ends
fn spawn_run_stream<J>(
    jobs: Arc<J>,
    screen: ScreenId,
    job_id: String,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    J: JobsApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let mut stream = match jobs.run_job(&job_id).await {
            Ok(stream) => stream,
            Err(e) => {
                let _ = msg_tx
                    .send(Message::RunFailed {
                        screen,
                        error: e.to_string(),
                    })
                    .await;
                return;
            }
        };

        while let Some(chunk) = stream.next_text().await {
            let msg = match chunk {
                Ok(text) => Message::RunOutput { screen, text },
                Err(e) => {
                    let _ = msg_tx
                        .send(Message::RunFailed {
                            screen,
                            error: e.to_string(),
                        })
                        .await;
                    return;
                }
            };
            if msg_tx.send(msg).await.is_err() {
                return;
            }
        }

        let _ = msg_tx.send(Message::RunFinished { screen }).await;
    })
}
