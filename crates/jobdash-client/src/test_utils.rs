//! In-memory backend for tests
//!
//! [`FakeBackend`] implements both [`JobsApi`] and [`LogsApi`] over shared
//! state, records every call, and can be switched into transport-failure
//! mode. Clones share the same state, so a test can keep one handle for
//! assertions while the code under test owns another.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use futures_util::stream;
use futures_util::StreamExt;
use jobdash_core::{Job, JobDraft, LogBody, LogPage, LogQuery, LogSummary, MutationResponse};

use crate::error::ClientError;
use crate::jobs::JobsApi;
use crate::logs::LogsApi;
use crate::stream::RunStream;

/// Logs per page served by the fake
pub const FAKE_PAGE_SIZE: usize = 50;

/// A call the fake received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeCall {
    FetchJobs,
    CreateJob(JobDraft),
    DeleteJob(String),
    RunJob(String),
    FetchLogs(LogQuery),
    FetchLog(String),
}

#[derive(Debug, Default)]
struct FakeState {
    jobs: Vec<Job>,
    logs: Vec<LogSummary>,
    bodies: HashMap<String, String>,
    run_output: HashMap<String, Vec<String>>,
    create_replies: VecDeque<MutationResponse>,
    calls: Vec<FakeCall>,
    fail_transport: bool,
    next_id: u64,
}

/// In-memory [`JobsApi`] + [`LogsApi`]
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<FakeState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jobs(self, jobs: Vec<Job>) -> Self {
        self.lock().jobs = jobs;
        self
    }

    pub fn with_logs(self, logs: Vec<LogSummary>) -> Self {
        self.lock().logs = logs;
        self
    }

    pub fn with_body(self, id: &str, body: &str) -> Self {
        self.lock().bodies.insert(id.to_string(), body.to_string());
        self
    }

    /// Output chunks served by `run_job(id)`; the stream stays open afterwards
    pub fn with_run_output(self, id: &str, chunks: &[&str]) -> Self {
        self.lock().run_output.insert(
            id.to_string(),
            chunks.iter().map(|c| c.to_string()).collect(),
        );
        self
    }

    /// Queue a reply for the next `create_job` call
    pub fn reply_to_create(&self, reply: MutationResponse) {
        self.lock().create_replies.push_back(reply);
    }

    /// Make every call fail as if the network were down
    pub fn set_transport_failure(&self, fail: bool) {
        self.lock().fail_transport = fail;
    }

    pub fn calls(&self) -> Vec<FakeCall> {
        self.lock().calls.clone()
    }

    pub fn jobs(&self) -> Vec<Job> {
        self.lock().jobs.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake backend state poisoned")
    }

    fn record(&self, call: FakeCall) -> Result<(), ClientError> {
        let mut state = self.lock();
        state.calls.push(call);
        if state.fail_transport {
            return Err(ClientError::Status {
                status: 503,
                body: "fake backend unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl JobsApi for FakeBackend {
    async fn fetch_jobs(&self) -> Result<Vec<Job>, ClientError> {
        self.record(FakeCall::FetchJobs)?;
        Ok(self.lock().jobs.clone())
    }

    async fn create_job(&self, draft: &JobDraft) -> Result<MutationResponse, ClientError> {
        self.record(FakeCall::CreateJob(draft.clone()))?;
        let mut state = self.lock();
        if let Some(reply) = state.create_replies.pop_front() {
            return Ok(reply);
        }
        if draft.is_update() {
            match state.jobs.iter_mut().find(|j| j.id == draft.id) {
                Some(job) => {
                    job.cmd = draft.cmd.clone();
                    Ok(MutationResponse::ok("Job updated"))
                }
                None => Ok(MutationResponse::failed("Job not found")),
            }
        } else {
            state.next_id += 1;
            let id = format!("job-{}", state.next_id);
            state.jobs.push(Job::new(id, draft.cmd.clone()));
            Ok(MutationResponse::ok("Job created"))
        }
    }

    async fn delete_job(&self, id: &str) -> Result<MutationResponse, ClientError> {
        self.record(FakeCall::DeleteJob(id.to_string()))?;
        let mut state = self.lock();
        let before = state.jobs.len();
        state.jobs.retain(|j| j.id != id);
        if state.jobs.len() < before {
            Ok(MutationResponse::ok("Job deleted"))
        } else {
            Ok(MutationResponse::failed(format!("Job {} does not exist", id)))
        }
    }

    async fn run_job(&self, id: &str) -> Result<RunStream, ClientError> {
        self.record(FakeCall::RunJob(id.to_string()))?;
        let chunks = self.lock().run_output.get(id).cloned().unwrap_or_default();
        let items: Vec<Result<Vec<u8>, ClientError>> =
            chunks.into_iter().map(|c| Ok(c.into_bytes())).collect();
        Ok(RunStream::new(
            id,
            stream::iter(items).chain(stream::pending()),
        ))
    }
}

impl LogsApi for FakeBackend {
    async fn fetch_logs(&self, query: &LogQuery) -> Result<LogPage, ClientError> {
        self.record(FakeCall::FetchLogs(query.clone()))?;
        let state = self.lock();
        let matching: Vec<LogSummary> = state
            .logs
            .iter()
            .filter(|log| query.job.as_ref().map_or(true, |job| &log.name == job))
            .cloned()
            .collect();
        let length = matching.len();
        let entries = match query.page {
            Some(page) => matching
                .into_iter()
                .skip((page.max(1) as usize - 1) * FAKE_PAGE_SIZE)
                .take(FAKE_PAGE_SIZE)
                .collect(),
            None => matching.into_iter().take(FAKE_PAGE_SIZE).collect(),
        };
        Ok(LogPage::for_query(query, entries, length))
    }

    async fn fetch_log(&self, id: &str) -> Result<LogBody, ClientError> {
        self.record(FakeCall::FetchLog(id.to_string()))?;
        let body = self.lock().bodies.get(id).cloned().unwrap_or_default();
        Ok(LogBody {
            id: id.to_string(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_missing_job_fails_without_error() {
        let fake = FakeBackend::new().with_jobs(vec![Job::new("a", "x")]);
        let reply = fake.delete_job("zzz").await.unwrap();
        assert!(!reply.success);
        assert_eq!(fake.jobs().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_is_error() {
        let fake = FakeBackend::new();
        fake.set_transport_failure(true);
        assert!(fake.fetch_jobs().await.is_err());
        assert_eq!(fake.calls(), vec![FakeCall::FetchJobs]);
    }

    #[tokio::test]
    async fn test_paging_uses_one_based_pages() {
        let logs: Vec<LogSummary> = (0..60)
            .map(|i| LogSummary::new(i.to_string(), "deploy"))
            .collect();
        let fake = FakeBackend::new().with_logs(logs);

        let page = fake.fetch_logs(&LogQuery::at_page(2)).await.unwrap();
        assert_eq!(page.entries.len(), 10);
        assert_eq!(page.entries[0].id, "50");
        assert_eq!(page.length, 60);
    }
}
