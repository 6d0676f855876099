//! # jobdash-client - Backend HTTP Client
//!
//! Talks to the job runner backend over its fixed HTTP contract. One trait
//! per resource kind, each with a single `reqwest` implementation:
//!
//! - [`JobsApi`] / [`HttpJobsClient`] - list, create/update, delete and run jobs
//! - [`LogsApi`] / [`HttpLogsClient`] - paged log listing and single log bodies
//! - [`RunStream`] - decoded text chunks of a running job's output
//!
//! Transport failures (network errors, non-2xx statuses, undecodable bodies)
//! are reported as [`ClientError`]. Application-level failures arrive as
//! regular values (`MutationResponse { success: false, .. }`).

pub mod error;
pub mod jobs;
pub mod logs;
pub mod stream;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;
pub mod transport;
mod wire;

pub use error::ClientError;
pub use jobs::{HttpJobsClient, JobsApi, LocalJobsApi};
pub use logs::{HttpLogsClient, LocalLogsApi, LogsApi};
pub use stream::{OutputDecoder, RunStream};
pub use transport::HttpTransport;

use std::sync::Arc;
use std::time::Duration;

/// Build both resource clients on top of one shared connection pool
pub fn connect(
    base_url: &str,
    timeout: Duration,
) -> Result<(HttpJobsClient, HttpLogsClient), ClientError> {
    let transport = Arc::new(HttpTransport::new(base_url, timeout)?);
    Ok((
        HttpJobsClient::new(transport.clone()),
        HttpLogsClient::new(transport),
    ))
}
