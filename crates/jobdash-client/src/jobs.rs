//! Job resource: list, create/update, delete, run

use std::sync::Arc;

use jobdash_core::{Job, JobDraft, MutationResponse};
use tracing::{debug, info, instrument};

use crate::error::ClientError;
use crate::stream::RunStream;
use crate::transport::HttpTransport;

/// Operations on jobs
#[trait_variant::make(JobsApi: Send)]
pub trait LocalJobsApi {
    /// `GET /jobs`
    async fn fetch_jobs(&self) -> Result<Vec<Job>, ClientError>;

    /// `GET /addJob?id=&cmd=`
    ///
    /// Creates a job when `draft.id` is empty, updates it otherwise.
    async fn create_job(&self, draft: &JobDraft) -> Result<MutationResponse, ClientError>;

    /// `GET /deleteJob?id=`
    async fn delete_job(&self, id: &str) -> Result<MutationResponse, ClientError>;

    /// `GET /run/:id`, streamed
    async fn run_job(&self, id: &str) -> Result<RunStream, ClientError>;
}

/// [`JobsApi`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpJobsClient {
    transport: Arc<HttpTransport>,
}

impl HttpJobsClient {
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }
}

impl JobsApi for HttpJobsClient {
    #[instrument(skip(self))]
    async fn fetch_jobs(&self) -> Result<Vec<Job>, ClientError> {
        let jobs: Option<Vec<Job>> = self.transport.get_json("jobs", &[]).await?;
        let jobs = jobs.unwrap_or_default();
        debug!("Fetched {} jobs", jobs.len());
        Ok(jobs)
    }

    #[instrument(skip(self), fields(update = draft.is_update()))]
    async fn create_job(&self, draft: &JobDraft) -> Result<MutationResponse, ClientError> {
        let query = [("id", draft.id.clone()), ("cmd", draft.cmd.clone())];
        let response: MutationResponse = self.transport.get_json("addJob", &query).await?;
        info!("addJob -> success={} msg={:?}", response.success, response.msg);
        Ok(response)
    }

    #[instrument(skip(self))]
    async fn delete_job(&self, id: &str) -> Result<MutationResponse, ClientError> {
        let query = [("id", id.to_string())];
        let response: MutationResponse = self.transport.get_json("deleteJob", &query).await?;
        info!("deleteJob -> success={} msg={:?}", response.success, response.msg);
        Ok(response)
    }

    #[instrument(skip(self))]
    async fn run_job(&self, id: &str) -> Result<RunStream, ClientError> {
        let url = self.transport.endpoint_with_segment("run/", id)?;
        let response = self.transport.get_streaming(url).await?;
        info!("Run stream opened for job {}", id);
        Ok(RunStream::from_response(id, response))
    }
}
