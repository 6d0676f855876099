//! Log resource: paged listing and single log bodies

use std::sync::Arc;

use jobdash_core::{LogBody, LogPage, LogQuery};
use tracing::{debug, instrument};

use crate::error::ClientError;
use crate::transport::HttpTransport;
use crate::wire::{BodyEnvelope, LogsEnvelope};

/// Operations on logs
#[trait_variant::make(LogsApi: Send)]
pub trait LocalLogsApi {
    /// `GET /logs?job=&page=`
    async fn fetch_logs(&self, query: &LogQuery) -> Result<LogPage, ClientError>;

    /// `GET /logs?id=`
    async fn fetch_log(&self, id: &str) -> Result<LogBody, ClientError>;
}

/// [`LogsApi`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpLogsClient {
    transport: Arc<HttpTransport>,
}

impl HttpLogsClient {
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }
}

impl LogsApi for HttpLogsClient {
    #[instrument(skip(self))]
    async fn fetch_logs(&self, query: &LogQuery) -> Result<LogPage, ClientError> {
        let envelope: LogsEnvelope = self
            .transport
            .get_json("logs", &query.query_pairs())
            .await?;
        let entries = envelope.entries.unwrap_or_default();
        debug!("Fetched {} of {} logs", entries.len(), envelope.length);
        Ok(LogPage::for_query(query, entries, envelope.length))
    }

    #[instrument(skip(self))]
    async fn fetch_log(&self, id: &str) -> Result<LogBody, ClientError> {
        let envelope: BodyEnvelope = self
            .transport
            .get_json("logs", &[("id", id.to_string())])
            .await?;
        Ok(LogBody {
            id: id.to_string(),
            body: envelope.body,
        })
    }
}
