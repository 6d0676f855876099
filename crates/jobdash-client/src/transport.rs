//! Shared HTTP plumbing for the resource clients
//!
//! Wraps a [`reqwest::Client`] and the backend base URL. Endpoint paths are
//! resolved relative to the base, so a dashboard mounted under a prefix
//! (`http://host/ops/`) keeps working.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::ClientError;

/// HTTP transport shared by [`crate::HttpJobsClient`] and [`crate::HttpLogsClient`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base: Url,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport for the backend at `base_url`.
    ///
    /// `timeout` applies to JSON requests only. Run streams stay open for as
    /// long as the job produces output.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), base_url, timeout)
    }

    /// Create a transport reusing an existing [`reqwest::Client`]
    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            client,
            base: normalize_base(base_url)?,
            timeout,
        })
    }

    /// Base URL every endpoint is resolved against (always ends with `/`)
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolve a relative endpoint path such as `"jobs"`
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }

    /// Resolve `prefix/<segment>` with `segment` percent-encoded as one path segment
    pub fn endpoint_with_segment(&self, prefix: &str, segment: &str) -> Result<Url, ClientError> {
        let mut url = self.endpoint(prefix)?;
        url.path_segments_mut()
            .map_err(|_| ClientError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    /// `GET path?query` and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("Undecodable response from {}: {}", path, e);
            ClientError::Decode(e)
        })
    }

    /// `GET url` without a timeout, returning the response for streaming
    pub async fn get_streaming(&self, url: Url) -> Result<reqwest::Response, ClientError> {
        debug!("GET {} (streaming)", url);
        let response = self.client.get(url).send().await?;
        Self::ensure_success(response).await
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`ClientError::Status`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

/// Parse the base URL and make sure relative joins append to its path
fn normalize_base(base_url: &str) -> Result<Url, ClientError> {
    let mut base = Url::parse(base_url.trim())?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}
