//! Transport-level errors

/// Errors that prevent an application payload from being read at all.
///
/// Every variant is a transport failure from the dashboard's point of view:
/// the request is not retried and the screen shows a generic failure.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (connection, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("backend error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The server address or an endpoint could not be turned into a URL.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The body was not the JSON shape the endpoint promises.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Status code for [`ClientError::Status`], if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<ClientError> for jobdash_core::Error {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Url(e) => jobdash_core::Error::invalid_server_url(e.to_string()),
            other => jobdash_core::Error::backend(other.to_string()),
        }
    }
}
