//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Backend Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Backend request failed: {message}")]
    Backend { message: String },

    #[error("Invalid server address: {url}")]
    InvalidServerUrl { url: String },

    // ─────────────────────────────────────────────────────────────
    // Navigation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid route pattern '{pattern}': {reason}")]
    RoutePattern { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    pub fn invalid_server_url(url: impl Into<String>) -> Self {
        Self::InvalidServerUrl { url: url.into() }
    }

    pub fn route_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RoutePattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Backend failures are scoped to the screen that issued the request, so
    /// the user can always navigate away and try again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Backend { .. })
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InvalidServerUrl { .. } | Error::RoutePattern { .. }
        )
    }
}
