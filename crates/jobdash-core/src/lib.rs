//! # jobdash-core - Core Domain Types
//!
//! Foundation crate for jobdash. Provides the job/log domain types shared by
//! the HTTP client, the application state machine and the terminal UI, plus
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Job`], [`JobDraft`] - Runnable job definitions and the form payload that creates them
//! - [`LogSummary`], [`LogBody`] - Log list metadata and lazily fetched log output
//! - [`LogQuery`], [`LogPage`], [`PageCursors`] - Paged log listing
//! - [`MutationResponse`], [`ValidationError`] - Backend replies to create/delete
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use jobdash_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    Job, JobDraft, LogBody, LogPage, LogQuery, LogSummary, MutationResponse, PageCursors,
    ValidationError,
};
