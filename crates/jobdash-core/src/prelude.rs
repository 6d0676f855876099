//! Prelude for common imports used throughout all jobdash crates

pub use crate::error::{Error, Result};
pub use tracing::{debug, error, info, instrument, trace, warn};
