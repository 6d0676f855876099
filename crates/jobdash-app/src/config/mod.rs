//! Configuration file parsing for jobdash
//!
//! Settings live in `<config_dir>/jobdash/config.toml`; command-line flags
//! override individual values.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, CliOverrides};
pub use types::*;
