//! jobdash - a terminal dashboard for running remote jobs and browsing
//! their logs
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing::{info, warn};

use jobdash_app::config::{self, CliOverrides};
use jobdash_app::{Engine, Services};

/// jobdash - run jobs and browse their logs from the terminal
#[derive(Parser, Debug)]
#[command(name = "jobdash")]
#[command(about = "A terminal dashboard for running remote jobs and browsing their logs", long_about = None)]
struct Args {
    /// Backend base URL (overrides `server.base_url`)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Route to open first, e.g. `listJobs` or `listLogs/page/1`
    #[arg(long, value_name = "PATH")]
    route: Option<String>,

    /// Config file (default: <config dir>/jobdash/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    jobdash_core::logging::init().wrap_err("Failed to initialize logging")?;

    let config_path = match args.config {
        Some(path) => path,
        None => {
            let path = config::default_config_path()
                .ok_or_else(|| eyre!("No config directory on this platform; pass --config"))?;
            if let Err(e) = config::init_config_file(&path) {
                warn!("Could not create default config: {}", e);
            }
            path
        }
    };

    let mut settings = config::load_settings(&config_path);
    CliOverrides {
        server: args.server,
        route: args.route,
    }
    .apply(&mut settings);
    info!("Backend: {}", settings.server.base_url);

    let (jobs, logs) =
        jobdash_client::connect(&settings.server.base_url, settings.server.timeout())
            .wrap_err_with(|| format!("Invalid server address {}", settings.server.base_url))?;

    let engine = Engine::new(settings, Services::new(jobs, logs))?;
    jobdash_tui::run(engine).await?;
    Ok(())
}
