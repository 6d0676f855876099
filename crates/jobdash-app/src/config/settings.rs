//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use jobdash_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "jobdash";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# jobdash configuration

[server]
base_url = "http://localhost:8000"
timeout_ms = 10000       # Per request; run output streams have no timeout

[follow]
interval_ms = 100        # Time between auto-scroll steps on the run screen
scroll_step = 5          # Lines per step

[ui]
default_route = "listLogs"   # listLogs, listJobs, listLogs/page/1, ...
"#;

/// `<config_dir>/jobdash/config.toml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file unless one already exists
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(())
}

/// Values given on the command line, applied over the file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub route: Option<String>,
}

impl CliOverrides {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(server) = &self.server {
            settings.server.base_url = server.clone();
        }
        if let Some(route) = &self.route {
            settings.ui.default_route = route.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        let config = r#"
[server]
base_url = "http://jobs.internal:9000"

[follow]
interval_ms = 250
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.server.base_url, "http://jobs.internal:9000");
        assert_eq!(settings.server.timeout_ms, 10_000);
        assert_eq!(settings.follow.interval_ms, 250);
        assert_eq!(settings.follow.scroll_step, 5);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_init_config_file_writes_loadable_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        init_config_file(&path).unwrap();
        assert!(path.exists());
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_init_config_file_keeps_existing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\ndefault_route = \"listJobs\"\n").unwrap();

        init_config_file(&path).unwrap();
        assert_eq!(load_settings(&path).ui.default_route, "listJobs");
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut settings = Settings::default();
        CliOverrides {
            server: Some("http://other:1".into()),
            route: None,
        }
        .apply(&mut settings);

        assert_eq!(settings.server.base_url, "http://other:1");
        assert_eq!(settings.ui.default_route, "listLogs");
    }
}
