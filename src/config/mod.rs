//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory. A missing file
//! yields defaults; a broken one yields defaults plus a warning so the UI
//! can still start.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, LabelsConfig, LayoutConfig, PanelConfig};

use crate::error::SuggestError;

const CONFIG_DIR: &str = "urlbar-suggestions";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration and any non-fatal problem found on the way
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => ConfigResult::default(),
    }
}

pub fn load_config_from(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult::default();
    }

    let loaded = fs::read_to_string(path)
        .map_err(SuggestError::from)
        .and_then(|content| parse_config(&content));

    match loaded {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{} ({})", e, path.display())),
            }
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config, SuggestError> {
    toml::from_str(content).map_err(|e| SuggestError::Config(e.to_string()))
}
