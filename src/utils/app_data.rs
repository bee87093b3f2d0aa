use crate::index::types::LibraryConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "facts";
const CONFIG_FILE: &str = "config.json";

/// CLI configuration stored in the app data directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Facts directory used when `--dir` is not given
    #[serde(default)]
    pub facts_dir: Option<PathBuf>,

    /// Limits passed to the library loader
    #[serde(default)]
    pub library: LibraryConfig,
}

impl AppConfig {
    /// Load config from `path`, or from the app data directory when `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => match get_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Resolve the facts directory: explicit flag, then config, then `.`
    pub fn resolve_facts_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.facts_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Path of the config file in the platform data directory
pub fn get_config_path() -> Option<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    base.map(|b| b.join(APP_NAME).join(CONFIG_FILE))
}
