//! Config file handling
//!
//! The config lives at `<user-config-dir>/word-define/config.json` and is
//! created with empty credentials the first time the tool runs.

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::DefineError;
use crate::storage;

/// Directory name shared by the config and cache locations
pub const APP_DIR: &str = "word-define";

const CONFIG_FILE: &str = "config.json";

/// Credentials and behaviour flags read once per run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Oxford API application key
    pub app_key: String,
    /// Oxford API application id
    pub app_id: String,
    /// Whether lookups go through the on-disk cache
    pub cache: bool,
}

impl Config {
    /// A config is usable only when both credentials are present
    pub fn is_valid(&self) -> bool {
        !self.app_key.is_empty() && !self.app_id.is_empty()
    }
}

/// Reads the JSON config file, creating it with defaults when missing
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    /// Creates a ConfigFile at the platform config directory
    ///
    /// Returns `None` if the config directory cannot be determined (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let base_dirs = BaseDirs::new()?;
        let path = base_dirs.config_dir().join(APP_DIR).join(CONFIG_FILE);
        Some(Self { path })
    }

    /// Creates a ConfigFile backed by a specific path
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the config
    ///
    /// A missing file is created with empty credentials and caching off. A
    /// file that is not valid JSON is overwritten with the same defaults.
    pub fn load(&self) -> Result<Config, DefineError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "creating default config");
                let config = Config::default();
                self.write(&config)?;
                return Ok(config);
            }
            Err(e) => return Err(self.error("read", e)),
        };

        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "config file is not valid JSON, resetting to defaults"
                );
                let config = Config::default();
                self.write(&config)?;
                Ok(config)
            }
        }
    }

    fn write(&self, config: &Config) -> Result<(), DefineError> {
        if let Some(dir) = self.path.parent() {
            storage::create_private_dir(dir).map_err(|e| self.error("create directory for", e))?;
        }

        storage::write_private_json(&self.path, config).map_err(|e| self.error("write", e))
    }

    fn error(&self, action: &str, e: io::Error) -> DefineError {
        DefineError::Config(format!("failed to {} {}: {}", action, self.path.display(), e))
    }
}
