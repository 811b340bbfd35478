//! Server and CLI configuration
//!
//! Loaded from TOML. Every field has a default, so a partial file (or no
//! file at all) is valid.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{FileSearchError, Result};

/// Environment variable naming a config file to load
pub const CONFIG_ENV_VAR: &str = "FILE_SEARCH_CONFIG";

/// Config file looked up in the working directory when nothing else is given
pub const DEFAULT_CONFIG_FILE: &str = "file-search.toml";

const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Largest file (in bytes) the search will read
    pub max_file_size: u64,

    /// Directory that relative file paths resolve against
    pub base_dir: Option<PathBuf>,

    /// Directory for the rolling log file
    pub log_dir: PathBuf,

    /// `EnvFilter` directive used when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            base_dir: None,
            log_dir: PathBuf::from(".file-search/logs"),
            log_filter: "file_search=info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| FileSearchError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load config from an explicit file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            FileSearchError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config = Self::from_toml(&content)?;
        debug!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Resolve and load configuration, warning when defaults are used.
    ///
    /// Needs a subscriber already installed for the warning to show up;
    /// callers that set up logging afterwards use [`Self::resolve`].
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (config, source) = Self::resolve(explicit)?;
        source.warn_if_defaults();
        Ok(config)
    }

    /// Resolve configuration and report where it came from.
    ///
    /// An explicit path wins, then `FILE_SEARCH_CONFIG`, then
    /// `./file-search.toml`. Only the last one may be missing, in which case
    /// defaults are used.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            return Ok((Self::load_from(path)?, ConfigSource::File(path.to_path_buf())));
        }

        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            if !path.is_empty() {
                let path = PathBuf::from(path);
                return Ok((Self::load_from(&path)?, ConfigSource::File(path)));
            }
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            return Ok((
                Self::load_from(fallback)?,
                ConfigSource::File(fallback.to_path_buf()),
            ));
        }

        Ok((Self::default(), ConfigSource::Defaults))
    }
}

/// Where a resolved [`ServerConfig`] came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn warn_if_defaults(&self) {
        if *self == Self::Defaults {
            warn!("Configuration file not found, using defaults");
        }
    }
}
