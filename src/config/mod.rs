//! Configuration management for samhita
//!
//! This module handles loading and validating configuration from environment variables,
//! files, and command-line arguments.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::analytics::comparison::DEFAULT_SELECTION;
use crate::analytics::keyword_index::DEFAULT_KEYWORD;
use crate::error::{Error, Result};
use crate::models::{is_valid_group_id, GroupId, GROUP_COUNT};
use crate::utils::parse_base_url;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where payloads come from
    pub source: SourceConfig,

    /// Initial screen state
    pub views: ViewConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Payload source configuration
///
/// When `api_url` is set payloads are fetched over HTTP; otherwise they are
/// read from `data_dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Directory holding `<dataset>.json` files
    pub data_dir: PathBuf,

    /// Base URL of the corpus service (optional)
    pub api_url: Option<String>,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Retries for recoverable fetch failures
    pub max_retries: u32,
}

/// Initial state for the interactive views
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Groups selected on the comparison screen
    pub default_selection: Vec<GroupId>,

    /// Term selected on the keyword screen
    pub default_keyword: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            api_url: None,
            request_timeout_secs: 30,
            max_retries: 3,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_selection: DEFAULT_SELECTION.to_vec(),
            default_keyword: DEFAULT_KEYWORD.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl SourceConfig {
    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Parse a comma-separated list of group ids, e.g. `1,2,10`
pub fn parse_selection(raw: &str) -> Result<Vec<GroupId>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<GroupId>()
                .map_err(|_| Error::config(format!("Invalid group id: {part}")))
        })
        .collect()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let data_dir = std::env::var("SAMHITA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.source.data_dir);

        let api_url = std::env::var("SAMHITA_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let request_timeout_secs = std::env::var("SAMHITA_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults.source.request_timeout_secs);

        let max_retries = std::env::var("SAMHITA_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(defaults.source.max_retries);

        let default_selection = match std::env::var("SAMHITA_DEFAULT_SELECTION") {
            Ok(raw) => parse_selection(&raw).map_err(|e| {
                Error::config(format!("Failed to parse SAMHITA_DEFAULT_SELECTION: {e}"))
            })?,
            Err(_) => defaults.views.default_selection,
        };

        let default_keyword =
            std::env::var("SAMHITA_DEFAULT_KEYWORD").unwrap_or(defaults.views.default_keyword);

        let level = std::env::var("SAMHITA_LOG_LEVEL").unwrap_or(defaults.logging.level);

        let format = std::env::var("SAMHITA_LOG_FORMAT").unwrap_or(defaults.logging.format);

        Ok(Self {
            source: SourceConfig {
                data_dir,
                api_url,
                request_timeout_secs,
                max_retries,
            },
            views: ViewConfig {
                default_selection,
                default_keyword,
            },
            logging: LoggingConfig { level, format },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::with_source(format!("Failed to read config file: {}", path.display()), e)
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            Error::config(format!("Failed to parse TOML config file {}: {e}", path.display()))
        })?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.source.request_timeout_secs == 0 {
            return Err(Error::config("request_timeout_secs must be greater than 0"));
        }

        if let Some(id) = self
            .views
            .default_selection
            .iter()
            .find(|id| !is_valid_group_id(**id))
        {
            return Err(Error::config(format!(
                "default_selection contains {id}, expected 1..={GROUP_COUNT}"
            )));
        }

        if self.views.default_keyword.trim().is_empty() {
            return Err(Error::config("default_keyword must not be empty"));
        }

        if let Some(url) = &self.source.api_url {
            parse_base_url(url).map_err(|e| Error::config(format!("Invalid api_url {url}: {e}")))?;
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.source.request_timeout()
    }
}
