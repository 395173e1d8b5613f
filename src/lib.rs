//! Diary Commons
//!
//! Shared UI component and design-token library of the emotion diary.
//! The [`app_ui`] crate holds the components and tables, [`app_state`] the
//! query-client defaults. This crate ties them together with application
//! configuration and logging setup.
//!
//! # Example
//!
//! ```rust
//! use diary_commons::AppConfig;
//!
//! let config = AppConfig::from_json_str(r#"{"ui": {"theme": "dark"}}"#).unwrap();
//! assert!(config.ui.theme().is_dark());
//! assert_eq!(config.query.queries.retry.retry, 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_state;
pub use app_ui;

use app_state::{QueryClientConfig, QueryConfigError};
use app_ui::UiConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid configuration JSON
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Query defaults are inconsistent
    #[error("invalid query config: {0}")]
    Query(#[from] QueryConfigError),

    /// A global subscriber is already installed
    #[error("failed to install tracing subscriber: {0}")]
    Tracing(String),
}

/// Result type for configuration
pub type Result<T> = std::result::Result<T, ConfigError>;

fn default_log_level() -> String {
    "info".to_string()
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Component defaults
    #[serde(default)]
    pub ui: UiConfig,

    /// Query client defaults
    #[serde(default)]
    pub query: QueryClientConfig,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            query: QueryClientConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.finish()
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading config");
        Self::from_json_str(&json)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn finish(mut self) -> Result<Self> {
        self.ui = self.ui.normalized();
        self.query.validate()?;
        Ok(self)
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_tracing(default_level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .map_err(|err| ConfigError::Tracing(err.to_string()))
}
