//! # Storefront Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                               │
//! │     --api-url http://localhost:3000/api                                 │
//! │                                                                         │
//! │  2. Environment Variables                                               │
//! │     FOLIO_API_URL=http://localhost:3000/api                             │
//! │     FOLIO_REQUEST_TIMEOUT_SECS=10                                       │
//! │                                                                         │
//! │  3. TOML Config File                                                    │
//! │     --config <path>, or the platform config dir:                        │
//! │     ~/.config/folio/storefront.toml (Linux)                             │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                    │
//! │     the public mock catalog, no request timeout                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [catalog]
//! base_url = "https://67fbe5891f8b41c816853166.mockapi.io/api"
//! request_timeout_secs = 10
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use folio_catalog::{CatalogConfig, CatalogError};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl StorefrontConfig {
    /// Loads configuration from defaults, file, environment and the
    /// `--api-url` flag, in that order, then validates it.
    ///
    /// An explicitly named file must exist; the platform default may not.
    pub fn load(config_path: Option<&Path>, api_url: Option<&str>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());

        if let Some(url) = api_url {
            debug!(url = %url, "Overriding catalog URL from command line");
            config.catalog.base_url = url.to_string();
        }

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading storefront config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.catalog.validate()?;
        Ok(())
    }

    /// Applies `FOLIO_*` overrides read through `var`.
    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("FOLIO_API_URL") {
            debug!(url = %url, "Overriding catalog URL from environment");
            self.catalog.base_url = url;
        }

        if let Some(timeout) = var("FOLIO_REQUEST_TIMEOUT_SECS") {
            match timeout.trim().parse::<u64>() {
                Ok(secs) => self.catalog.request_timeout_secs = Some(secs),
                Err(_) => warn!(value = %timeout, "Ignoring invalid FOLIO_REQUEST_TIMEOUT_SECS"),
            }
        }
    }

    /// `<platform config dir>/folio/storefront.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "folio")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}
