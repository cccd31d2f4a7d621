//! # Catalog Configuration
//!
//! Where the catalog lives and how long to wait for it.
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [catalog]
//! base_url = "https://67fbe5891f8b41c816853166.mockapi.io/api"
//! request_timeout_secs = 10   # omit for no timeout
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CatalogError, CatalogResult};

/// The public mock catalog the storefront ships against.
pub const DEFAULT_BASE_URL: &str = "https://67fbe5891f8b41c816853166.mockapi.io/api";

/// Settings for reaching the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL; `/books` is appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. `None` waits as long as the transport does.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl CatalogConfig {
    /// Config pointing at `base_url` with no timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        CatalogConfig {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Checks the settings and returns the parsed base URL.
    pub fn validate(&self) -> CatalogResult<Url> {
        let url = Url::parse(self.base_url.trim())
            .map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidUrl(format!(
                "Catalog URL must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        if self.request_timeout_secs == Some(0) {
            return Err(CatalogError::InvalidConfig(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(url)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CatalogConfig::default();
        let url = config.validate().unwrap();
        assert_eq!(url.host_str(), Some("67fbe5891f8b41c816853166.mockapi.io"));
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_config_validation() {
        let mut config = CatalogConfig::with_base_url("ftp://books.example.com");
        assert!(matches!(config.validate(), Err(CatalogError::InvalidUrl(_))));

        config.base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(CatalogError::InvalidUrl(_))));

        config.base_url = "http://localhost:3000/api".to_string();
        config.request_timeout_secs = Some(0);
        assert!(matches!(config.validate(), Err(CatalogError::InvalidConfig(_))));

        config.request_timeout_secs = Some(5);
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: CatalogConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CatalogConfig::default());
    }
}
