//! Read API connection settings.

use std::time::Duration;

use ogx_client::{ClientOptions, DEFAULT_BASE_URL, calls::DEFAULT_CAPACITY};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    String::from(DEFAULT_BASE_URL)
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    String::from("ogx/0.1")
}

const fn default_call_log_capacity() -> usize {
    DEFAULT_CAPACITY
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Entities root of the read API (`.../v1/entities`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Number of recent calls kept for `--show-calls`.
    #[serde(default = "default_call_log_capacity")]
    pub call_log_capacity: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            call_log_capacity: default_call_log_capacity(),
        }
    }
}

impl ApiConfig {
    /// The base URL must be a non-empty `http(s)` URL.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        let url = self.base_url.trim();
        url.starts_with("http://") || url.starts_with("https://")
    }

    /// Client settings for this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the base URL is unusable
    /// and [`ConfigError::InvalidValue`] for a zero timeout.
    pub fn client_options(&self) -> Result<ClientOptions, ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "api".to_string(),
                hint: format!("base_url must be an http(s) URL, got {:?}", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(ClientOptions {
            base_url: self.base_url.trim().to_string(),
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
            call_log_capacity: self.call_log_capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_read_api() {
        let config = ApiConfig::default();
        assert!(config.is_configured());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.user_agent, "ogx/0.1");
        assert_eq!(config.call_log_capacity, 100);
    }

    #[test]
    fn non_http_url_is_not_configured() {
        for base_url in ["", "   ", "ftp://example.org", "example.org/entities"] {
            let config = ApiConfig {
                base_url: base_url.into(),
                ..Default::default()
            };
            assert!(!config.is_configured(), "{base_url:?} accepted");
            assert!(matches!(
                config.client_options(),
                Err(ConfigError::NotConfigured { .. })
            ));
        }
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.client_options(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn client_options_carry_values() {
        let config = ApiConfig {
            base_url: " http://localhost:8080/v1/entities ".into(),
            timeout_secs: 5,
            user_agent: "test-agent".into(),
            call_log_capacity: 7,
        };
        let options = config.client_options().unwrap();
        assert_eq!(options.base_url, "http://localhost:8080/v1/entities");
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert_eq!(options.user_agent, "test-agent");
        assert_eq!(options.call_log_capacity, 7);
    }
}
