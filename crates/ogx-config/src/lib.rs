//! # ogx-config
//!
//! Layered configuration loading for ogx using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`OGX_*` prefix, `__` as separator)
//! 2. Project-level `.ogx/config.toml`
//! 3. User-level `~/.config/ogx/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `OGX_API__BASE_URL` -> `api.base_url` and
//! `OGX_EXPLORE__MAX_DEPTH` -> `explore.max_depth`.
//!
//! ```no_run
//! use ogx_config::OgxConfig;
//!
//! let config = OgxConfig::load_with_dotenv().expect("config");
//! println!("read API: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod explore;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use explore::ExploreConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OgxConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub explore: ExploreConfig,
}

impl OgxConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; use [`OgxConfig::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the current directory, then [`OgxConfig::load`].
    ///
    /// # Errors
    ///
    /// Same as [`OgxConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".ogx/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("OGX_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ogx").join("config.toml"))
    }
}
