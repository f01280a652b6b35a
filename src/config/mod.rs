mod basic;
mod cors;

pub use basic::BasicConfig;
pub use cors::CorsConfig;

use crate::error::StashError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Cross-origin policy (see `cors` table in config.toml).
    #[serde(default)]
    pub cors: CorsConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Environment overrides, e.g. `BYTESTASH_BASIC__LISTEN_PORT`.
const ENV_PREFIX: &str = "BYTESTASH_";

/// Read verbatim: figment's `Env` would coerce `007` or `1.50` into numbers.
const API_KEY_ENV: &str = "BYTESTASH_BASIC__API_KEY";

impl Config {
    /// Builds a Figment that merges defaults, `config.toml` if present, then the environment.
    pub fn figment() -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let figment = if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment.merge(Toml::file(DEFAULT_CONFIG_FILE))
        } else {
            figment
        };
        let figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .split("__")
                .ignore(&["basic.api_key"]),
        );
        match std::env::var(API_KEY_ENV) {
            Ok(raw) => figment.merge(Serialized::default("basic.api_key", raw)),
            Err(_) => figment,
        }
    }

    /// Loads and validates configuration. Binaries must go through this so the
    /// server never starts without an api key.
    pub fn load() -> Result<Self, StashError> {
        Self::from_figment(&Self::figment())
    }

    pub fn from_figment(figment: &Figment) -> Result<Self, StashError> {
        let cfg: Self = figment
            .extract()
            .map_err(|err| StashError::Config(format!("failed to extract configuration: {err}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), StashError> {
        if self.basic.api_key.trim().is_empty() {
            return Err(StashError::Config(
                "basic.api_key must be set and non-empty".to_string(),
            ));
        }
        if self.basic.max_connections == 0 {
            return Err(StashError::Config(
                "basic.max_connections must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
