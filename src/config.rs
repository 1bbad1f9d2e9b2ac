//! Configuration management for alerthub.
//!
//! Uses the `figment` crate to load settings from a TOML file and merge them
//! with `ALERTHUB_`-prefixed environment variables.

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Settings for building an [`AlertHub`](crate::hub::AlertHub).
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// The logging level for the embedding application.
    pub log_level: String,
    /// The notifier that receives forwarded messages, if any.
    #[serde(default)]
    pub default_notifier: Option<String>,
    /// In-memory notifiers to register at startup.
    #[serde(default)]
    pub notifiers: Vec<NotifierConfig>,
}

/// A single notifier entry.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    pub name: String,
}

impl Config {
    /// Loads the configuration from the specified TOML file, with
    /// environment variables taking precedence (e.g.
    /// `ALERTHUB_LOG_LEVEL=debug`).
    pub fn load(config_path: &str) -> Result<Self> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("ALERTHUB_"))
            .extract()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            default_notifier: None,
            notifiers: Vec::new(),
        }
    }
}
