use core::fmt::{Debug, Display};
use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "blindbite.toml";
pub const ENV_PREFIX: &str = "BLINDBITE_";

/// Table layout for events created without an explicit one.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SeatingConfig {
    pub table_count: u32,
    pub table_capacity: usize,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            table_count: 3,
            table_capacity: 6,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Roster read by the `arrange` binary.
    pub roster_path: PathBuf,
    /// `tracing` filter directives, overridden by `RUST_LOG`.
    pub log_filter: Option<String>,
    pub seating: SeatingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from("roster.json"),
            log_filter: None,
            seating: SeatingConfig::default(),
        }
    }
}

#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Figment(#[from] Box<figment::Error>),
    #[error("config error: seating.{0} must be at least 1")]
    EmptyLayout(&'static str),
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Defaults, then `blindbite.toml`, then `BLINDBITE_*` variables.
/// Nested keys use a double underscore: `BLINDBITE_SEATING__TABLE_COUNT`.
#[must_use]
pub fn figment() -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(CONFIG_FILE))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

pub fn get_config() -> Result<Config, ConfigError> {
    from_figment(&figment())
}

pub fn from_figment(figment: &Figment) -> Result<Config, ConfigError> {
    let config: Config = figment.extract().map_err(Box::new)?;
    if config.seating.table_count == 0 {
        return Err(ConfigError::EmptyLayout("table_count"));
    }
    if config.seating.table_capacity == 0 {
        return Err(ConfigError::EmptyLayout("table_capacity"));
    }
    Ok(config)
}
