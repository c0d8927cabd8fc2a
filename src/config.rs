//! Application configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app runs in the browser, where there is no process environment, so
//! overrides are read with `option_env!` when the WASM bundle is compiled.
//! Parsing goes through [`AppConfig::from_lookup`] so it can be tested
//! against an ordinary map.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use crate::state::shell::ActiveView;
use crate::util::time::DEFAULT_TIMESTAMP_FORMAT;

pub const DEFAULT_VALUES_KEY: &str = "gameValues";
pub const DEFAULT_HISTORY_KEY: &str = "generatedCurrencyHistory";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Parse { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Store key holding the named-value registry.
    pub values_key: String,
    /// Store key holding the currency generation log.
    pub history_key: String,
    pub initial_view: ActiveView,
    /// strftime-style format for log entry timestamps.
    pub timestamp_format: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            values_key: DEFAULT_VALUES_KEY.to_owned(),
            history_key: DEFAULT_HISTORY_KEY.to_owned(),
            initial_view: ActiveView::default(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Build typed config from a key lookup.
    ///
    /// Optional (empty values count as unset):
    /// - `GUS_VALUES_KEY`: default `gameValues`
    /// - `GUS_HISTORY_KEY`: default `generatedCurrencyHistory`
    /// - `GUS_INITIAL_VIEW`: `editor` (default) or `generator`
    /// - `GUS_TIMESTAMP_FORMAT`: default `%d/%m/%Y, %H:%M:%S`
    /// - `GUS_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let initial_view = match get("GUS_INITIAL_VIEW") {
            Some(raw) => parse_view(&raw)?,
            None => defaults.initial_view,
        };
        let log_level = match get("GUS_LOG_LEVEL") {
            Some(raw) => log::Level::from_str(raw.trim())
                .map_err(|_| ConfigError::Parse { key: "GUS_LOG_LEVEL", value: raw.clone() })?,
            None => defaults.log_level,
        };

        Ok(Self {
            values_key: get("GUS_VALUES_KEY").unwrap_or(defaults.values_key),
            history_key: get("GUS_HISTORY_KEY").unwrap_or(defaults.history_key),
            initial_view,
            timestamp_format: get("GUS_TIMESTAMP_FORMAT").unwrap_or(defaults.timestamp_format),
            log_level,
        })
    }

    /// Build config from variables captured when the crate was compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let raw = match key {
                "GUS_VALUES_KEY" => option_env!("GUS_VALUES_KEY"),
                "GUS_HISTORY_KEY" => option_env!("GUS_HISTORY_KEY"),
                "GUS_INITIAL_VIEW" => option_env!("GUS_INITIAL_VIEW"),
                "GUS_TIMESTAMP_FORMAT" => option_env!("GUS_TIMESTAMP_FORMAT"),
                "GUS_LOG_LEVEL" => option_env!("GUS_LOG_LEVEL"),
                _ => None,
            };
            raw.map(str::to_owned)
        })
    }
}

fn parse_view(raw: &str) -> Result<ActiveView, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "editor" => Ok(ActiveView::Editor),
        "generator" => Ok(ActiveView::Generator),
        _ => Err(ConfigError::Parse { key: "GUS_INITIAL_VIEW", value: raw.to_owned() }),
    }
}
