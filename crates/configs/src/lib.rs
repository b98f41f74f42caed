//! # configs
//!
//! Typed runtime settings for thesisdesk. Defaults are baked in and can be
//! overridden from the environment (and a local `.env` file) with the
//! `THESISDESK_` prefix, e.g. `THESISDESK_MATCHING__MIN_DURATION_MINUTES=90`.
//! Sections are separated from field names with a double underscore.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Tunables for the availability matcher.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Minimum qualifying window length, in minutes.
    pub min_duration_minutes: i64,
    /// Per-participant lookup timeout, in milliseconds.
    pub lookup_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// tracing env-filter directive, e.g. "info" or "services=debug".
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub matching: MatchingSettings,
    pub log: LogSettings,
}

impl Settings {
    /// Loads settings from defaults, `.env`, and the process environment.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::from_env(Self::env_source())
    }

    /// The `THESISDESK_SECTION__FIELD` environment source: a single
    /// underscore after the prefix, a double underscore between section
    /// and field.
    fn env_source() -> config::Environment {
        config::Environment::with_prefix("THESISDESK")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn from_env(env: config::Environment) -> Result<Self, SettingsError> {
        let cfg = config::Config::builder()
            .set_default("matching.min_duration_minutes", 60)?
            .set_default("matching.lookup_timeout_ms", 3_000)?
            .set_default("log.filter", "info")?
            .add_source(env)
            .build()?;

        Ok(cfg.try_deserialize()?)
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.matching.lookup_timeout_ms)
    }
}
