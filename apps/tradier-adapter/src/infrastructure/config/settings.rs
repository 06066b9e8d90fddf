//! Adapter Settings
//!
//! Settings for the adapter binary, loaded from environment variables.

use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::tradier::{
    DEFAULT_MAX_CONNECTIONS, DEFAULT_TIMEOUT, TradierConfig, TradierEnvironment,
};

/// Default symbol used by the binary's market data walk-through.
pub const DEFAULT_SYMBOL: &str = "SPY";

/// Complete adapter settings.
#[derive(Debug, Clone)]
pub struct AdapterSettings {
    /// Adapter configuration (token, environment, timeout, pool size).
    pub tradier: TradierConfig,
    /// Account to query. Taken from the user profile when unset.
    pub account_id: Option<String>,
    /// Symbol for the market data walk-through.
    pub symbol: String,
}

impl AdapterSettings {
    /// Create settings from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the access token is missing or empty, or if a
    /// numeric setting cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create settings from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AdapterSettings::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = lookup("TRADIER_ACCESS_TOKEN")
            .ok_or_else(|| ConfigError::MissingEnvVar("TRADIER_ACCESS_TOKEN".to_string()))?;

        if access_token.trim().is_empty() {
            return Err(ConfigError::EmptyValue("TRADIER_ACCESS_TOKEN".to_string()));
        }

        let environment = lookup("TRADIER_ENV")
            .map(|s| TradierEnvironment::from_str_case_insensitive(&s))
            .unwrap_or_default();

        let timeout = parse_duration_secs(&lookup, "TRADIER_TIMEOUT_SECS", DEFAULT_TIMEOUT)?;
        let max_connections = parse_positive(
            &lookup,
            "TRADIER_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;

        let mut tradier = TradierConfig::new(access_token, environment)
            .with_timeout(timeout)
            .with_max_connections(max_connections);

        if let Some(base_url) = non_empty(lookup("TRADIER_BASE_URL")) {
            tradier = tradier.with_base_url(base_url);
        }

        Ok(Self {
            tradier,
            account_id: non_empty(lookup("TRADIER_ACCOUNT_ID")),
            symbol: non_empty(lookup("TRADIER_SYMBOL")).unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
    /// Environment variable could not be parsed.
    #[error("environment variable {key} has invalid value {value:?}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Rejected value.
        value: String,
    },
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a strictly positive number, falling back to `default` when unset.
fn parse_positive<T, F>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup(key)) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .ok()
            .filter(|n| *n > T::default())
            .ok_or(ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
    }
}

fn parse_duration_secs<F>(lookup: &F, key: &str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    parse_positive(lookup, key, default.as_secs()).map(Duration::from_secs)
}
