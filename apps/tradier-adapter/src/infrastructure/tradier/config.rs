//! Tradier adapter configuration.

use std::fmt;
use std::time::Duration;

use super::error::{TradierError, TransportFailure};

/// API version segment prepended to every path.
pub const API_VERSION: &str = "v1";

/// Per-request time budget.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(45);

/// Concurrent requests a shared session is sized for.
pub const DEFAULT_MAX_CONNECTIONS: usize = 4;

/// Environment for the Tradier API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TradierEnvironment {
    /// Brokerage production API (real money).
    Production,
    /// Developer sandbox (delayed data, simulated trading).
    #[default]
    Sandbox,
}

impl TradierEnvironment {
    /// Parse environment from string.
    #[must_use]
    pub fn from_str_case_insensitive(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" | "live" => Self::Production,
            _ => Self::Sandbox,
        }
    }

    /// Get the base URL for the REST API.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://api.tradier.com",
            Self::Sandbox => "https://sandbox.tradier.com",
        }
    }

    /// Check if this is the production environment.
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for TradierEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "PRODUCTION"),
            Self::Sandbox => write!(f, "SANDBOX"),
        }
    }
}

/// Bearer token sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a token string.
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// Get the token.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns true if the token is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// Configuration for the Tradier adapter.
#[derive(Debug, Clone)]
pub struct TradierConfig {
    /// Bearer token.
    pub access_token: AccessToken,
    /// API environment.
    pub environment: TradierEnvironment,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Connection pool size for sessions built by this config.
    pub max_connections: usize,
    /// Replaces the environment's base URL when set.
    pub base_url_override: Option<String>,
}

impl TradierConfig {
    /// Create a new configuration.
    #[must_use]
    pub fn new(access_token: impl Into<String>, environment: TradierEnvironment) -> Self {
        Self {
            access_token: AccessToken::new(access_token.into()),
            environment,
            timeout: DEFAULT_TIMEOUT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            base_url_override: None,
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connection pool size.
    #[must_use]
    pub const fn with_max_connections(mut self, max_connections: usize) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Point the adapter at a different host.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url_override
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
            .trim_end_matches('/')
    }

    /// `<base-url>/<api-version>` prefix for every request.
    #[must_use]
    pub fn api_root(&self) -> String {
        format!("{}/{API_VERSION}", self.base_url())
    }

    /// Build a client suitable for sharing across concurrent adapter calls.
    ///
    /// Only idle connections kept for reuse are bounded here. The
    /// concurrent request ceiling is applied by the borrowed [`Session`].
    ///
    /// [`Session`]: super::session::Session
    pub fn build_session(&self) -> Result<reqwest::Client, TradierError> {
        reqwest::Client::builder()
            .pool_max_idle_per_host(self.max_connections)
            .timeout(self.timeout)
            .build()
            .map_err(|e| TradierError::Transport(TransportFailure::Session(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_urls() {
        assert_eq!(
            TradierEnvironment::Production.base_url(),
            "https://api.tradier.com"
        );
        assert!(TradierEnvironment::Sandbox.base_url().contains("sandbox"));
        assert!(TradierEnvironment::Production.is_production());
        assert!(!TradierEnvironment::Sandbox.is_production());
    }

    #[test]
    fn environment_parsing() {
        assert_eq!(
            TradierEnvironment::from_str_case_insensitive("PRODUCTION"),
            TradierEnvironment::Production
        );
        assert_eq!(
            TradierEnvironment::from_str_case_insensitive("live"),
            TradierEnvironment::Production
        );
        assert_eq!(
            TradierEnvironment::from_str_case_insensitive("sandbox"),
            TradierEnvironment::Sandbox
        );
        assert_eq!(
            TradierEnvironment::from_str_case_insensitive("unknown"),
            TradierEnvironment::Sandbox
        );
    }

    #[test]
    fn environment_display() {
        assert_eq!(format!("{}", TradierEnvironment::Production), "PRODUCTION");
        assert_eq!(format!("{}", TradierEnvironment::Sandbox), "SANDBOX");
    }

    #[test]
    fn config_defaults() {
        let config = TradierConfig::new("token", TradierEnvironment::Sandbox);
        assert_eq!(config.timeout, Duration::from_secs(45));
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.api_root(), "https://sandbox.tradier.com/v1");
    }

    #[test]
    fn config_with_timeout() {
        let config = TradierConfig::new("token", TradierEnvironment::Sandbox)
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn base_url_override_strips_trailing_slash() {
        let config = TradierConfig::new("token", TradierEnvironment::Production)
            .with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
        assert_eq!(config.api_root(), "http://127.0.0.1:8080/v1");
    }

    #[test]
    fn access_token_redacted_debug() {
        let config = TradierConfig::new("secret-token", TradierEnvironment::Sandbox);
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn blank_token() {
        assert!(AccessToken::new("  ".to_string()).is_blank());
        assert!(!AccessToken::new("abc".to_string()).is_blank());
    }

    #[test]
    fn build_session_succeeds() {
        let config = TradierConfig::new("token", TradierEnvironment::Sandbox);
        assert!(config.build_session().is_ok());
    }
}
