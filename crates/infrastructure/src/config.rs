//! API client configuration.
//!
//! Values come from the environment with built-in fallbacks:
//! - `PORTAL_BASE_URL`: API root (default `https://rickandmortyapi.com/`)
//! - `PORTAL_TIMEOUT_SECS`: whole-request timeout in seconds (default 30)

use std::time::Duration;

use url::Url;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/";

/// Default whole-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable overriding the API root.
pub const BASE_URL_VAR: &str = "PORTAL_BASE_URL";

/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_VAR: &str = "PORTAL_TIMEOUT_SECS";

/// Errors raised while building an `ApiConfig`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The base URL could not be parsed or cannot carry a path.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The timeout was not a positive whole number of seconds.
    #[error("invalid timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Settings for the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API root the endpoint path is joined onto.
    pub base_url: Url,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl ApiConfig {
    /// Creates a configuration for the given base URL with default
    /// timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if the URL does not parse or
    /// cannot be a base for other URLs.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        })
    }

    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Unset or blank keys fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a value is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = read(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(base_url.trim())?;

        if let Some(raw) = read(TIMEOUT_VAR) {
            config.timeout = parse_timeout(&raw)?;
        }

        Ok(config)
    }

    /// Replaces the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("default base URL is valid")
    }
}

fn default_user_agent() -> String {
    format!("Portal/{}", env!("CARGO_PKG_VERSION"))
}

/// Parses a base URL, ensuring a trailing slash so relative joins keep any
/// path prefix (`http://host/proxy` + `api/character` → `/proxy/api/character`).
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be a base".to_string()));
    }
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}
