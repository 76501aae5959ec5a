//! Characters API implementation using reqwest.
//!
//! This adapter implements the `CharactersApi` port. It owns the HTTP
//! client configuration and logs every exchange at debug level.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::api::{ApiResponse, CHARACTERS_PATH, CharactersApi, TransportError};
use crate::config::ApiConfig;
use crate::model::CharactersResponse;

/// `CharactersApi` backed by `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestCharactersApi {
    client: Client,
    endpoint: Url,
    timeout_ms: u64,
}

impl ReqwestCharactersApi {
    /// Creates a client from configuration.
    ///
    /// Configuration applied:
    /// - Whole-request timeout from `config.timeout`
    /// - Follow redirects: up to 10
    /// - User-Agent from `config.user_agent`
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL cannot be built or the
    /// client cannot be created.
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Self::with_client(client, config)
    }

    /// Creates a client around an existing `reqwest::Client`.
    ///
    /// The timeout in `config` is only used for error reporting; the
    /// supplied client's own settings govern the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL cannot be built.
    pub fn with_client(client: Client, config: &ApiConfig) -> Result<Self, TransportError> {
        let endpoint = config
            .base_url
            .join(CHARACTERS_PATH)
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {}", config.base_url)))?;

        Ok(Self {
            client,
            endpoint,
            timeout_ms: u64::try_from(config.timeout.as_millis()).unwrap_or(u64::MAX),
        })
    }

    /// The fully resolved endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(&self, error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout {
                timeout_ms: self.timeout_ms,
            };
        }

        if error.is_connect() {
            return TransportError::Connection(error.to_string());
        }

        if error.is_decode() || error.is_body() {
            return TransportError::Decode(error.to_string());
        }

        TransportError::Other(error.to_string())
    }
}

#[async_trait]
impl CharactersApi for ReqwestCharactersApi {
    async fn get_characters(&self) -> Result<ApiResponse<CharactersResponse>, TransportError> {
        debug!(url = %self.endpoint, "GET characters");
        let start = Instant::now();

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| self.map_error(&e))?;

        let status = response.status().as_u16();

        if !response.status().is_success() {
            debug!(status, elapsed_ms = start.elapsed().as_millis(), "characters request failed");
            return Ok(ApiResponse::empty(status));
        }

        let bytes = response.bytes().await.map_err(|e| self.map_error(&e))?;
        debug!(
            status,
            body_len = bytes.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "characters response received"
        );

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ApiResponse::empty(status));
        }

        let body: CharactersResponse =
            serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))?;

        Ok(ApiResponse::ok(status, body))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_creation() {
        let api = ReqwestCharactersApi::new(&ApiConfig::default());
        assert!(api.is_ok());
    }

    #[test]
    fn test_endpoint_is_joined_onto_base() {
        let api = ReqwestCharactersApi::new(&ApiConfig::default()).unwrap();
        assert_eq!(api.endpoint().as_str(), "https://rickandmortyapi.com/api/character");

        let config = ApiConfig::new("http://127.0.0.1:9000/mirror").unwrap();
        let api = ReqwestCharactersApi::new(&config).unwrap();
        assert_eq!(api.endpoint().as_str(), "http://127.0.0.1:9000/mirror/api/character");
    }

    #[test]
    fn test_timeout_is_recorded_in_millis() {
        let config = ApiConfig::default().with_timeout(Duration::from_millis(1500));
        let api = ReqwestCharactersApi::new(&config).unwrap();
        assert_eq!(api.timeout_ms, 1500);
    }
}
