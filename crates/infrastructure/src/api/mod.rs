//! Characters API transport port
//!
//! The repository consumes this trait rather than talking to reqwest
//! directly, so transport behavior can be stubbed in tests.

use async_trait::async_trait;

use crate::model::CharactersResponse;

/// Path of the character list endpoint, relative to the API base URL.
pub const CHARACTERS_PATH: &str = "api/character";

/// A response obtained from the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// HTTP status code.
    pub status: u16,
    /// Decoded body. Only present for successful responses that had one.
    pub body: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Creates a response with a decoded body.
    #[must_use]
    pub const fn ok(status: u16, body: T) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    /// Creates a response without a body.
    #[must_use]
    pub const fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    /// Returns true if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Failures that prevent a response from being obtained at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request did not complete in time.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The timeout that elapsed.
        timeout_ms: u64,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The endpoint URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other transport failure, described verbatim.
    #[error("{0}")]
    Other(String),
}

/// Port for fetching the raw character list.
#[async_trait]
pub trait CharactersApi: Send + Sync {
    /// Performs `GET /api/character`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` when no response could be obtained.
    /// Non-2xx statuses are not errors here; they come back as an
    /// `ApiResponse` without a body.
    async fn get_characters(&self) -> Result<ApiResponse<CharactersResponse>, TransportError>;
}
