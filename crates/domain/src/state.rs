//! Fetch lifecycle state for UI binding.
//!
//! `NetworkResult` carries both the fetched data and the status of the
//! fetch through every layer, so the UI can show the right feedback:
//! - `Loading`: fetch in flight, show a spinner
//! - `Success`: data received, show it
//! - `Error`: fetch failed, show the message

use serde::{Deserialize, Serialize};

/// Outcome of a single fetch attempt.
///
/// Exactly one variant is active. Failures travel as the `Error` variant
/// rather than as a Rust `Err`, so consumers handle all three cases in a
/// single `match`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NetworkResult<T> {
    /// The fetch has not produced an outcome yet.
    Loading,

    /// The fetch completed and produced data.
    Success {
        /// The fetched payload.
        data: T,
    },

    /// The fetch failed.
    Error {
        /// Human-readable description, when one is available.
        message: Option<String>,
    },
}

impl<T> Default for NetworkResult<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> NetworkResult<T> {
    /// Creates a `Success` state.
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self::Success { data }
    }

    /// Creates an `Error` state with a message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: Some(message.into()),
        }
    }

    /// Creates an `Error` state without a message.
    #[must_use]
    pub const fn error_without_message() -> Self {
        Self::Error { message: None }
    }

    /// Returns true if the fetch is still in progress.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true if the fetch succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns true if the fetch failed.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Returns true once the fetch has produced an outcome.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !self.is_loading()
    }

    /// Returns the payload if in `Success` state.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            _ => None,
        }
    }

    /// Returns the error message if in `Error` state and one was recorded.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => message.as_deref(),
            _ => None,
        }
    }

    /// Transforms the payload of a `Success`, leaving other states as-is.
    pub fn map<U, F>(self, f: F) -> NetworkResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Loading => NetworkResult::Loading,
            Self::Success { data } => NetworkResult::Success { data: f(data) },
            Self::Error { message } => NetworkResult::Error { message },
        }
    }
}
