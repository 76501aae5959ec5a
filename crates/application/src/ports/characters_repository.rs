//! Characters repository port
//!
//! Defines the interface the application uses to obtain characters.

use async_trait::async_trait;

use portal_domain::{Characters, NetworkResult};

/// Repository trait for fetching characters.
///
/// Implementations perform one fetch per call and fold every failure into
/// `NetworkResult::Error`, so callers never see a Rust `Err`.
#[async_trait]
pub trait CharactersRepository: Send + Sync {
    /// Fetches the character list.
    ///
    /// The returned future resolves to exactly one `Success` or `Error`
    /// value and then completes. It never resolves to `Loading`.
    async fn get_characters(&self) -> NetworkResult<Characters>;
}
