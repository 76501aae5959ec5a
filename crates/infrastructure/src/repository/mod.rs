//! Characters repository implementation.
//!
//! Turns a single `CharactersApi` call into exactly one `NetworkResult`.
//! Every failure is recovered here; nothing escapes as an `Err`.

use async_trait::async_trait;
use tracing::{debug, warn};

use portal_application::ports::CharactersRepository;
use portal_domain::{Characters, NetworkResult};

use crate::api::CharactersApi;

/// Message emitted when a successful response carries no body.
pub const EMPTY_BODY_MESSAGE: &str = "Response body was empty";

/// `CharactersRepository` backed by a `CharactersApi` transport.
#[derive(Debug, Clone)]
pub struct DefaultCharactersRepository<A> {
    api: A,
}

impl<A: CharactersApi> DefaultCharactersRepository<A> {
    /// Creates a repository over the given transport.
    pub const fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: CharactersApi> CharactersRepository for DefaultCharactersRepository<A> {
    async fn get_characters(&self) -> NetworkResult<Characters> {
        match self.api.get_characters().await {
            Ok(response) if response.is_successful() => match response.body {
                Some(body) => {
                    let characters = body.to_domain();
                    debug!(count = characters.len(), "characters fetched");
                    NetworkResult::success(characters)
                }
                None => {
                    warn!(status = response.status, "successful response without a body");
                    NetworkResult::error(EMPTY_BODY_MESSAGE)
                }
            },
            Ok(response) => {
                warn!(status = response.status, "characters request rejected");
                NetworkResult::error(format!("Error occurred: {}", response.status))
            }
            Err(e) => {
                warn!(error = %e, "characters request failed");
                let message = e.to_string();
                if message.is_empty() {
                    NetworkResult::error_without_message()
                } else {
                    NetworkResult::error(message)
                }
            }
        }
    }
}
