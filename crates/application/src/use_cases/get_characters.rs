//! Get characters use case

use std::sync::Arc;

use portal_domain::{Characters, NetworkResult};

use crate::ports::CharactersRepository;

/// Fetches the character list through a `CharactersRepository`.
///
/// Keeps the presentation layer away from the concrete repository type.
/// Cloning is cheap and shares the same repository.
pub struct GetCharacters<R> {
    repository: Arc<R>,
}

impl<R: CharactersRepository> GetCharacters<R> {
    /// Creates a new `GetCharacters` use case.
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Executes the use case, returning the repository's result unchanged.
    pub async fn execute(&self) -> NetworkResult<Characters> {
        self.repository.get_characters().await
    }
}

impl<R> Clone for GetCharacters<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
