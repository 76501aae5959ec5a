//! Portal Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus the wire model of the
//! remote characters API.

pub mod adapters;
pub mod api;
pub mod config;
pub mod model;
pub mod repository;

pub use adapters::ReqwestCharactersApi;
pub use api::{ApiResponse, CharactersApi, TransportError};
pub use config::{ApiConfig, ConfigError};
pub use model::{CharacterResponse, CharacterStatusResponse, CharactersResponse};
pub use repository::DefaultCharactersRepository;
