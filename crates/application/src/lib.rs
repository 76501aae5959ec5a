//! Portal Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - Use case orchestration

pub mod ports;
pub mod use_cases;

pub use ports::CharactersRepository;
pub use use_cases::GetCharacters;
