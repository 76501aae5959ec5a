//! Portal Domain - Core business types
//!
//! This crate defines the domain model for the Portal character client.
//! All types here are pure Rust with no I/O dependencies.

pub mod character;
pub mod state;

pub use character::{Character, Characters};
pub use state::NetworkResult;
