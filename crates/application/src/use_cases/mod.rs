//! Application use cases (business logic orchestration).

mod get_characters;

pub use get_characters::*;
