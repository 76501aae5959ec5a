//! UI state holders.

mod characters_view_model;

pub use characters_view_model::{CharactersState, CharactersViewModel};
