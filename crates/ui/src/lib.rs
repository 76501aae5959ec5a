//! Portal UI - Presentation layer
//!
//! This crate holds the observable character list state and renders it
//! as text for the terminal front end.

pub mod state;
pub mod view;

pub use state::{CharactersState, CharactersViewModel};
pub use view::CharacterListView;
