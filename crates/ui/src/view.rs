//! Text rendering of the character list state.

use portal_domain::{Character, Characters, NetworkResult};

/// Placeholder shown while the fetch is in flight.
pub const LOADING_TEXT: &str = "Loading characters...";

/// Shown when the fetch succeeded with no characters.
pub const EMPTY_TEXT: &str = "No characters found";

/// Renders the character list screen as plain text lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterListView;

impl CharacterListView {
    /// Renders every state of the list:
    /// - `Loading`: a single placeholder line
    /// - `Error`: the message, or an empty line when there is none
    /// - `Success`: one line per character, or `EMPTY_TEXT`
    #[must_use]
    pub fn render(state: &NetworkResult<Characters>) -> Vec<String> {
        match state {
            NetworkResult::Loading => vec![LOADING_TEXT.to_string()],
            NetworkResult::Error { message } => vec![message.clone().unwrap_or_default()],
            NetworkResult::Success { data } if data.is_empty() => vec![EMPTY_TEXT.to_string()],
            NetworkResult::Success { data } => data.iter().map(Self::render_item).collect(),
        }
    }

    /// Renders a single character row.
    #[must_use]
    pub fn render_item(character: &Character) -> String {
        let status = if character.is_alive { "alive" } else { "dead" };
        format!(
            "ID: {} | Name: {} | Status: {status} | Image: {}",
            character.id, character.name, character.image_url
        )
    }
}
