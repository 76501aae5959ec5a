//! Wire model for the characters endpoint and its mapping to the domain.
//!
//! Every field is optional because the remote schema is not trusted to be
//! complete. Mapping never fails; missing data degrades to defaults.

use serde::{Deserialize, Deserializer, Serialize};

use portal_domain::{Character, Characters};

/// Character status as sent by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CharacterStatusResponse {
    /// `"Alive"`
    Alive,
    /// `"Dead"`
    Dead,
    /// `"unknown"`, and any status string this client does not recognise.
    #[serde(rename = "unknown")]
    Unknown,
}

impl CharacterStatusResponse {
    /// Parses the wire string. Unrecognised values map to `Unknown`.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "Alive" => Self::Alive,
            "Dead" => Self::Dead,
            _ => Self::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for CharacterStatusResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&value))
    }
}

/// A single character as sent by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterResponse {
    /// Remote identifier.
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Life status.
    #[serde(default)]
    pub status: Option<CharacterStatusResponse>,
    /// Avatar image URL.
    #[serde(default)]
    pub image: Option<String>,
}

impl CharacterResponse {
    /// Converts to a domain `Character`, filling in defaults.
    ///
    /// Only `Alive` maps to `is_alive == true`; `Dead`, `Unknown` and an
    /// absent status all map to `false`.
    #[must_use]
    pub fn to_domain(&self) -> Character {
        Character {
            id: self.id.unwrap_or_default(),
            name: self.name.clone().unwrap_or_default(),
            is_alive: self.status == Some(CharacterStatusResponse::Alive),
            image_url: self.image.clone().unwrap_or_default(),
        }
    }
}

/// Body of `GET /api/character`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharactersResponse {
    /// The page of characters.
    #[serde(default)]
    pub results: Option<Vec<CharacterResponse>>,
}

impl CharactersResponse {
    /// Converts to domain `Characters`. Absent or empty results yield an
    /// empty collection.
    #[must_use]
    pub fn to_domain(&self) -> Characters {
        match self.results.as_deref() {
            None | Some([]) => Characters::empty(),
            Some(results) => results.iter().map(CharacterResponse::to_domain).collect(),
        }
    }
}
