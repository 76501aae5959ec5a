//! Character domain model.

use serde::{Deserialize, Serialize};

/// A character as seen by business logic and presentation.
///
/// All fields are always present; missing data from the remote API has
/// already been replaced with defaults by the time a `Character` exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Remote identifier, `0` when the API omitted it.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Whether the character's status is "Alive".
    pub is_alive: bool,
    /// Avatar image URL.
    pub image_url: String,
}

impl Character {
    /// Creates a new character.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, is_alive: bool, image_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_alive,
            image_url: image_url.into(),
        }
    }
}

/// Ordered collection of characters returned by a single fetch.
///
/// An empty collection is a valid result, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characters {
    /// Characters in the order the API returned them.
    pub results: Vec<Character>,
}

impl Characters {
    /// Wraps a list of characters.
    #[must_use]
    pub const fn new(results: Vec<Character>) -> Self {
        Self { results }
    }

    /// Creates an empty collection.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if there are no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterates over the characters in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Character> {
        self.results.iter()
    }
}

impl From<Vec<Character>> for Characters {
    fn from(results: Vec<Character>) -> Self {
        Self::new(results)
    }
}

impl FromIterator<Character> for Characters {
    fn from_iter<I: IntoIterator<Item = Character>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Characters {
    type Item = Character;
    type IntoIter = std::vec::IntoIter<Character>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a Characters {
    type Item = &'a Character;
    type IntoIter = std::slice::Iter<'a, Character>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_collection() {
        let characters = Characters::empty();
        assert!(characters.is_empty());
        assert_eq!(characters.len(), 0);
        assert_eq!(characters, Characters::default());
    }

    #[test]
    fn test_iteration_preserves_order() {
        let characters = Characters::from(vec![
            Character::new(1, "Rick Sanchez", true, "https://example.com/1.jpeg"),
            Character::new(2, "Morty Smith", true, "https://example.com/2.jpeg"),
            Character::new(3, "Birdperson", false, "https://example.com/3.jpeg"),
        ]);

        let ids: Vec<i64> = characters.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let names: Vec<String> = characters.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Rick Sanchez", "Morty Smith", "Birdperson"]);
    }
}
