//! Pokemon entity - a species record managed through the admin client
//!
//! The backend owns identity and storage. The client reads whole records,
//! sends whole drafts back (create and full replace), and never patches.

use crate::ids::PokemonId;

/// A Pokemon record as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
    /// Absent when the record was created from non-numeric input
    pub base_happiness: Option<i64>,
    pub capture_rate: Option<i64>,
    pub color: String,
    /// Ordered, duplicates allowed
    pub egg_groups: Vec<String>,
    /// URL-shaped reference, never dereferenced by the client
    pub evolution_chain: String,
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

/// A localized description of a Pokemon from one game version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlavorTextEntry {
    pub text: String,
    pub language: String,
    pub version: String,
}

impl FlavorTextEntry {
    pub fn new(
        text: impl Into<String>,
        language: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            version: version.into(),
        }
    }

    /// True when none of the three sub-fields is empty.
    pub fn is_complete(&self) -> bool {
        !self.text.is_empty() && !self.language.is_empty() && !self.version.is_empty()
    }
}

/// Record body without an id: what create and update submit.
///
/// Integer fields are `None` when the form input had no leading digits;
/// that is sent to the backend as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PokemonDraft {
    pub name: String,
    pub base_happiness: Option<i64>,
    pub capture_rate: Option<i64>,
    pub color: String,
    pub egg_groups: Vec<String>,
    pub evolution_chain: String,
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_entry_detection() {
        assert!(FlavorTextEntry::new("Loves fire.", "en", "red").is_complete());
        assert!(!FlavorTextEntry::new("Loves fire.", "", "red").is_complete());
        assert!(!FlavorTextEntry::new("", "en", "red").is_complete());
        assert!(!FlavorTextEntry::new("Loves fire.", "en", "").is_complete());
    }
}
