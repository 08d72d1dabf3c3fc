//! Wire-format Pokemon records
//!
//! Field names follow the backend's documents (`_id`, snake_case,
//! `flavor_text`). Conversions to the domain model live here so neither
//! side has to know the other's naming.

use serde::{Deserialize, Serialize};

use pokedex_domain::{DomainError, FlavorTextEntry, Pokemon, PokemonId};

/// A Pokemon record as returned by `GET /pokemons` and `GET /pokemons/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonData {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub base_happiness: Option<i64>,
    #[serde(default)]
    pub capture_rate: Option<i64>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub egg_groups: Vec<String>,
    #[serde(default)]
    pub evolution_chain: String,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntryData>,
}

/// One flavor-text entry on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorTextEntryData {
    /// Backend sub-document id; read but never sent
    #[serde(rename = "_id", default, skip_serializing)]
    pub id: Option<String>,
    pub flavor_text: String,
    pub language: String,
    pub version: String,
}

impl TryFrom<PokemonData> for Pokemon {
    type Error = DomainError;

    fn try_from(data: PokemonData) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PokemonId::new(data.id)?,
            name: data.name,
            base_happiness: data.base_happiness,
            capture_rate: data.capture_rate,
            color: data.color,
            egg_groups: data.egg_groups,
            evolution_chain: data.evolution_chain,
            flavor_text_entries: data
                .flavor_text_entries
                .into_iter()
                .map(FlavorTextEntry::from)
                .collect(),
        })
    }
}

impl From<FlavorTextEntryData> for FlavorTextEntry {
    fn from(data: FlavorTextEntryData) -> Self {
        Self {
            text: data.flavor_text,
            language: data.language,
            version: data.version,
        }
    }
}

impl From<FlavorTextEntry> for FlavorTextEntryData {
    fn from(entry: FlavorTextEntry) -> Self {
        Self {
            id: None,
            flavor_text: entry.text,
            language: entry.language,
            version: entry.version,
        }
    }
}
