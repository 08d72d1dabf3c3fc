use serde::{Deserialize, Serialize};

use pokedex_domain::PokemonDraft;

use crate::dto::FlavorTextEntryData;

/// Body of `POST /pokemons` and `PUT /pokemons/{id}`.
///
/// Updates replace the whole record, so both requests carry every field.
/// Integer fields without a value are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonPayload {
    pub name: String,
    pub base_happiness: Option<i64>,
    pub capture_rate: Option<i64>,
    pub color: String,
    pub egg_groups: Vec<String>,
    pub evolution_chain: String,
    pub flavor_text_entries: Vec<FlavorTextEntryData>,
}

impl From<PokemonDraft> for PokemonPayload {
    fn from(draft: PokemonDraft) -> Self {
        Self {
            name: draft.name,
            base_happiness: draft.base_happiness,
            capture_rate: draft.capture_rate,
            color: draft.color,
            egg_groups: draft.egg_groups,
            evolution_chain: draft.evolution_chain,
            flavor_text_entries: draft
                .flavor_text_entries
                .into_iter()
                .map(FlavorTextEntryData::from)
                .collect(),
        }
    }
}
