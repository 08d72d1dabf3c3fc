//! Response envelopes returned by the REST backend

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dto::PokemonData;

/// `GET /pokemons`
///
/// Documents stay raw until [`PokemonListResponse::records`] so a single
/// malformed record cannot fail the whole envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonListResponse {
    pub pokemons: Vec<Value>,
}

impl PokemonListResponse {
    /// Decode each document on its own, in backend order
    pub fn records(self) -> impl Iterator<Item = Result<PokemonData, serde_json::Error>> {
        self.pokemons.into_iter().map(serde_json::from_value)
    }
}

/// `GET /pokemons/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonResponse {
    pub pokemon: PokemonData,
}
