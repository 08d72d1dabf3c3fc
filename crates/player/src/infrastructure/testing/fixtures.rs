//! Simple test fixtures used across unit tests.

use serde_json::{json, Value};

use pokedex_domain::{FlavorTextEntry, Pokemon, PokemonId};

use crate::ports::outbound::ApiError;

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

pub fn pokemon_id(id: &str) -> PokemonId {
    PokemonId::new(id).unwrap()
}

pub fn sample_pokemon(id: &str, name: &str) -> Pokemon {
    Pokemon {
        id: pokemon_id(id),
        name: name.to_string(),
        base_happiness: Some(70),
        capture_rate: Some(45),
        color: "green".to_string(),
        egg_groups: vec!["monster".to_string(), "plant".to_string()],
        evolution_chain: "https://pokeapi.co/api/v2/evolution-chain/1/".to_string(),
        flavor_text_entries: vec![FlavorTextEntry::new(
            "A strange seed was planted on its back at birth.",
            "en",
            "red",
        )],
    }
}

/// Backend document for `sample_pokemon`
pub fn sample_pokemon_json(id: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "base_happiness": 70,
        "capture_rate": 45,
        "color": "green",
        "egg_groups": ["monster", "plant"],
        "evolution_chain": "https://pokeapi.co/api/v2/evolution-chain/1/",
        "flavor_text_entries": [
            {
                "_id": format!("{id}-ft-0"),
                "flavor_text": "A strange seed was planted on its back at birth.",
                "language": "en",
                "version": "red"
            }
        ],
        "__v": 0
    })
}
