//! Domain entities

mod pokemon;

pub use pokemon::{FlavorTextEntry, Pokemon, PokemonDraft};
