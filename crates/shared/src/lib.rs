//! Pokedex Shared - wire contracts for the Pokemon REST backend
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - serde and the domain crate only
//! 2. **No business logic** - data shapes and domain conversions
//! 3. **WASM compatible** - must compile for both native and wasm32 targets

pub mod dto;
pub mod requests;
pub mod responses;

pub use dto::{FlavorTextEntryData, PokemonData};
pub use requests::PokemonPayload;
pub use responses::{PokemonListResponse, PokemonResponse};

/// REST paths, relative to the configured API base URL
pub mod paths {
    /// Collection path for list and create
    pub const POKEMONS: &str = "/pokemons";

    /// Item path for get, update and delete
    pub fn pokemon(id: &str) -> String {
        format!("{POKEMONS}/{id}")
    }
}
