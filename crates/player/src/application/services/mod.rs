//! Application services
//!
//! Use cases for the Pokemon client. Services depend on port traits, not
//! concrete infrastructure implementations.

pub mod pokemon_service;

pub use pokemon_service::PokemonService;
