//! Application DTOs
//!
//! Form state as edited by the views, independent of any UI framework.

pub mod pokemon_form;

pub use pokemon_form::PokemonForm;
