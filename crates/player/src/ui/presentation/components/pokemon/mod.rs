//! Pokemon-specific components

mod pokemon_card;
pub use pokemon_card::PokemonCard;

mod pokemon_form_fields;
pub use pokemon_form_fields::PokemonFormFields;
