//! Top-level views, one per route

pub mod add_pokemon;
pub mod pokemon_list;
pub mod update_pokemon;

pub use add_pokemon::AddPokemonView;
pub use pokemon_list::PokemonListView;
pub use update_pokemon::UpdatePokemonView;
