//! URL routing
//!
//! Route components set the page title and render the matching view.

use dioxus::prelude::*;

mod pokemon_routes;

use pokemon_routes::{AddPokemonRoute, NotFoundRoute, PokemonListRoute, UpdatePokemonRoute};

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    PokemonListRoute {},
    #[route("/add-pokemon")]
    AddPokemonRoute {},
    #[route("/update-pokemon/:id")]
    UpdatePokemonRoute { id: String },
    #[route("/:..segments")]
    NotFoundRoute { segments: Vec<String> },
}
