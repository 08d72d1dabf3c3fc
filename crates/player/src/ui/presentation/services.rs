//! Service providers for the presentation layer
//!
//! Application services are handed to the Dioxus runtime as context by the
//! runner. Components use the hooks below and never touch infrastructure
//! adapter types.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::PokemonService;
use crate::ports::outbound::RawApiPort;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub pokemon: Arc<PokemonService>,
}

impl Services {
    pub fn new(raw_api: Arc<dyn RawApiPort>) -> Self {
        let api = Api::new(raw_api);
        Self {
            pokemon: Arc::new(PokemonService::new(api)),
        }
    }
}

/// Hook to access the PokemonService from context
pub fn use_pokemon_service() -> Arc<PokemonService> {
    let services = use_context::<Services>();
    services.pokemon.clone()
}
