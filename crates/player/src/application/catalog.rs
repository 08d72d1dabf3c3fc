//! Client-side copy of the Pokemon list

use pokedex_domain::{Pokemon, PokemonId};

use crate::application::notifications::{self, Notification};
use crate::application::ServiceError;

/// The records shown by the list view, in backend order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PokemonCatalog {
    pokemons: Vec<Pokemon>,
    /// Record whose delete request is still outstanding
    deleting: Option<PokemonId>,
}

impl PokemonCatalog {
    pub fn new(pokemons: Vec<Pokemon>) -> Self {
        Self {
            pokemons,
            deleting: None,
        }
    }

    pub fn pokemons(&self) -> &[Pokemon] {
        &self.pokemons
    }

    pub fn is_empty(&self) -> bool {
        self.pokemons.is_empty()
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting.is_some()
    }

    /// Claim the single delete slot for `id`.
    ///
    /// Returns `false` while another delete is outstanding; the caller must
    /// not send a request in that case.
    pub fn begin_delete(&mut self, id: &PokemonId) -> bool {
        if let Some(current) = &self.deleting {
            tracing::debug!("Ignoring delete of {} while {} is in flight", id, current);
            return false;
        }
        self.deleting = Some(id.clone());
        true
    }

    /// Drop the record with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: &PokemonId) -> bool {
        let before = self.pokemons.len();
        self.pokemons.retain(|p| &p.id != id);
        self.pokemons.len() != before
    }

    /// Apply the outcome of a delete request.
    ///
    /// The record is only removed once the backend confirmed the delete; on
    /// failure the list is left untouched.
    pub fn apply_delete(
        &mut self,
        id: &PokemonId,
        outcome: Result<(), ServiceError>,
    ) -> Notification {
        self.deleting = None;
        match outcome {
            Ok(()) => {
                self.remove(id);
                Notification::success(notifications::DELETE_SUCCESS)
            }
            Err(e) => {
                tracing::error!("Failed to delete pokemon {}: {}", id, e);
                Notification::error(notifications::DELETE_FAILED)
            }
        }
    }
}
