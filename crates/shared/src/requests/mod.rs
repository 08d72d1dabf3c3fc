//! Request bodies sent to the REST backend

mod pokemon;

pub use pokemon::PokemonPayload;
