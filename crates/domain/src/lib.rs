//! Pokedex Domain - record model and form-text rules
//!
//! Pure types and functions shared by the wire layer and the client. No I/O,
//! no UI, no transport.

pub mod codec;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use codec::{
    decode_egg_groups, decode_flavor_text_entries, encode_egg_groups,
    encode_flavor_text_entries, CodecError, DecodePolicy, EmptyTokens, IncompleteEntries,
};
pub use entities::{FlavorTextEntry, Pokemon, PokemonDraft};
pub use error::DomainError;
pub use ids::PokemonId;
pub use value_objects::parse_int_lenient;
