use std::fmt;

use crate::error::DomainError;

/// Backend-assigned Pokemon identifier.
///
/// Opaque to the client: it is never parsed, only echoed back in paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PokemonId(String);

impl PokemonId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("Pokemon id cannot be empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_id() {
        assert!(PokemonId::new("").is_err());
        assert!(PokemonId::new("   ").is_err());
    }

    #[test]
    fn keeps_id_verbatim() {
        let id = PokemonId::new("66a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        assert_eq!(id.as_str(), "66a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(id.to_string(), "66a1f0c2e4b0a1b2c3d4e5f6");
    }
}
