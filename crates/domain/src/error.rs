//! Unified error types for the domain layer
//!
//! Provides a common error type for domain operations so adapters do not
//! have to fall back to `String` or `anyhow`. Form-input rejections live in
//! [`crate::codec::CodecError`].

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),
}

impl DomainError {
    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_id_error() {
        let err = DomainError::invalid_id("Pokemon id cannot be empty");
        assert!(matches!(err, DomainError::InvalidId(_)));
        assert_eq!(
            err.to_string(),
            "Invalid ID format: Pokemon id cannot be empty"
        );
    }
}
