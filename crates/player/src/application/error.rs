//! Service layer error types
//!
//! Errors that can occur in the application service layer, abstracting over
//! the transport. Views never show these verbatim: each action maps any
//! failure to one fixed message and logs the detail.

use pokedex_domain::{CodecError, DomainError};
use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Transport or HTTP status failure
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The backend returned a record the domain model does not accept
    #[error("Invalid record from server: {0}")]
    InvalidRecord(#[from] DomainError),
}

/// Outcome of submitting a create or edit form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Rejected before any request was sent
    #[error(transparent)]
    Invalid(#[from] CodecError),

    /// The request was sent and failed
    #[error(transparent)]
    Service(#[from] ServiceError),
}
