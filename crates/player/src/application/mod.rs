//! Application layer - use cases and view models for the Pokemon client
//!
//! Everything here is UI-framework agnostic: services talk to `RawApiPort`,
//! form and list models are plain structs the views wrap in signals.

pub mod api;
pub mod catalog;
pub mod dto;
pub mod error;
pub mod notifications;
pub mod services;

pub use error::{ServiceError, SubmitError};
