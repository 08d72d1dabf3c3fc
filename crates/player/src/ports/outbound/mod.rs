//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod api_error;
pub mod platform_port;
pub mod raw_api_port;
pub mod testing;

pub use api_error::ApiError;
pub use platform_port::PlatformPort;
pub use raw_api_port::RawApiPort;
