//! Test utilities for outbound ports
//!
//! Mock implementations of outbound port traits, compiled for unit tests only.
//!
//! ```ignore
//! use crate::ports::outbound::testing::MockRawApi;
//! ```

#[cfg(test)]
mod mock_raw_api;

#[cfg(test)]
pub use mock_raw_api::MockRawApi;
