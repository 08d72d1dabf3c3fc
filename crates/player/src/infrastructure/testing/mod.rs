//! Shared fixtures for unit tests

#[cfg(test)]
pub mod fixtures;
