//! Reusable UI components

pub mod common;
pub mod pokemon;
