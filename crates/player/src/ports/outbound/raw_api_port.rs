//! Raw API Port - Object-safe HTTP boundary
//!
//! Typed request/response helpers are generic and therefore not object-safe.
//! The composition root stores this JSON-level trait behind `Arc<dyn ...>` and
//! the application layer wraps it with typed helpers (`application::api::Api`).
//!
//! Paths are relative to the configured API base URL (e.g. `/pokemons`).

use serde_json::Value;

use super::ApiError;

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    /// POST a JSON body; only the status of the response is checked.
    async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError>;

    /// PUT a JSON body; only the status of the response is checked.
    async fn put_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
