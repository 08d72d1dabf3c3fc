//! HTTP adapters implementing `RawApiPort`
//!
//! `reqwest` on desktop, `gloo-net` (browser `fetch`) on wasm. Both take the
//! API base URL from `ClientConfig` at construction; nothing is read from
//! ambient state afterwards.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
pub use wasm::ApiAdapter;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ApiAdapter;

/// Join a base URL (no trailing slash) and an absolute API path.
fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base_url}{path}")
    } else {
        format!("{base_url}/{path}")
    }
}
