use std::sync::Arc;

use crate::ports::outbound::{PlatformPort, RawApiPort};

/// Configuration types for the player runner.
pub mod config {
    use url::Url;

    /// Backend used when nothing is configured
    pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

    /// Default request timeout in milliseconds (desktop only)
    pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

    pub const API_BASE_URL_VAR: &str = "POKEDEX_API_BASE_URL";
    pub const REQUEST_TIMEOUT_VAR: &str = "POKEDEX_REQUEST_TIMEOUT_MS";

    /// Settings fixed at application start and handed to the HTTP adapter
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct ClientConfig {
        /// Absolute http(s) URL without a trailing slash
        pub api_base_url: String,
        pub request_timeout_ms: u64,
    }

    impl Default for ClientConfig {
        fn default() -> Self {
            Self {
                api_base_url: DEFAULT_API_BASE_URL.to_string(),
                request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            }
        }
    }

    impl ClientConfig {
        /// Build from raw values, falling back to defaults for missing or
        /// malformed ones.
        pub fn from_values(api_base_url: Option<&str>, request_timeout_ms: Option<&str>) -> Self {
            let api_base_url = api_base_url
                .map(normalize_base_url)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

            let request_timeout_ms = match request_timeout_ms.map(|s| s.trim().parse::<u64>()) {
                Some(Ok(ms)) if ms > 0 => ms,
                Some(_) => {
                    tracing::warn!(
                        "Ignoring invalid {}, using {}ms",
                        REQUEST_TIMEOUT_VAR,
                        DEFAULT_REQUEST_TIMEOUT_MS
                    );
                    DEFAULT_REQUEST_TIMEOUT_MS
                }
                None => DEFAULT_REQUEST_TIMEOUT_MS,
            };

            Self {
                api_base_url,
                request_timeout_ms,
            }
        }

        /// Read `.env` and the process environment.
        #[cfg(not(target_arch = "wasm32"))]
        pub fn from_env() -> Self {
            if let Err(e) = dotenvy::dotenv() {
                tracing::debug!("No .env file loaded: {}", e);
            }
            let base = std::env::var(API_BASE_URL_VAR).ok();
            let timeout = std::env::var(REQUEST_TIMEOUT_VAR).ok();
            Self::from_values(base.as_deref(), timeout.as_deref())
        }

        /// Browsers have no process environment; the URL is baked in at build time.
        #[cfg(target_arch = "wasm32")]
        pub fn from_env() -> Self {
            Self::from_values(option_env!("POKEDEX_API_BASE_URL"), None)
        }
    }

    fn normalize_base_url(raw: &str) -> String {
        let trimmed = raw.trim();
        match Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                trimmed.trim_end_matches('/').to_string()
            }
            Ok(url) => {
                tracing::warn!(
                    "Unsupported scheme '{}' in {}, using {}",
                    url.scheme(),
                    API_BASE_URL_VAR,
                    DEFAULT_API_BASE_URL
                );
                DEFAULT_API_BASE_URL.to_string()
            }
            Err(e) => {
                tracing::warn!(
                    "Invalid {} '{}': {}, using {}",
                    API_BASE_URL_VAR,
                    trimmed,
                    e,
                    DEFAULT_API_BASE_URL
                );
                DEFAULT_API_BASE_URL.to_string()
            }
        }
    }

}

pub struct RunnerDeps {
    pub platform: Arc<dyn PlatformPort>,
    pub raw_api: Arc<dyn RawApiPort>,
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps { platform, raw_api } = deps;

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title("Pokedex Admin");
        let cfg = dioxus_desktop::Config::new().with_window(window);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(crate::ui::presentation::Services::new(raw_api))
        .launch(crate::ui::app);
}
