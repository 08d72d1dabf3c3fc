//! Pokedex Player - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_player::infrastructure::{http_client::ApiAdapter, platform::create_platform};
use pokedex_player::ports::outbound::{PlatformPort, RawApiPort};
use pokedex_player::runner::{self, config::ClientConfig, RunnerDeps};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    let config = ClientConfig::from_env();
    tracing::info!(api_base_url = %config.api_base_url, "Starting Pokedex Player");

    // Platform
    let platform: Arc<dyn PlatformPort> = Arc::new(create_platform());

    // HTTP
    let raw_api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::new(&config));

    runner::run(RunnerDeps { platform, raw_api });
}
