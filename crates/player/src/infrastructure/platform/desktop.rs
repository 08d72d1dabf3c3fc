//! Desktop platform implementation
//!
//! Timers come from tokio, which also drives the Dioxus desktop runtime.

use std::{future::Future, pin::Pin};

use crate::ports::outbound::PlatformPort;

#[derive(Clone, Default)]
pub struct DesktopPlatform;

impl PlatformPort for DesktopPlatform {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }

    fn set_page_title(&self, _title: &str) {
        // No-op on desktop - window title is set once in the launch config
    }
}

pub fn create_platform() -> DesktopPlatform {
    DesktopPlatform
}
