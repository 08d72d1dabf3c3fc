//! Browser platform implementation

use std::{future::Future, pin::Pin};

use gloo_timers::future::TimeoutFuture;

use crate::ports::outbound::PlatformPort;

#[derive(Clone, Default)]
pub struct WasmPlatform;

impl PlatformPort for WasmPlatform {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(TimeoutFuture::new(ms))
    }

    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

pub fn create_platform() -> WasmPlatform {
    WasmPlatform
}
