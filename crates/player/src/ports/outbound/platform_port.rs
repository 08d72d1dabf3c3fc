//! PlatformPort - platform services needed by the UI layer
//!
//! Browser and desktop differ in how they sleep and how they title the
//! window. Views reach these through Dioxus context:
//! `use_context::<Arc<dyn PlatformPort>>()`.

use std::{future::Future, pin::Pin};

pub trait PlatformPort: Send + Sync {
    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}
