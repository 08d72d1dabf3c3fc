//! Toast notification overlay
//!
//! Renders the current notification from `NotificationState` and
//! auto-dismisses it after `TOAST_DURATION_MS`, or on click.

use dioxus::prelude::*;

use crate::application::notifications::NotificationKind;
use crate::ui::presentation::state::use_notification_state;
use crate::ui::use_platform;

pub const TOAST_DURATION_MS: u64 = 3_000;

#[component]
pub fn Toast() -> Element {
    let mut notifications = use_notification_state();
    let platform = use_platform();

    // Re-runs whenever a new notification is shown
    use_effect(move || {
        let seq = notifications.seq();
        if seq == 0 {
            return;
        }
        let platform = platform.clone();
        let mut notifications = notifications;
        spawn(async move {
            platform.sleep_ms(TOAST_DURATION_MS).await;
            notifications.dismiss_if(seq);
        });
    });

    let Some(notification) = notifications.current() else {
        return rsx! {};
    };

    let tone = match notification.kind {
        NotificationKind::Success => "bg-green-500",
        NotificationKind::Error => "bg-red-500",
    };

    rsx! {
        div {
            class: "fixed top-4 left-0 right-0 flex justify-center z-50 pointer-events-none",
            div {
                class: "{tone} text-white px-6 py-3 rounded-lg shadow-lg pointer-events-auto cursor-pointer",
                role: "status",
                onclick: move |_| notifications.dismiss(),
                "{notification.message}"
            }
        }
    }
}
