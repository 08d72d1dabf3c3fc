//! Reactive state shared across views

pub mod notification_state;

pub use notification_state::{use_notification_state, NotificationState};
