//! Toast notification state
//!
//! Holds at most one notification. Showing a new one replaces the current
//! one and bumps a sequence number, so a pending auto-dismiss for an older
//! toast cannot close a newer one.

use dioxus::prelude::*;

use crate::application::notifications::Notification;

#[derive(Clone, Copy)]
pub struct NotificationState {
    current: Signal<Option<Notification>>,
    seq: Signal<u64>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
            seq: Signal::new(0),
        }
    }

    /// Current notification; subscribes the caller
    pub fn current(&self) -> Option<Notification> {
        self.current.read().clone()
    }

    /// Sequence number of the latest notification; subscribes the caller
    pub fn seq(&self) -> u64 {
        *self.seq.read()
    }

    pub fn show(&mut self, notification: Notification) -> u64 {
        let next = *self.seq.peek() + 1;
        self.seq.set(next);
        self.current.set(Some(notification));
        next
    }

    pub fn dismiss(&mut self) {
        self.current.set(None);
    }

    /// Dismiss only if nothing newer was shown since `seq`
    pub fn dismiss_if(&mut self, seq: u64) {
        if *self.seq.peek() == seq {
            self.current.set(None);
        }
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notification_state() -> NotificationState {
    use_context::<NotificationState>()
}
