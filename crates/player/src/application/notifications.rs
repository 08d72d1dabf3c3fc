//! User-facing outcome messages
//!
//! Views never show transport errors verbatim. Every outcome maps to one of
//! the fixed messages below, rendered as a toast.

pub const ADD_SUCCESS: &str = "Pokemon added successfully!";
pub const ADD_FAILED: &str = "Error adding Pokemon.";
pub const UPDATE_SUCCESS: &str = "Pokemons updated successfully";
pub const UPDATE_FAILED: &str = "Error updating Pokemon.";
pub const DELETE_SUCCESS: &str = "Pokemon deleted successfully!";
pub const DELETE_FAILED: &str = "Error deleting Pokémon.";
pub const FETCH_FAILED: &str = "Error fetching Pokémon data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}
