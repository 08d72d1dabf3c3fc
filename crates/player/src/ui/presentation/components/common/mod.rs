//! Common reusable UI components.
//!
//! Dialogs, toasts and loading placeholders used across multiple views.

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod loading;
pub use loading::Loader;

mod toast;
pub use toast::{Toast, TOAST_DURATION_MS};
