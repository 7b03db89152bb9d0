//! Admin panel feedback: loading placeholders and toast notifications.
//!
//! What to show is computed by pure functions (`spinner_markup`, `Toast::markup`);
//! showing it goes through the [`Renderer`] trait so the same logic drives a
//! real document or the in-memory [`MemoryDocument`].

pub mod render;
pub mod loading;
pub mod notify;

pub use loading::{spinner_markup, LoadingManager, DEFAULT_LOADING_MESSAGE};
pub use notify::{Notifier, Severity, Toast, DEFAULT_TOAST_DURATION, FADE_OUT_DELAY};
pub use render::{MemoryDocument, MountedNode, Renderer};
