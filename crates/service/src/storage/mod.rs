//! Persistent client-side storage.
//!
//! A small JSON file stands in for browser local storage; the admin session
//! token lives under a single named key.

pub mod json_map_store;
pub mod token_store;

pub use json_map_store::JsonMapStore;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore, ADMIN_TOKEN_KEY};
