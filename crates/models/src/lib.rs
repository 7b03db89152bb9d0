//! Wire and domain types shared by the portfolio clients.
//!
//! Field names follow the backend's JSON contract; Rust names are used
//! internally and mapped with `serde(rename)`.

pub mod envelope;
pub mod project;
pub mod profile;
pub mod auth;
pub mod fallback;

pub use envelope::Envelope;
pub use project::{Project, ProjectInput};
pub use profile::{Profile, ProfileInput};
pub use auth::{AuthData, AuthResponse, AuthUser, LoginRequest, SessionTokens};
