//! Data access for the portfolio site.
//! - `public_client`: read-only access that always renders something, falling back to bundled data.
//! - `admin`: authenticated CRUD that reports every failure.
//! - `storage`: persistent key-value storage for the admin session token.

pub mod errors;
pub mod status;
pub mod observability;
pub mod storage;
pub mod public_client;
pub mod admin;

pub use admin::{AdminClient, AdminOp, AdminSession};
pub use errors::{AdminError, FetchError, StoreError};
pub use public_client::PublicClient;
pub use status::ApiStatus;
