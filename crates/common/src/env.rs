//! Environment helpers
//!
//! `.env` loading and typed lookups for deployment overrides.

use tracing::debug;

/// Load `.env` from the working directory if present. Missing files are fine.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => debug!(error = %e, "ignoring unreadable .env"),
    }
}

/// Read a non-empty, trimmed environment variable.
pub fn var_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
