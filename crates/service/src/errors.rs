use thiserror::Error;

use crate::admin::AdminOp;

/// Failures of the persistent token storage.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(String),
    #[error("storage encoding error: {0}")]
    Encoding(String),
}

/// Why a public read fell back to bundled data. Never returned to callers.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected status {status}")]
    Status { status: u16 },
    #[error("malformed envelope: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { FetchError::Timeout(e) } else { FetchError::Transport(e) }
    }
}

/// Admin client error. `Backend` displays the server's own message.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("{message}")]
    Backend { op: AdminOp, status: u16, message: String },
    #[error("{op}: {source}")]
    Transport { op: AdminOp, #[source] source: reqwest::Error },
    #[error("{op}: invalid response: {detail}")]
    Decode { op: AdminOp, detail: String },
    #[error("token storage error: {0}")]
    Store(#[from] StoreError),
    #[error("client setup error: {0}")]
    Client(#[from] common::CoreError),
}

impl AdminError {
    /// HTTP status of a backend rejection.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AdminError::Backend { status, .. } => Some(*status),
            AdminError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn op(&self) -> Option<AdminOp> {
        match self {
            AdminError::Backend { op, .. } | AdminError::Transport { op, .. } | AdminError::Decode { op, .. } => Some(*op),
            _ => None,
        }
    }
}
