use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::Serialize;

/// Advisory availability of the backend, as observed by the last public read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Unknown,
    Available,
    Unavailable,
}

impl ApiStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiStatus::Unknown => "unknown",
            ApiStatus::Available => "available",
            ApiStatus::Unavailable => "unavailable",
        }
    }

    fn from_u8(v: u8) -> Self {
        match v {
            1 => ApiStatus::Available,
            2 => ApiStatus::Unavailable,
            _ => ApiStatus::Unknown,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            ApiStatus::Unknown => 0,
            ApiStatus::Available => 1,
            ApiStatus::Unavailable => 2,
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Last-writer-wins flag; concurrent reads may race and that is acceptable.
#[derive(Debug, Default)]
pub struct AdvisoryStatus(AtomicU8);

impl AdvisoryStatus {
    pub fn get(&self) -> ApiStatus {
        ApiStatus::from_u8(self.0.load(Ordering::Relaxed))
    }

    pub fn set(&self, status: ApiStatus) {
        self.0.store(status.as_u8(), Ordering::Relaxed);
    }
}
