//! Shared helpers used by the binaries and service crates.

pub mod logging;
