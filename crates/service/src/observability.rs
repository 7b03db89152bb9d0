use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static API_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "portfolio_api_requests_total",
        "Total backend requests issued by the public and admin clients"
    )
    .expect("register api_requests_total")
});

pub static FALLBACK_SERVED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "portfolio_fallback_served_total",
        "Total public reads answered with bundled fallback data"
    )
    .expect("register fallback_served_total")
});

pub static ADMIN_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "portfolio_admin_errors_total",
        "Total admin operations that failed"
    )
    .expect("register admin_errors_total")
});

/// Text exposition of the default registry.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let mut buf = Vec::new();
    if encoder.encode(&prometheus::gather(), &mut buf).is_err() {
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}
