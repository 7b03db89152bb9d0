use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex")
});

/// Loose `local@domain.tld` shape check.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Accepts anything the WHATWG URL parser accepts, including non-http schemes.
pub fn validate_url(raw: &str) -> bool {
    Url::parse(raw).is_ok()
}
