use thiserror::Error;

pub mod utils;
pub mod env;
pub mod http;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("http client error: {0}")]
    Client(String),
    #[error("invalid header value: {0}")]
    Header(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_error_display() {
        let e = CoreError::Client("tls backend missing".into());
        assert_eq!(e.to_string(), "http client error: tls backend missing");
    }
}
