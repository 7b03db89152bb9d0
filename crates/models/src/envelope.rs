use serde::{Deserialize, Serialize};

/// Wrapper used by every backend response: `{ success?, message, data, error? }`.
///
/// All fields tolerate being absent so error bodies decode with the same type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn none<T>() -> Option<T> { None }

impl<T> Envelope<T> {
    pub fn failure(error: impl Into<String>) -> Self {
        Self { success: Some(false), message: None, data: None, error: Some(error.into()) }
    }

    /// Backend-supplied error text, if any and non-blank.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().map(str::trim).filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_error_body_without_data() {
        let env: Envelope<Vec<u32>> = serde_json::from_str(r#"{"error":"no autorizado"}"#).unwrap();
        assert!(env.data.is_none());
        assert_eq!(env.error_message(), Some("no autorizado"));
    }

    #[test]
    fn null_data_is_none() {
        let env: Envelope<Vec<u32>> = serde_json::from_str(r#"{"message":"ok","data":null}"#).unwrap();
        assert_eq!(env.message.as_deref(), Some("ok"));
        assert!(env.data.is_none());
    }

    #[test]
    fn blank_error_is_ignored() {
        let env: Envelope<()> = Envelope::failure("  ");
        assert_eq!(env.error_message(), None);
    }
}
