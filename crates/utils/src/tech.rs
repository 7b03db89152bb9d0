//! Technology list decoding.
//!
//! A `techSection` value is either a JSON array (`["Rust","Axum"]`) or free
//! text separated by commas (`Rust, Axum`). Decoding tries the structured
//! form first and only falls back to splitting when JSON parsing fails.

use serde_json::Value;

/// Outcome of decoding a technology field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TechDecode {
    /// Absent or empty input.
    Empty,
    /// Input parsed as JSON. Non-array JSON decodes to no items.
    Structured(Vec<String>),
    /// Input was not JSON and was split on commas.
    Delimited(Vec<String>),
}

impl TechDecode {
    pub fn decode(raw: Option<&str>) -> Self {
        let raw = match raw {
            Some(r) if !r.is_empty() => r,
            _ => return TechDecode::Empty,
        };
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(items)) => TechDecode::Structured(items.into_iter().map(item_to_string).collect()),
            Ok(_) => TechDecode::Structured(Vec::new()),
            Err(_) => TechDecode::Delimited(
                raw.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            TechDecode::Empty => Vec::new(),
            TechDecode::Structured(v) | TechDecode::Delimited(v) => v,
        }
    }
}

fn item_to_string(v: Value) -> String {
    match v {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Decode a technology field into display tags.
pub fn format_technologies(raw: Option<&str>) -> Vec<String> {
    TechDecode::decode(raw).into_vec()
}

/// Encode tags the way the admin panel stores them: as a JSON array string.
pub fn technologies_to_string(technologies: &[String]) -> String {
    serde_json::to_string(technologies).unwrap_or_else(|_| "[]".to_string())
}
