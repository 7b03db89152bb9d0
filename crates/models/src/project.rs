use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Portfolio project as returned by `/projects/*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub image_src: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_demo_link: Option<String>,
    /// JSON array or comma-separated list of technologies.
    #[serde(rename = "techSection", default, skip_serializing_if = "Option::is_none")]
    pub tech_section: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Project {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }
}

/// Partial project used for create and update requests. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_demo_link: Option<String>,
    #[serde(rename = "techSection", default, skip_serializing_if = "Option::is_none")]
    pub tech_section: Option<String>,
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim()).ok().map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_shape() {
        let raw = r#"{
            "id": 7,
            "image_src": "/img.png",
            "title": "T",
            "description": "D",
            "github_link": null,
            "techSection": "Rust, Axum",
            "created_at": "2024-05-01T10:00:00.000Z",
            "updated_at": "2024-05-02T10:00:00+00:00"
        }"#;
        let p: Project = serde_json::from_str(raw).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.github_link, None);
        assert_eq!(p.live_demo_link, None);
        assert_eq!(p.tech_section.as_deref(), Some("Rust, Axum"));
        assert!(p.created_at_utc().is_some());
        assert!(p.updated_at_utc().is_some());
    }

    #[test]
    fn input_omits_unset_fields() {
        let input = ProjectInput { title: Some("New".into()), tech_section: Some("[\"Rust\"]".into()), ..Default::default() };
        let v = serde_json::to_value(&input).unwrap();
        assert_eq!(v, serde_json::json!({"title": "New", "techSection": "[\"Rust\"]"}));
    }
}
