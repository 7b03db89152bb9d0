use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::project::parse_timestamp;

/// Site owner profile; the backend treats it as a singleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "perfilUrl")]
    pub image_url: String,
    #[serde(rename = "aboutMeDescription")]
    pub about_me: String,
    #[serde(rename = "contactEmail")]
    pub contact_email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Profile {
    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }
}

/// Partial profile for `/profiles/create`, which creates or replaces the singleton.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "perfilUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "aboutMeDescription", default, skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    #[serde(rename = "contactEmail", default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}
