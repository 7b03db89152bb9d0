//! Mock backend shared by the integration tests.

#![allow(dead_code)]

use std::net::Ipv4Addr;

use axum::Router;
use configs::ApiConfig;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Serve `app` on an ephemeral loopback port and return the `/api` base URL.
pub async fn spawn(app: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("mock backend error: {}", e);
        }
    });
    Ok(format!("http://{}/api", addr))
}

pub fn config(base_url: &str) -> ApiConfig {
    ApiConfig::with_base_url(base_url)
}

/// An address where nothing listens.
pub fn dead_config() -> ApiConfig {
    ApiConfig::with_base_url("http://127.0.0.1:9/api")
}

pub fn project_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "image_src": "/img.png",
        "title": title,
        "description": "desc",
        "github_link": "https://github.com/example/repo",
        "techSection": "[\"Rust\",\"Axum\"]",
        "created_at": "2024-05-01T10:00:00.000Z",
        "updated_at": "2024-05-01T10:00:00.000Z"
    })
}

pub fn profile_json() -> Value {
    json!({
        "id": 3,
        "nombre": "Ada",
        "perfilUrl": "/ada.jpg",
        "aboutMeDescription": "Backend engineer",
        "contactEmail": "ada@example.com",
        "created_at": "2024-05-01T10:00:00.000Z",
        "updated_at": "2024-05-01T10:00:00.000Z"
    })
}
