mod common;

use std::sync::{Arc, Mutex};

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use models::{ProfileInput, ProjectInput};
use serde_json::{json, Value};
use service::storage::{FileTokenStore, MemoryTokenStore, TokenStore};
use configs::{AppConfig, StorageConfig};
use service::observability::ADMIN_ERRORS_TOTAL;
use service::{AdminClient, AdminError, AdminOp};

type Seen = Arc<Mutex<Vec<String>>>;

fn auth_header(headers: &HeaderMap) -> String {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

fn login_ok() -> Value {
    json!({
        "success": true,
        "message": "Inicio de sesión exitoso",
        "data": {
            "user": {"id": "u-1", "email": "admin@example.com"},
            "session": {"access_token": "access-123", "refresh_token": "refresh-456"}
        }
    })
}

/// Backend that accepts everything and records the Authorization header of each write.
fn happy_backend(seen: Seen) -> Router {
    let on_create = seen.clone();
    let on_update = seen.clone();
    let on_delete = seen.clone();
    let on_profile = seen.clone();
    let on_logout = seen;
    Router::new()
        .route("/api/users/login", post(|| async { Json(login_ok()) }))
        .route(
            "/api/users/logout",
            post(move |headers: HeaderMap| {
                let seen = on_logout.clone();
                async move {
                    seen.lock().unwrap().push(auth_header(&headers));
                    Json(json!({"message": "bye"}))
                }
            }),
        )
        .route(
            "/api/projects/read",
            get(|| async { Json(json!({"message": "ok", "data": [common::project_json(1, "One")]})) }),
        )
        .route(
            "/api/projects/create",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let seen = on_create.clone();
                async move {
                    seen.lock().unwrap().push(auth_header(&headers));
                    let title = body["title"].as_str().unwrap_or("untitled").to_string();
                    (StatusCode::CREATED, Json(json!({"message": "created", "data": common::project_json(10, &title)})))
                }
            }),
        )
        .route(
            "/api/projects/update/:id",
            patch(move |Path(id): Path<i64>, headers: HeaderMap, Json(body): Json<Value>| {
                let seen = on_update.clone();
                async move {
                    seen.lock().unwrap().push(auth_header(&headers));
                    let title = body["title"].as_str().unwrap_or("same").to_string();
                    Json(json!({"message": "updated", "data": common::project_json(id, &title)}))
                }
            }),
        )
        .route(
            "/api/projects/delete/:id",
            delete(move |Path(_id): Path<i64>, headers: HeaderMap| {
                let seen = on_delete.clone();
                async move {
                    seen.lock().unwrap().push(auth_header(&headers));
                    StatusCode::NO_CONTENT
                }
            }),
        )
        .route("/api/profiles/read", get(|| async { (StatusCode::NOT_FOUND, Json(json!({"error": "sin perfil"}))) }))
        .route(
            "/api/profiles/create",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let seen = on_profile.clone();
                async move {
                    seen.lock().unwrap().push(auth_header(&headers));
                    let mut profile = common::profile_json();
                    if let Some(name) = body.get("nombre") {
                        profile["nombre"] = name.clone();
                    }
                    Json(json!({"message": "saved", "data": profile}))
                }
            }),
        )
}

/// Backend that rejects every call; `with_error` controls whether an `error` field is sent.
fn failing_backend(status: StatusCode, with_error: bool) -> Router {
    let body = move || async move {
        if with_error {
            (status, Json(json!({"error": "Token inválido"}))).into_response()
        } else {
            (status, "not json").into_response()
        }
    };
    Router::new()
        .route("/api/users/login", post(body))
        .route("/api/users/logout", post(body))
        .route("/api/projects/read", get(body))
        .route("/api/projects/create", post(body))
        .route("/api/projects/update/:id", patch(body))
        .route("/api/projects/delete/:id", delete(body))
        .route("/api/profiles/read", get(body))
        .route("/api/profiles/create", post(body))
}

/// Backend that accepts writes but answers them without `data`, and sends a broken login body.
fn empty_data_backend() -> Router {
    let empty = || async { Json(json!({"message": "ok", "data": null})) };
    Router::new()
        .route("/api/users/login", post(|| async { Json(json!({"message": "ok"})) }))
        .route("/api/projects/create", post(empty))
        .route("/api/projects/update/:id", patch(empty))
        .route("/api/profiles/create", post(empty))
}

fn memory_client(base: &str) -> anyhow::Result<(AdminClient, Arc<MemoryTokenStore>)> {
    let store = Arc::new(MemoryTokenStore::default());
    let client = AdminClient::new(&common::config(base), store.clone())?;
    Ok((client, store))
}

#[tokio::test]
async fn login_then_crud_sends_bearer_token() -> anyhow::Result<()> {
    let seen: Seen = Arc::default();
    let base = common::spawn(happy_backend(seen.clone())).await?;
    let (client, store) = memory_client(&base)?;

    assert!(!client.is_authenticated().await);
    let auth = client.login("admin@example.com", "secret").await?;
    assert_eq!(auth.data.session.access_token, "access-123");
    assert!(client.is_authenticated().await);
    assert_eq!(store.load().await?.as_deref(), Some("access-123"));

    let listed = client.projects().get_all().await?;
    assert_eq!(listed.len(), 1);

    let input = ProjectInput { title: Some("Nuevo".into()), ..Default::default() };
    let created = client.projects().create(&input).await?;
    assert_eq!(created.id, 10);
    assert_eq!(created.title, "Nuevo");

    let updated = client.projects().update(42, &ProjectInput { title: Some("Renamed".into()), ..Default::default() }).await?;
    assert_eq!(updated.id, 42);
    assert_eq!(updated.title, "Renamed");

    client.projects().delete(42).await?;

    let profile = client.profile().create_or_update(&ProfileInput { name: Some("Grace".into()), ..Default::default() }).await?;
    assert_eq!(profile.name, "Grace");

    let headers = seen.lock().unwrap().clone();
    assert_eq!(headers.len(), 4);
    assert!(headers.iter().all(|h| h == "Bearer access-123"));
    Ok(())
}

#[tokio::test]
async fn missing_profile_is_none_for_admin() -> anyhow::Result<()> {
    let base = common::spawn(happy_backend(Arc::default())).await?;
    let (client, _) = memory_client(&base)?;
    assert!(client.profile().get().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn logout_revokes_and_clears() -> anyhow::Result<()> {
    let seen: Seen = Arc::default();
    let base = common::spawn(happy_backend(seen.clone())).await?;
    let store = Arc::new(MemoryTokenStore::with_token("stored-token"));
    let client = AdminClient::new(&common::config(&base), store.clone())?;

    client.logout().await?;
    assert_eq!(seen.lock().unwrap().clone(), vec!["Bearer stored-token".to_string()]);
    assert_eq!(store.load().await?, None);
    assert!(!client.is_authenticated().await);
    Ok(())
}

#[tokio::test]
async fn logout_clears_token_when_server_rejects() -> anyhow::Result<()> {
    let base = common::spawn(failing_backend(StatusCode::INTERNAL_SERVER_ERROR, true)).await?;
    let store = Arc::new(MemoryTokenStore::with_token("stored-token"));
    let client = AdminClient::new(&common::config(&base), store.clone())?;

    let err = client.logout().await.unwrap_err();
    assert_eq!(err.status_code(), Some(500));
    assert_eq!(store.load().await?, None);
    assert!(!client.is_authenticated().await);
    Ok(())
}

#[tokio::test]
async fn logout_clears_token_when_server_unreachable() -> anyhow::Result<()> {
    let store = Arc::new(MemoryTokenStore::with_token("stored-token"));
    let client = AdminClient::new(&common::dead_config(), store.clone())?;

    let err = client.logout().await.unwrap_err();
    assert!(matches!(err, AdminError::Transport { op: AdminOp::Logout, .. }));
    assert_eq!(store.load().await?, None);
    Ok(())
}

#[tokio::test]
async fn writes_surface_backend_error_field() -> anyhow::Result<()> {
    let base = common::spawn(failing_backend(StatusCode::UNAUTHORIZED, true)).await?;
    let (client, _) = memory_client(&base)?;
    let input = ProjectInput::default();

    let err = client.projects().create(&input).await.unwrap_err();
    assert_eq!(err.to_string(), "Token inválido");
    assert_eq!(err.status_code(), Some(401));

    let err = client.projects().update(1, &input).await.unwrap_err();
    assert_eq!(err.to_string(), "Token inválido");

    let err = client.projects().delete(1).await.unwrap_err();
    assert_eq!(err.to_string(), "Token inválido");

    let err = client.profile().create_or_update(&ProfileInput::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "Token inválido");
    Ok(())
}

#[tokio::test]
async fn errors_without_backend_message_use_defaults() -> anyhow::Result<()> {
    let base = common::spawn(failing_backend(StatusCode::BAD_REQUEST, false)).await?;
    let (client, store) = memory_client(&base)?;
    let input = ProjectInput::default();

    assert_eq!(client.projects().get_all().await.unwrap_err().to_string(), "Error al obtener proyectos");
    assert_eq!(client.projects().create(&input).await.unwrap_err().to_string(), "Error al crear proyecto");
    assert_eq!(client.projects().update(7, &input).await.unwrap_err().to_string(), "Error al actualizar proyecto");
    assert_eq!(client.projects().delete(7).await.unwrap_err().to_string(), "Error al eliminar proyecto");
    assert_eq!(client.profile().get().await.unwrap_err().to_string(), "Error al obtener perfil");
    assert_eq!(
        client.profile().create_or_update(&ProfileInput::default()).await.unwrap_err().to_string(),
        "Error al guardar perfil"
    );

    let err = client.login("a@b.com", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "Error al iniciar sesión");
    assert_eq!(store.load().await?, None);
    Ok(())
}

#[tokio::test]
async fn token_persists_across_clients_sharing_a_file() -> anyhow::Result<()> {
    let base = common::spawn(happy_backend(Arc::default())).await?;
    let tmp = std::env::temp_dir().join(format!("admin_token_{}.json", uuid::Uuid::new_v4()));
    let path = tmp.to_string_lossy().to_string();

    let first = AdminClient::new(&common::config(&base), Arc::new(FileTokenStore::open(&path).await?))?;
    first.login("admin@example.com", "secret").await?;

    let second = AdminClient::new(&common::config(&base), Arc::new(FileTokenStore::open(&path).await?))?;
    assert!(second.is_authenticated().await);
    assert_eq!(second.session().token().await?.as_deref(), Some("access-123"));

    second.logout().await?;
    let third = AdminClient::new(&common::config(&base), Arc::new(FileTokenStore::open(&path).await?))?;
    assert!(!third.is_authenticated().await);

    let _ = tokio::fs::remove_file(&tmp).await;
    Ok(())
}

#[tokio::test]
async fn writes_without_stored_token_send_empty_bearer() -> anyhow::Result<()> {
    let seen: Seen = Arc::default();
    let base = common::spawn(happy_backend(seen.clone())).await?;
    let (client, _) = memory_client(&base)?;

    client.projects().create(&ProjectInput { title: Some("Anon".into()), ..Default::default() }).await?;
    let headers = seen.lock().unwrap().clone();
    assert_eq!(headers.len(), 1);
    // Trailing whitespace may be stripped by the server's header parser.
    assert_eq!(headers[0].trim_end(), "Bearer");
    Ok(())
}

#[tokio::test]
async fn successful_writes_without_data_are_decode_errors() -> anyhow::Result<()> {
    let base = common::spawn(empty_data_backend()).await?;
    let (client, store) = memory_client(&base)?;
    let before = ADMIN_ERRORS_TOTAL.get();

    let err = client.projects().create(&ProjectInput::default()).await.unwrap_err();
    assert!(matches!(err, AdminError::Decode { op: AdminOp::CreateProject, .. }));
    let err = client.projects().update(3, &ProjectInput::default()).await.unwrap_err();
    assert!(matches!(err, AdminError::Decode { op: AdminOp::UpdateProject, .. }));
    let err = client.profile().create_or_update(&ProfileInput::default()).await.unwrap_err();
    assert!(matches!(err, AdminError::Decode { op: AdminOp::SaveProfile, .. }));
    let err = client.login("admin@example.com", "secret").await.unwrap_err();
    assert!(matches!(err, AdminError::Decode { op: AdminOp::Login, .. }));
    assert_eq!(store.load().await?, None);

    // Other tests share the counter, so only a lower bound holds.
    assert!(ADMIN_ERRORS_TOTAL.get() >= before + 4);
    Ok(())
}

#[tokio::test]
async fn client_from_config_stores_token_at_configured_path() -> anyhow::Result<()> {
    let base = common::spawn(happy_backend(Arc::default())).await?;
    let tmp = std::env::temp_dir()
        .join(format!("portfolio_cfg_{}", uuid::Uuid::new_v4()))
        .join("admin_token.json");
    let path = tmp.to_string_lossy().to_string();
    let cfg = AppConfig { api: common::config(&base), storage: StorageConfig { token_path: path.clone() } };

    let client = AdminClient::from_config(&cfg).await?;
    client.login("admin@example.com", "secret").await?;
    assert_eq!(FileTokenStore::open(&path).await?.load().await?.as_deref(), Some("access-123"));

    if let Some(dir) = tmp.parent() {
        let _ = tokio::fs::remove_dir_all(dir).await;
    }
    Ok(())
}
