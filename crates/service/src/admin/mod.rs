//! Authenticated admin client.
//!
//! Unlike the public client nothing is substituted here: every failure is
//! reported as an [`AdminError`] carrying the backend's `error` text when it
//! sends one, or a fixed per-operation message otherwise.

use std::fmt;
use std::sync::Arc;

use configs::{ApiConfig, AppConfig};
use models::Envelope;
use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::errors::AdminError;
use crate::observability::{ADMIN_ERRORS_TOTAL, API_REQUESTS_TOTAL};
use crate::storage::{FileTokenStore, TokenStore};

pub mod session;
pub mod projects;
pub mod profile;

pub use profile::AdminProfile;
pub use projects::AdminProjects;
pub use session::AdminSession;

/// Admin operations; `Display` is the message shown when the backend gives none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminOp {
    Login,
    Logout,
    ListProjects,
    CreateProject,
    UpdateProject,
    DeleteProject,
    GetProfile,
    SaveProfile,
}

impl AdminOp {
    pub fn default_message(&self) -> &'static str {
        match self {
            AdminOp::Login => "Error al iniciar sesión",
            AdminOp::Logout => "Error al cerrar sesión",
            AdminOp::ListProjects => "Error al obtener proyectos",
            AdminOp::CreateProject => "Error al crear proyecto",
            AdminOp::UpdateProject => "Error al actualizar proyecto",
            AdminOp::DeleteProject => "Error al eliminar proyecto",
            AdminOp::GetProfile => "Error al obtener perfil",
            AdminOp::SaveProfile => "Error al guardar perfil",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminOp::Login => "login",
            AdminOp::Logout => "logout",
            AdminOp::ListProjects => "list_projects",
            AdminOp::CreateProject => "create_project",
            AdminOp::UpdateProject => "update_project",
            AdminOp::DeleteProject => "delete_project",
            AdminOp::GetProfile => "get_profile",
            AdminOp::SaveProfile => "save_profile",
        }
    }
}

impl fmt::Display for AdminOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_message())
    }
}

/// Admin panel client: one instance per browser-session equivalent.
pub struct AdminClient {
    http: reqwest::Client,
    base_url: String,
    session: AdminSession,
}

impl AdminClient {
    pub fn new(cfg: &ApiConfig, store: Arc<dyn TokenStore>) -> Result<Self, AdminError> {
        let http = common::http::build_json_client(cfg.admin_timeout())?;
        Ok(Self { http, base_url: cfg.base_url.clone(), session: AdminSession::new(store) })
    }

    /// Client whose token lives in the file at `storage.token_path`.
    pub async fn from_config(cfg: &AppConfig) -> Result<Self, AdminError> {
        let store = FileTokenStore::open(&cfg.storage.token_path).await?;
        Self::new(&cfg.api, Arc::new(store))
    }

    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    pub fn projects(&self) -> AdminProjects<'_> {
        AdminProjects::new(self)
    }

    pub fn profile(&self) -> AdminProfile<'_> {
        AdminProfile::new(self)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url(&self, route: &str) -> String {
        common::http::join_url(&self.base_url, route)
    }

    /// Attach `Authorization: Bearer <token>`; an absent token is sent empty.
    pub(crate) async fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, AdminError> {
        let token = self.session.token().await?.unwrap_or_default();
        Ok(builder.header(AUTHORIZATION, common::http::bearer(&token)?))
    }

    pub(crate) async fn send(&self, op: AdminOp, builder: RequestBuilder) -> Result<Response, AdminError> {
        API_REQUESTS_TOTAL.inc();
        builder.send().await.map_err(|source| {
            ADMIN_ERRORS_TOTAL.inc();
            warn!(op = op.as_str(), error = %source, "admin request failed");
            AdminError::Transport { op, source }
        })
    }
}

/// Turn a non-2xx response into [`AdminError::Backend`].
pub(crate) async fn reject(op: AdminOp, resp: Response) -> AdminError {
    let status = resp.status().as_u16();
    let body = resp.bytes().await.unwrap_or_default();
    let message = serde_json::from_slice::<Envelope<serde_json::Value>>(&body)
        .ok()
        .and_then(|env| env.error_message().map(str::to_string))
        .unwrap_or_else(|| op.default_message().to_string());
    ADMIN_ERRORS_TOTAL.inc();
    warn!(op = op.as_str(), status, %message, "admin request rejected");
    AdminError::Backend { op, status, message }
}

/// Decode a 2xx envelope body.
pub(crate) async fn read_envelope<T: DeserializeOwned>(op: AdminOp, resp: Response) -> Result<Envelope<T>, AdminError> {
    let body = read_body(op, resp).await?;
    serde_json::from_slice::<Envelope<T>>(&body).map_err(|e| {
        ADMIN_ERRORS_TOTAL.inc();
        AdminError::Decode { op, detail: e.to_string() }
    })
}

/// Body of a 2xx response; a broken stream counts as a transport failure.
pub(crate) async fn read_body(op: AdminOp, resp: Response) -> Result<Vec<u8>, AdminError> {
    resp.bytes().await.map(|b| b.to_vec()).map_err(|source| {
        ADMIN_ERRORS_TOTAL.inc();
        warn!(op = op.as_str(), error = %source, "admin response body unreadable");
        AdminError::Transport { op, source }
    })
}

/// Decode a 2xx envelope whose `data` must be present.
pub(crate) async fn read_data<T: DeserializeOwned>(op: AdminOp, resp: Response) -> Result<T, AdminError> {
    read_envelope::<T>(op, resp).await?.data.ok_or_else(|| {
        ADMIN_ERRORS_TOTAL.inc();
        warn!(op = op.as_str(), "admin response has no data");
        AdminError::Decode { op, detail: "response has no data".into() }
    })
}
