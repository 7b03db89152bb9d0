use std::sync::Arc;

use models::{AuthResponse, LoginRequest};
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use super::{read_body, reject, AdminClient, AdminOp};
use crate::observability::ADMIN_ERRORS_TOTAL;
use crate::errors::{AdminError, StoreError};
use crate::storage::TokenStore;

const LOGIN_ROUTE: &str = "users/login";
const LOGOUT_ROUTE: &str = "users/logout";

/// Bearer token holder: persisted in a [`TokenStore`], read lazily and cached.
pub struct AdminSession {
    store: Arc<dyn TokenStore>,
    cached: RwLock<Option<String>>,
}

impl AdminSession {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store, cached: RwLock::new(None) }
    }

    pub async fn set_token(&self, token: &str) -> Result<(), StoreError> {
        *self.cached.write().await = Some(token.to_string());
        self.store.save(token).await
    }

    /// Cached token, loading it from storage on first use.
    pub async fn token(&self) -> Result<Option<String>, StoreError> {
        if let Some(t) = self.cached.read().await.as_ref() {
            return Ok(Some(t.clone()));
        }
        let mut cached = self.cached.write().await;
        if cached.is_none() {
            *cached = self.store.load().await?;
        }
        Ok(cached.clone())
    }

    pub async fn clear_token(&self) -> Result<(), StoreError> {
        *self.cached.write().await = None;
        self.store.clear().await
    }

    /// A non-empty token is present. Storage failures count as signed out.
    pub async fn is_authenticated(&self) -> bool {
        matches!(self.token().await, Ok(Some(t)) if !t.is_empty())
    }
}

impl AdminClient {
    /// Sign in and persist the returned access token.
    #[instrument(skip(self, password), fields(op = "login"))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AdminError> {
        let op = AdminOp::Login;
        let body = LoginRequest { email: email.to_string(), password: password.to_string() };
        let resp = self.send(op, self.http().post(self.url(LOGIN_ROUTE)).json(&body)).await?;
        if !resp.status().is_success() {
            return Err(reject(op, resp).await);
        }
        let bytes = read_body(op, resp).await?;
        let auth: AuthResponse = serde_json::from_slice(&bytes).map_err(|e| {
            ADMIN_ERRORS_TOTAL.inc();
            warn!(error = %e, "login response malformed");
            AdminError::Decode { op, detail: e.to_string() }
        })?;
        self.session().set_token(&auth.data.session.access_token).await?;
        info!(user = %auth.data.user.email, "admin signed in");
        Ok(auth)
    }

    /// Revoke the session remotely, then clear the local token no matter what.
    ///
    /// A failed revoke is still reported, after the token is gone.
    #[instrument(skip(self), fields(op = "logout"))]
    pub async fn logout(&self) -> Result<(), AdminError> {
        let remote = self.revoke().await;
        let cleared = self.session().clear_token().await;
        if let Err(e) = &remote {
            warn!(error = %e, "remote logout failed");
            if let Err(store_err) = &cleared {
                error!(error = %store_err, "local token could not be cleared");
            }
        }
        remote?;
        cleared?;
        info!("admin signed out");
        Ok(())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session().is_authenticated().await
    }

    async fn revoke(&self) -> Result<(), AdminError> {
        let op = AdminOp::Logout;
        let builder = self.authorized(self.http().post(self.url(LOGOUT_ROUTE))).await?;
        let resp = self.send(op, builder).await?;
        if !resp.status().is_success() {
            return Err(reject(op, resp).await);
        }
        Ok(())
    }
}
