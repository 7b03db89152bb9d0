use async_trait::async_trait;
use tokio::sync::Mutex;

use super::json_map_store::JsonMapStore;
use crate::errors::StoreError;

/// Storage key holding the admin bearer token.
pub const ADMIN_TOKEN_KEY: &str = "adminToken";

/// Persistence for the admin session token.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> Result<Option<String>, StoreError>;
    async fn save(&self, token: &str) -> Result<(), StoreError>;
    async fn clear(&self) -> Result<(), StoreError>;
}

/// Token kept in a JSON file under [`ADMIN_TOKEN_KEY`].
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    map: JsonMapStore,
}

impl FileTokenStore {
    pub async fn open(path: &str) -> Result<Self, StoreError> {
        Ok(Self { map: JsonMapStore::open(path).await? })
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.map.get(ADMIN_TOKEN_KEY).await)
    }

    async fn save(&self, token: &str) -> Result<(), StoreError> {
        self.map.set(ADMIN_TOKEN_KEY, token).await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.map.remove(ADMIN_TOKEN_KEY).await.map(|_| ())
    }
}

/// Process-local token storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.token.lock().await.clone())
    }

    async fn save(&self, token: &str) -> Result<(), StoreError> {
        *self.token.lock().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.token.lock().await = None;
        Ok(())
    }
}
