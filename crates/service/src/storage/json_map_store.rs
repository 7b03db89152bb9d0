use std::{collections::HashMap, path::PathBuf, sync::Arc};
use tokio::{fs, sync::RwLock};

use crate::errors::StoreError;

/// JSON file-backed string map, the local-storage analogue.
///
/// Every write persists the whole map. Unreadable content is treated as empty.
#[derive(Debug, Clone)]
pub struct JsonMapStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
    file_path: PathBuf,
}

impl JsonMapStore {
    /// Open the store at `path`, creating the file (and parents) when missing.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, StoreError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| StoreError::Io(e.to_string()))?;
            }
        }

        let map: HashMap<String, String> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => {
                let empty = HashMap::new();
                write_map(&file_path, &empty).await?;
                empty
            }
        };

        Ok(Self { inner: Arc::new(RwLock::new(map)), file_path })
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.inner.read().await.get(key).cloned()
    }

    /// Insert or replace a value and persist.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.inner.write().await;
        map.insert(key.to_string(), value.to_string());
        write_map(&self.file_path, &map).await
    }

    /// Remove a key and persist; returns whether it existed.
    pub async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let mut map = self.inner.write().await;
        let existed = map.remove(key).is_some();
        write_map(&self.file_path, &map).await?;
        Ok(existed)
    }
}

async fn write_map(path: &PathBuf, map: &HashMap<String, String>) -> Result<(), StoreError> {
    let data = serde_json::to_vec(map).map_err(|e| StoreError::Encoding(e.to_string()))?;
    fs::write(path, data).await.map_err(|e| StoreError::Io(e.to_string()))
}
