use std::time::Duration;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tracing::debug;

/// Environment variable selecting the backend base URL per deployment.
pub const API_URL_ENV: &str = "PUBLIC_API_URL";
pub const DEFAULT_API_BASE_URL: &str = "https://backend-portafolio-q0ig.onrender.com/api";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub public_timeout_secs: u64,
    #[serde(default = "default_timeout")]
    pub admin_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            public_timeout_secs: default_timeout(),
            admin_timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_token_path")]
    pub token_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self { Self { token_path: default_token_path() } }
}

fn default_base_url() -> String { DEFAULT_API_BASE_URL.to_string() }
fn default_timeout() -> u64 { 10 }
fn default_token_path() -> String { "data/admin_token.json".to_string() }

/// Load from `CONFIG_PATH` (default `config.toml`); a missing file yields defaults.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if std::fs::metadata(&path).is_err() {
        debug!(%path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.api.normalize_from_env();
        self.api.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

impl ApiConfig {
    /// Environment override wins over the file; trailing slashes are dropped.
    pub fn normalize_from_env(&mut self) {
        if let Some(url) = common::env::var_non_empty(API_URL_ENV) {
            self.base_url = url;
        }
        self.normalize();
    }

    pub fn normalize(&mut self) {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = if trimmed.is_empty() { default_base_url() } else { trimmed.to_string() };
    }

    pub fn validate(&self) -> Result<()> {
        let lower = self.base_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("api.base_url must start with http:// or https://"));
        }
        if self.public_timeout_secs == 0 || self.admin_timeout_secs == 0 {
            return Err(anyhow!("api timeouts must be positive seconds"));
        }
        Ok(())
    }

    pub fn public_timeout(&self) -> Duration {
        Duration::from_secs(self.public_timeout_secs)
    }

    pub fn admin_timeout(&self) -> Duration {
        Duration::from_secs(self.admin_timeout_secs)
    }

    /// Config pointing at `base_url` with default timeouts.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut cfg = Self { base_url: base_url.into(), ..Self::default() };
        cfg.normalize();
        cfg
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.token_path.trim().is_empty() {
            return Err(anyhow!("storage.token_path must not be empty"));
        }
        Ok(())
    }
}
