//! Persistent client configuration and token storage.
//!
//! The credential store is the "cookie jar" collaborator of the signup/login
//! flows: it holds the token pair returned by the auth endpoints and nothing
//! else. Tokens are always passed explicitly into API calls; nothing is read
//! into module state at load time.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::TokenPair;

const DEFAULT_BASE_URL: &str = "https://bank-dash-36iy.onrender.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const BASE_URL_ENV: &str = "BANKDASH_API_URL";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Remote API settings used to build an [`ApiClient`](crate::api::ApiClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "ApiConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    /// Defaults, with the base URL overridable through `BANKDASH_API_URL`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        config
    }
}

/// Persists the signed-in token pair as JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store under the user config directory (`<config>/bankdash/credentials.json`).
    pub fn default_location() -> Self {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("bankdash").join("credentials.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored token pair; `None` when nobody has signed in yet.
    pub fn load(&self) -> Result<Option<TokenPair>, ConfigError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data)
            .map(Some)
            .map_err(|err| ConfigError::Serde(err.to_string()))
    }

    pub fn save(&self, tokens: &TokenPair) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(tokens)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Forgets the stored tokens, if any.
    pub fn clear(&self) -> Result<(), ConfigError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".");
    tmp.push(TMP_SUFFIX);
    PathBuf::from(tmp)
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("credentials.json"));
        assert!(store.load().unwrap().is_none());

        let tokens = TokenPair {
            access_token: "access".into(),
            refresh_token: "refresh".into(),
        };
        store.save(&tokens).unwrap();
        assert_eq!(store.load().unwrap().unwrap(), tokens);

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn default_config_points_at_production() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }
}
