//! Stored CLI credentials
//!
//! The interactive `login` flow persists the issued token as JSON under the
//! user's config directory. `SITEGLOT_TOKEN` overrides the stored token, and
//! `SITEGLOT_CONFIG_DIR` overrides the storage location (used by CI and
//! tests).

use crate::error::{ApiError, ApiResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Persisted CLI credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Bearer token issued to this CLI
    pub token: String,
    /// Account the token belongs to, if the service reported one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// When the token was saved
    pub saved_at: DateTime<Utc>,
}

impl Credentials {
    /// Create credentials from a freshly issued token
    pub fn new(token: impl Into<String>, account: Option<String>) -> Self {
        Self {
            token: token.into(),
            account,
            saved_at: Utc::now(),
        }
    }
}

/// Path of the credentials file
pub fn credentials_path() -> ApiResult<PathBuf> {
    let base = match env::var_os("SITEGLOT_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::config_dir()
            .ok_or_else(|| ApiError::config("Could not determine the user config directory"))?
            .join("siteglot"),
    };
    Ok(base.join("credentials.json"))
}

/// Load the active token: `SITEGLOT_TOKEN` first, then the stored file
///
/// Returns `Ok(None)` when no token is available anywhere.
pub fn load_token() -> ApiResult<Option<String>> {
    if let Ok(token) = env::var("SITEGLOT_TOKEN") {
        if !token.is_empty() {
            return Ok(Some(token));
        }
    }

    let path = credentials_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(&path)?;
    let creds: Credentials = serde_json::from_str(&raw)?;
    Ok(Some(creds.token))
}

/// Persist credentials, creating the config directory if needed
pub fn save(creds: &Credentials) -> ApiResult<PathBuf> {
    let path = credentials_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(creds)?;
    fs::write(&path, format!("{json}\n"))?;
    Ok(path)
}

/// Remove stored credentials, if any
pub fn clear() -> ApiResult<()> {
    let path = credentials_path()?;
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Credential tests share the process environment, so they run under one lock.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[test]
    fn test_save_and_load_roundtrip() {
        let _guard = ENV_LOCK.lock().unwrap();
        let tmp = TempDir::new().unwrap();
        unsafe {
            env::set_var("SITEGLOT_CONFIG_DIR", tmp.path());
            env::remove_var("SITEGLOT_TOKEN");
        }

        let creds = Credentials::new("tok_abc123", Some("dev@siteglot.io".into()));
        let path = save(&creds).unwrap();
        assert!(path.exists());

        let loaded = load_token().unwrap();
        assert_eq!(loaded.as_deref(), Some("tok_abc123"));

        clear().unwrap();
        assert_eq!(load_token().unwrap(), None);

        unsafe { env::remove_var("SITEGLOT_CONFIG_DIR") };
    }

    #[test]
    fn test_env_token_overrides_stored() {
        let _guard = ENV_LOCK.lock().unwrap();
        let tmp = TempDir::new().unwrap();
        unsafe {
            env::set_var("SITEGLOT_CONFIG_DIR", tmp.path());
            env::set_var("SITEGLOT_TOKEN", "tok_env");
        }

        save(&Credentials::new("tok_stored", None)).unwrap();
        assert_eq!(load_token().unwrap().as_deref(), Some("tok_env"));

        unsafe {
            env::remove_var("SITEGLOT_TOKEN");
            env::remove_var("SITEGLOT_CONFIG_DIR");
        }
    }
}
