//! Interactive CLI login endpoints

use crate::client::SiteglotClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};

/// Login API interface
#[derive(Clone)]
pub struct AuthApi {
    client: SiteglotClient,
}

impl AuthApi {
    /// Create a new auth API interface
    pub(crate) fn new(client: SiteglotClient) -> Self {
        Self { client }
    }

    /// Start a login session
    ///
    /// The returned URL must be opened in a browser; the session stays
    /// `pending` until the user authorizes it there.
    pub async fn begin(&self) -> ApiResult<LoginSession> {
        self.client
            .post("cli/sessions", &serde_json::json!({}))
            .await
    }

    /// Poll a login session for its current state
    pub async fn poll(&self, session_id: &str) -> ApiResult<LoginPoll> {
        self.client
            .get(&format!("cli/sessions/{session_id}"))
            .await
    }
}

/// A freshly created login session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginSession {
    /// Session identifier used for polling
    #[serde(rename = "sessionId")]
    pub session_id: String,
    /// Browser URL the user must visit to authorize the CLI
    #[serde(rename = "loginUrl")]
    pub login_url: String,
    /// Seconds until the session expires
    #[serde(rename = "expiresIn")]
    pub expires_in: Option<u64>,
}

/// Current state of a login session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginPoll {
    /// `pending`, `authorized`, or `expired`
    pub status: String,
    /// Issued CLI token, present once authorized
    pub token: Option<String>,
    /// Account that authorized the session
    pub account: Option<String>,
}

impl LoginPoll {
    /// Whether the session has been authorized
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.status == "authorized" && self.token.is_some()
    }

    /// Whether the session can no longer be authorized
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.status == "expired"
    }
}
