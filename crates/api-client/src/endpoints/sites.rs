//! Site provisioning endpoints

use crate::client::SiteglotClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};

/// Sites API interface
#[derive(Clone)]
pub struct SitesApi {
    client: SiteglotClient,
}

impl SitesApi {
    /// Create a new sites API interface
    pub(crate) fn new(client: SiteglotClient) -> Self {
        Self { client }
    }

    /// Register a new site under the account
    pub async fn create(
        &self,
        name: &str,
        original_locale: &str,
        framework: &str,
    ) -> ApiResult<SiteResponse> {
        self.client.require_auth()?;

        let body = serde_json::json!({
            "name": name,
            "originalLocale": original_locale,
            "framework": framework,
        });
        self.client.post("sites", &body).await
    }
}

/// Site creation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteResponse {
    /// Success status
    pub success: bool,
    /// The created site
    pub site: Option<SiteInfo>,
    /// Error message if failed
    pub error: Option<String>,
}

/// A registered site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Unique site identifier, used by all other commands
    pub id: String,
    /// Display name
    pub name: String,
    /// The site's original locale
    #[serde(rename = "originalLocale")]
    pub original_locale: String,
    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_response_deserialize() {
        let json = r#"{
            "success": true,
            "site": {
                "id": "mysite",
                "name": "My Website",
                "originalLocale": "en",
                "createdAt": "2025-11-02T10:00:00Z"
            },
            "error": null
        }"#;

        let response: SiteResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        let site = response.site.unwrap();
        assert_eq!(site.id, "mysite");
        assert_eq!(site.original_locale, "en");
    }

    #[test]
    fn test_site_response_error() {
        let json = r#"{"success": false, "site": null, "error": "name already taken"}"#;
        let response: SiteResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("name already taken"));
    }
}
