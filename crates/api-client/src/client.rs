//! Main API client implementation

use crate::config::ClientConfig;
use crate::credentials;
use crate::endpoints::{AuthApi, SitesApi, TranslationsApi};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Siteglot API client
///
/// Wraps `reqwest` with bearer authentication from the stored CLI
/// credentials and per-request correlation IDs. Remote failures surface
/// unchanged; the client performs no retries (the CLI's flows are
/// single-shot by design).
#[derive(Clone)]
pub struct SiteglotClient {
    inner: Client,
    config: Arc<ClientConfig>,
    token: Option<String>,
}

impl SiteglotClient {
    /// Create a new client with configuration and credentials from the environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static("siteglot-cli/0.4"));

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        let token = credentials::load_token()?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            token,
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Whether a CLI token is available
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Replace the active token (used right after a successful login)
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Fail unless a CLI token is available
    pub fn require_auth(&self) -> ApiResult<()> {
        if self.token.is_none() {
            return Err(ApiError::NotAuthenticated);
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access interactive login endpoints
    #[must_use]
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// Access site management endpoints
    #[must_use]
    pub fn sites(&self) -> SitesApi {
        SitesApi::new(self.clone())
    }

    /// Access translation-bundle endpoints
    #[must_use]
    pub fn translations(&self) -> TranslationsApi {
        TranslationsApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request and deserialize the JSON response
    #[instrument(skip(self), fields(request_id))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .request_builder(Method::GET, path)
            .send()
            .await
            .map_err(ApiError::Request)?;
        self.handle_response(response).await
    }

    /// Perform a POST request and deserialize the JSON response
    #[instrument(skip(self, body), fields(request_id))]
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .request_builder(Method::POST, path)
            .json(body)
            .send()
            .await
            .map_err(ApiError::Request)?;
        self.handle_response(response).await
    }

    /// Build a request builder with correlation ID and bearer auth attached
    ///
    /// Used directly by endpoints that stream request or response bodies.
    pub fn request_builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), path);
        let request_id = Uuid::new_v4().to_string();
        debug!(request_id = %request_id, url = %url, "building request");

        let mut request = self
            .inner
            .request(method, &url)
            .header(X_REQUEST_ID, &request_id);

        if let Some(ref token) = self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        request
    }

    /// Send a prepared request and return the raw response
    ///
    /// Non-success statuses are converted to [`ApiError::ApiResponse`] with
    /// the response body as the message.
    pub async fn execute_raw(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(ApiError::Request)?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }

    /// Handle an HTTP response and deserialize its JSON body
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(ApiError::Request)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = ClientConfig::development();
        let client = SiteglotClient::with_config(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_require_auth_without_token() {
        let mut client = SiteglotClient::with_config(ClientConfig::development()).unwrap();
        client.token = None;
        assert!(matches!(
            client.require_auth(),
            Err(ApiError::NotAuthenticated)
        ));

        client.set_token("tok_test");
        assert!(client.require_auth().is_ok());
    }
}
