//! Translation-bundle and editor-upload endpoints

use crate::client::SiteglotClient;
use crate::error::{ApiError, ApiResult};
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Method};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use walkdir::WalkDir;

/// Translations API interface
#[derive(Clone)]
pub struct TranslationsApi {
    client: SiteglotClient,
}

impl TranslationsApi {
    /// Create a new translations API interface
    pub(crate) fn new(client: SiteglotClient) -> Self {
        Self { client }
    }

    /// Generate a localized bundle for `site` and stream it to `dest`
    ///
    /// The key catalog is streamed from `source` as the request body; the
    /// response body is the generated bundle (a JavaScript file), written to
    /// `dest` as it arrives. The pseudo-locale `editor` selects the
    /// live-editing bundle. Returns the number of bytes written.
    pub async fn create_file(
        &self,
        site: &str,
        locale: &str,
        framework: &str,
        source: tokio::fs::File,
        dest: &Path,
    ) -> ApiResult<u64> {
        self.client.require_auth()?;

        let request = self
            .client
            .request_builder(Method::POST, &format!("sites/{site}/translations"))
            .query(&[("locale", locale), ("framework", framework)])
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(Body::from(source));

        let mut response = self.client.execute_raw(request).await?;

        let mut out = tokio::fs::File::create(dest).await?;
        let mut written: u64 = 0;
        while let Some(chunk) = response.chunk().await.map_err(ApiError::Request)? {
            out.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        out.flush().await?;

        debug!(locale, bytes = written, dest = %dest.display(), "bundle written");
        Ok(written)
    }

    /// Upload a staged editor build and open a hosted editor session
    ///
    /// Every file under `dir` is sent as one multipart part named by its
    /// path relative to `dir`. Returns the editor session, including the URL
    /// to open in a browser.
    pub async fn upload_editor_build(
        &self,
        dir: &Path,
        site: &str,
        framework: &str,
        production: bool,
    ) -> ApiResult<EditorSession> {
        self.client.require_auth()?;

        let mut form = Form::new();
        let mut count = 0usize;

        let mut files: Vec<_> = WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .collect();
        files.sort();

        for path in files {
            let rel = path
                .strip_prefix(dir)
                .map_err(|_| ApiError::config("upload path escaped the staging directory"))?
                .to_string_lossy()
                .into_owned();
            let bytes = tokio::fs::read(&path).await?;
            form = form.part("files", Part::bytes(bytes).file_name(rel));
            count += 1;
        }

        if count == 0 {
            return Err(ApiError::config(format!(
                "Nothing to upload: {} is empty",
                dir.display()
            )));
        }
        debug!(site, files = count, "uploading editor build");

        let env = if production { "production" } else { "preview" };
        let request = self
            .client
            .request_builder(Method::POST, &format!("sites/{site}/editor"))
            .query(&[("framework", framework), ("env", env)])
            .multipart(form);

        let response = self.client.execute_raw(request).await?;
        response.json().await.map_err(ApiError::Request)
    }
}

/// Hosted editor session response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSession {
    /// Success status
    pub success: bool,
    /// URL of the hosted editor for this upload
    #[serde(rename = "editorUrl")]
    pub editor_url: Option<String>,
    /// Error message if failed
    pub error: Option<String>,
}
