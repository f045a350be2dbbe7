//! Typed API client for the Siteglot website-translation service
//!
//! This crate provides the HTTP client used by the `siteglot` CLI to talk to
//! the hosted service: site provisioning, interactive CLI login, streaming
//! translation-bundle generation, and editor-build uploads.
//!
//! # Features
//!
//! - **Environment-based configuration**: URLs and timeouts from environment
//!   variables with production defaults
//! - **Stored credentials**: bearer token persisted by `siteglot login`
//! - **Request correlation**: every request carries a unique ID for debugging
//! - **Streaming**: key catalogs are uploaded and bundles downloaded as
//!   streams, never buffered whole
//!
//! Remote failures are surfaced as opaque [`ApiError`]s; the client never
//! retries on its own.
//!
//! # Example
//!
//! ```rust,no_run
//! use siteglot_api_client::SiteglotClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SiteglotClient::new()?;
//!
//!     let source = tokio::fs::File::open("keys.json").await?;
//!     client
//!         .translations()
//!         .create_file("mysite", "fr", "react", source, std::path::Path::new("fr.js"))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod credentials;
pub mod endpoints;
pub mod error;

pub use client::SiteglotClient;
pub use config::{ClientConfig, Environment};
pub use credentials::Credentials;
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::SiteglotClient;
    pub use crate::config::{ClientConfig, Environment};
    pub use crate::endpoints::{AuthApi, SitesApi, TranslationsApi};
    pub use crate::error::{ApiError, ApiResult};
}
