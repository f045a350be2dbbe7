//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one area of the Siteglot API.
//!
//! | Module | Backend area | Description |
//! |--------|--------------|-------------|
//! | `auth` | `cli/sessions` | Interactive CLI login sessions |
//! | `sites` | `sites` | Site provisioning |
//! | `translations` | `sites/{site}/translations`, `sites/{site}/editor` | Bundle generation and editor uploads |

pub mod auth;
pub mod sites;
pub mod translations;

pub use auth::AuthApi;
pub use sites::SitesApi;
pub use translations::TranslationsApi;
