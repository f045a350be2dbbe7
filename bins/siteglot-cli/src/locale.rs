//! Locale-bundle generation flow
//!
//! Shared by `create-translation`, `create-editor` (pseudo-locale `editor`),
//! and the open-editor flow. Selects the key source, streams it to the
//! service, and streams the generated bundle to the output path.

use crate::config;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use siteglot_api_client::SiteglotClient;
use siteglot_core::scanner::KeyScanner;
use siteglot_core::Error;
use std::path::PathBuf;
use std::time::Duration;

/// One bundle-generation request
#[derive(Debug, Clone)]
pub struct LocaleRequest {
    /// Site identifier
    pub site: String,
    /// Target locale, or `editor` for the editor bundle
    pub locale: String,
    /// Where the generated bundle is written
    pub out_file: PathBuf,
    /// Pre-supplied key catalog; skips the scanner when given
    pub source_file: Option<PathBuf>,
    /// Refuse to scan when no catalog is given
    pub skip_scan: bool,
}

impl LocaleRequest {
    /// Reject configurations with no possible key source
    ///
    /// Runs before any filesystem or network access.
    pub fn validate(&self) -> Result<(), Error> {
        if self.skip_scan && self.source_file.is_none() {
            return Err(Error::config(
                "--skip-scan is set but no --source-file was given",
            )
            .with_suggestion("Pass --source-file <catalog.json>, or drop --skip-scan"));
        }
        Ok(())
    }
}

/// Run the generation flow for one request
pub async fn create_locale_file(client: &SiteglotClient, req: &LocaleRequest) -> Result<()> {
    req.validate()?;

    let source_path = match &req.source_file {
        Some(path) => {
            println!(
                "  {} Using key catalog {}",
                "•".cyan(),
                path.display().to_string().bold()
            );
            path.clone()
        }
        None => {
            println!("  {} Scanning project for translation keys", "•".cyan());
            let catalog = config::temp_root().join("catalog.json");
            KeyScanner::new(config::SCAN_ROOT)
                .scan_to_file(&catalog)
                .context("Key scan failed")?
        }
    };

    let source = tokio::fs::File::open(&source_path)
        .await
        .with_context(|| format!("Failed to open key source {}", source_path.display()))?;

    let spinner = spinner(format!(
        "Requesting {} bundle for {}",
        req.locale, req.site
    ));
    let result = client
        .translations()
        .create_file(
            &req.site,
            &req.locale,
            config::FRAMEWORK,
            source,
            &req.out_file,
        )
        .await;
    spinner.finish_and_clear();

    let bytes = result.with_context(|| format!("Failed to generate the {} bundle", req.locale))?;
    println!(
        "  {} Wrote {} ({} bytes)",
        "✓".green(),
        req.out_file.display().to_string().bold(),
        bytes
    );
    Ok(())
}

fn spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("  {spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(skip_scan: bool, source_file: Option<&str>) -> LocaleRequest {
        LocaleRequest {
            site: "mysite".to_string(),
            locale: "fr".to_string(),
            out_file: PathBuf::from("./fr.js"),
            source_file: source_file.map(PathBuf::from),
            skip_scan,
        }
    }

    #[test]
    fn test_skip_scan_without_source_is_config_error() {
        let err = request(true, None).validate().unwrap_err();
        assert_eq!(err.code, siteglot_core::ErrorCode::ConfigError);
    }

    #[test]
    fn test_skip_scan_with_source_is_fine() {
        assert!(request(true, Some("keys.json")).validate().is_ok());
    }

    #[test]
    fn test_scanning_config_is_fine() {
        assert!(request(false, None).validate().is_ok());
    }
}
