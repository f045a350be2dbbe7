//! Create-editor command - generate the editor localization bundle

use crate::config;
use crate::locale::{self, LocaleRequest};
use anyhow::Result;
use owo_colors::OwoColorize;
use siteglot_api_client::SiteglotClient;
use std::path::PathBuf;

/// Run the create-editor command
///
/// The editor bundle is the translation flow with the pseudo-locale
/// `editor`; the service embeds the live-editing metadata in the response.
pub async fn run(
    site: &str,
    out_file: PathBuf,
    source_file: Option<PathBuf>,
    skip_scan: bool,
) -> Result<()> {
    let request = LocaleRequest {
        site: site.to_string(),
        locale: config::EDITOR_LOCALE.to_string(),
        out_file,
        source_file,
        skip_scan,
    };
    request.validate()?;

    println!();
    println!("  {}", format!("Editor bundle for {site}").bold());

    let client = SiteglotClient::new()?;
    locale::create_locale_file(&client, &request).await?;

    println!("  {} Done", "✓".green());
    println!();
    Ok(())
}
