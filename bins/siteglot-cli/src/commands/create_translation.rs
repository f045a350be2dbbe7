//! Create-translation command - generate a translated localization bundle

use crate::config;
use crate::locale::{self, LocaleRequest};
use anyhow::Result;
use owo_colors::OwoColorize;
use siteglot_api_client::SiteglotClient;
use std::path::PathBuf;

/// Substitute the `[locale]` token in an output path template
///
/// Applies to the default (`./[locale].js`) and to user-supplied paths
/// alike, so `--out-file dist/[locale].bundle.js fr` lands at
/// `dist/fr.bundle.js`.
pub fn resolve_out_file(template: &str, locale: &str) -> PathBuf {
    PathBuf::from(template.replace(config::LOCALE_TOKEN, locale))
}

/// Run the create-translation command
pub async fn run(
    site: &str,
    target_locale: &str,
    out_file: &str,
    source_file: Option<PathBuf>,
    skip_scan: bool,
) -> Result<()> {
    let request = LocaleRequest {
        site: site.to_string(),
        locale: target_locale.to_string(),
        out_file: resolve_out_file(out_file, target_locale),
        source_file,
        skip_scan,
    };
    request.validate()?;

    println!();
    println!(
        "  {}",
        format!("Translation bundle for {site} ({target_locale})").bold()
    );

    let client = SiteglotClient::new()?;
    locale::create_locale_file(&client, &request).await?;

    println!("  {} Done", "✓".green());
    println!();
    Ok(())
}
