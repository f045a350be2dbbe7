//! Init command - register a new site

use crate::config;
use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use siteglot_api_client::SiteglotClient;

/// Run the init command
pub async fn run(name: &str, original_locale: &str) -> Result<()> {
    let client = SiteglotClient::new()?;

    println!();
    println!("  {}", format!("Registering site: {name}").bold());

    let response = client
        .sites()
        .create(name, original_locale, config::FRAMEWORK)
        .await
        .context("Failed to create the site")?;

    if !response.success {
        bail!(
            "Site creation failed: {}",
            response.error.unwrap_or_else(|| "Unknown error".to_string())
        );
    }

    let site = match response.site {
        Some(site) => site,
        None => bail!("Service reported success but returned no site"),
    };

    println!(
        "  {} Site {} created (original locale {})",
        "✓".green(),
        site.id.bold(),
        site.original_locale
    );
    println!();
    println!(
        "  Next: {}",
        format!("siteglot open-editor {}", site.id).cyan()
    );
    println!();

    Ok(())
}
