//! Login command - interactive CLI authentication

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use siteglot_api_client::{credentials, ApiError, Credentials, SiteglotClient};
use std::time::{Duration, Instant};

/// How often a pending session is polled
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Fallback deadline when the service does not report an expiry
const DEFAULT_DEADLINE_SECS: u64 = 300;

/// Run the login command
pub async fn run() -> Result<()> {
    let client = SiteglotClient::new()?;

    let session = client
        .auth()
        .begin()
        .await
        .context("Failed to start a login session")?;

    println!();
    println!("  Open this URL in your browser to authorize the CLI:");
    println!();
    println!("    {}", session.login_url.cyan().underline());
    println!();

    let deadline_secs = session.expires_in.unwrap_or(DEFAULT_DEADLINE_SECS);
    let started = Instant::now();

    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("  {spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message("Waiting for authorization...");
    bar.enable_steady_tick(Duration::from_millis(120));

    // Polling a pending session is the designed interaction here, not a
    // retry of a failed call.
    loop {
        if started.elapsed().as_secs() > deadline_secs {
            bar.finish_and_clear();
            return Err(ApiError::LoginTimeout(deadline_secs).into());
        }

        tokio::time::sleep(POLL_INTERVAL).await;
        let poll = client.auth().poll(&session.session_id).await?;

        if poll.is_expired() {
            bar.finish_and_clear();
            bail!("The login session expired before it was authorized");
        }

        if poll.is_authorized() {
            bar.finish_and_clear();
            let account = poll.account.clone();
            if let Some(token) = poll.token {
                credentials::save(&Credentials::new(token, account.clone()))?;
            }
            match account {
                Some(account) => println!("  {} Logged in as {}", "✓".green(), account.bold()),
                None => println!("  {} Logged in", "✓".green()),
            }
            println!();
            return Ok(());
        }
    }
}
