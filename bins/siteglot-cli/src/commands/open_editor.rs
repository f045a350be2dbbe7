//! Open-editor command - rebuild the app with the editor overlay and upload it

use crate::config;
use crate::locale::{self, LocaleRequest};
use crate::workspace::{self, ProjectLayout, WorkspaceHold};
use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use siteglot_api_client::SiteglotClient;
use siteglot_core::{fsops, process, Error};
use std::fs;
use std::path::{Path, PathBuf};

/// Run the open-editor command
///
/// The flow stages a one-off editor build of the application in the system
/// temp directory and uploads it; the project's own entry point and build
/// output are back in place before the upload starts, whatever happened in
/// between.
pub async fn run(
    site: &str,
    source_file: Option<PathBuf>,
    prod: bool,
    skip_scan: bool,
) -> Result<()> {
    let request = LocaleRequest {
        site: site.to_string(),
        locale: config::EDITOR_LOCALE.to_string(),
        out_file: PathBuf::new(), // filled in below, after the temp root exists
        source_file,
        skip_scan,
    };
    request.validate()?;

    let client = SiteglotClient::new()?;

    println!();
    println!("  {}", format!("Opening editor for {site}").bold());

    // Clear out anything a prior failed run left behind.
    let temp_root = config::temp_root();
    fsops::reset_dir(&temp_root).context("Failed to prepare the temp workspace")?;

    let bundle_path = temp_root.join(format!("{site}.editor.js"));
    let request = LocaleRequest {
        out_file: bundle_path.clone(),
        ..request
    };
    locale::create_locale_file(&client, &request).await?;

    let resources = fs::read_to_string(&bundle_path)
        .with_context(|| format!("Failed to read {}", bundle_path.display()))?;
    let bootstrap = workspace::splice_bootstrap(workspace::BOOTSTRAP_TEMPLATE, &resources)?;

    let staged_dir = temp_root.join(format!("{site}.editor"));
    let layout = ProjectLayout::current();
    let hold = WorkspaceHold::acquire(layout, &temp_root.join("hold"))?;

    // The rebuild's outcome is checked only after the originals are back.
    let build_result = rebuild_and_stage(&hold, &bootstrap, &staged_dir);
    let restore_result = hold.restore();
    build_result?;
    restore_result.context("Failed to restore the project workspace")?;
    println!("  {} Project workspace restored", "✓".green());

    let spinner = upload_spinner();
    let session = client
        .translations()
        .upload_editor_build(&staged_dir, site, config::FRAMEWORK, prod)
        .await;
    spinner.finish_and_clear();
    let session = session.context("Failed to upload the editor build")?;

    if !session.success {
        bail!(
            "Editor upload failed: {}",
            session.error.unwrap_or_else(|| "Unknown error".to_string())
        );
    }

    match session.editor_url {
        Some(url) => {
            println!("  {} Editor ready:", "✓".green());
            println!();
            println!("    {}", url.cyan().underline());
        }
        None => println!("  {} Editor session created", "✓".green()),
    }
    println!();

    Ok(())
}

/// Append the bootstrap to the entry point, rebuild, and stage the output
///
/// Runs between acquire and restore; every live-path write here is undone by
/// the caller's restore.
fn rebuild_and_stage(hold: &WorkspaceHold, bootstrap: &str, staged_dir: &Path) -> Result<()> {
    let layout = hold.layout();

    let original = fs::read_to_string(hold.held_entry())
        .context("Failed to read the held entry point")?;
    fs::write(
        layout.entry_path(),
        format!("{original}\n{bootstrap}\n"),
    )
    .context("Failed to write the instrumented entry point")?;

    if !process::command_exists(config::BUILD_PROGRAM) {
        return Err(Error::command_not_found(config::BUILD_PROGRAM).into());
    }

    println!(
        "  {} Rebuilding application ({} {})",
        "•".cyan(),
        config::BUILD_PROGRAM,
        config::BUILD_ARGS.join(" ")
    );
    let exit_code =
        process::run_streaming_in_dir(config::BUILD_PROGRAM, config::BUILD_ARGS, &layout.root)?;
    if exit_code != 0 {
        return Err(Error::command_failed(
            &format!("{} {}", config::BUILD_PROGRAM, config::BUILD_ARGS.join(" ")),
            exit_code,
        )
        .into());
    }

    let build = layout.build_path();
    if !build.exists() {
        return Err(Error::build_output_missing(&build).into());
    }
    fsops::move_path(&build, staged_dir)?;

    Ok(())
}

fn upload_spinner() -> indicatif::ProgressBar {
    let bar = indicatif::ProgressBar::new_spinner();
    bar.set_style(
        indicatif::ProgressStyle::with_template("  {spinner} {msg}")
            .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner()),
    );
    bar.set_message("Uploading editor build");
    bar.enable_steady_tick(std::time::Duration::from_millis(120));
    bar
}
