//! Siteglot CLI - website-translation front end
//!
//! Scans a React project for translatable strings, generates localization and
//! editor bundles through the hosted Siteglot service, and can stage and
//! upload a temporary editor build of the application.

use clap::{CommandFactory, Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;
mod locale;
mod workspace;

use commands::{create_editor, create_translation, init, login, open_editor};

/// Command-line front end for the Siteglot website-translation service
#[derive(Parser)]
#[command(name = "siteglot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new site with the translation service
    Init {
        /// Name of the website
        name: String,

        /// The website's original locale
        original_locale: String,
    },

    /// Log the CLI in to the translation service
    Login,

    /// Generate the editor localization bundle
    CreateEditor {
        /// Unique site identifier
        site: String,

        /// Output bundle path
        #[arg(short = 'o', long, alias = "outFile", default_value = "./editor.js")]
        out_file: PathBuf,

        /// Key catalog to use instead of scanning the project
        #[arg(short = 's', long, alias = "sourceFile")]
        source_file: Option<PathBuf>,

        /// Never scan the project; requires --source-file
        #[arg(long, alias = "skipScan")]
        skip_scan: bool,
    },

    /// Rebuild the app with the editor overlay and open the hosted editor
    OpenEditor {
        /// Unique site identifier
        site: String,

        /// Key catalog to use instead of scanning the project
        #[arg(short = 's', long, alias = "sourceFile")]
        source_file: Option<PathBuf>,

        /// Target the production editor environment
        #[arg(long)]
        prod: bool,

        /// Never scan the project; requires --source-file
        #[arg(long, alias = "skipScan")]
        skip_scan: bool,
    },

    /// Generate a translated localization bundle
    CreateTranslation {
        /// Unique site identifier
        site: String,

        /// The language to translate to
        locale: String,

        /// Output bundle path; a literal `[locale]` is replaced with the locale
        #[arg(short = 'o', long, alias = "outFile", default_value = "./[locale].js")]
        out_file: String,

        /// Key catalog to use instead of scanning the project
        #[arg(short = 's', long, alias = "sourceFile")]
        source_file: Option<PathBuf>,

        /// Never scan the project; requires --source-file
        #[arg(long, alias = "skipScan")]
        skip_scan: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("siteglot=debug,siteglot_core=debug,siteglot_api_client=debug")
            .init();
    }

    let Some(command) = cli.command else {
        // No command selected: show usage without signaling an error.
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    let result = match command {
        Commands::Init { name, original_locale } => init::run(&name, &original_locale).await,

        Commands::Login => login::run().await,

        Commands::CreateEditor { site, out_file, source_file, skip_scan } => {
            create_editor::run(&site, out_file, source_file, skip_scan).await
        }

        Commands::OpenEditor { site, source_file, prod, skip_scan } => {
            open_editor::run(&site, source_file, prod, skip_scan).await
        }

        Commands::CreateTranslation { site, locale, out_file, source_file, skip_scan } => {
            create_translation::run(&site, &locale, &out_file, source_file, skip_scan).await
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
