//! Project-layout configuration for the CLI
//!
//! The CLI operates on a React project from its root directory. These are the
//! conventional paths and commands for such a project; the build directory
//! and entry point can be overridden through the environment for projects
//! with a custom setup.

use std::env;
use std::path::PathBuf;

/// Framework identifier sent with every service call
pub const FRAMEWORK: &str = "react";

/// Pseudo-locale selecting the live-editing bundle
pub const EDITOR_LOCALE: &str = "editor";

/// Token substituted with the target locale in output paths
pub const LOCALE_TOKEN: &str = "[locale]";

/// Directory scanned for translatable source files
pub const SCAN_ROOT: &str = "src";

/// Build program invoked for the editor rebuild
pub const BUILD_PROGRAM: &str = "npm";

/// Arguments for the build program
pub const BUILD_ARGS: &[&str] = &["run", "build"];

/// The project's build output directory
pub fn build_dir() -> String {
    env::var("SITEGLOT_BUILD_DIR").unwrap_or_else(|_| "build".to_string())
}

/// The project's application entry-point source file
pub fn entry_file() -> String {
    env::var("SITEGLOT_ENTRY_FILE").unwrap_or_else(|_| "src/index.js".to_string())
}

/// Invocation-scoped temp root under the system temp directory
pub fn temp_root() -> PathBuf {
    env::temp_dir().join("siteglot")
}
