//! Editor workspace choreography
//!
//! The open-editor flow rebuilds the user's application with the editor
//! overlay appended to its entry point. The live build output and entry-point
//! source are relocated to holding paths first and put back afterwards, so
//! the project on disk ends the run exactly as it started, whether or not the
//! rebuild succeeds.
//!
//! [`WorkspaceHold`] is the scoped-acquisition half of that contract:
//! `acquire` relocates the originals aside, `restore` puts them back. The
//! flow calls `restore` on every exit path; `Drop` is a best-effort backstop
//! for panics.

use siteglot_core::error::{Error, Result};
use siteglot_core::fsops;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Placeholder token replaced with the generated editor bundle
pub const RESOURCES_TOKEN: &str = "'{{RESOURCES}}'";

/// Bootstrap script appended to the entry point of the editor build
pub const BOOTSTRAP_TEMPLATE: &str = include_str!("../assets/bootstrap.js");

/// Paths of the project being rebuilt
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    /// Project root the build command runs in
    pub root: PathBuf,
    /// Build output directory, relative to the root
    pub build_dir: String,
    /// Application entry-point source file, relative to the root
    pub entry_file: String,
}

impl ProjectLayout {
    /// Layout for the current working directory
    pub fn current() -> Self {
        Self {
            root: PathBuf::from("."),
            build_dir: crate::config::build_dir(),
            entry_file: crate::config::entry_file(),
        }
    }

    /// Absolute-ish path of the live build output
    pub fn build_path(&self) -> PathBuf {
        self.root.join(&self.build_dir)
    }

    /// Absolute-ish path of the live entry-point source
    pub fn entry_path(&self) -> PathBuf {
        self.root.join(&self.entry_file)
    }
}

/// Splice the generated bundle into the bootstrap template
///
/// A template without the placeholder is corrupt; that is a hard error, not
/// a skip.
pub fn splice_bootstrap(template: &str, resources: &str) -> Result<String> {
    if !template.contains(RESOURCES_TOKEN) {
        return Err(Error::placeholder_missing(RESOURCES_TOKEN));
    }
    Ok(template.replacen(RESOURCES_TOKEN, resources, 1))
}

/// The project's build output and entry point, relocated to holding paths
///
/// Exists between the acquire and restore halves of the editor rebuild. While
/// held, the flow owns the live paths exclusively and may write whatever it
/// needs there.
#[derive(Debug)]
pub struct WorkspaceHold {
    layout: ProjectLayout,
    held_entry: PathBuf,
    held_build: Option<PathBuf>,
    restored: bool,
}

impl WorkspaceHold {
    /// Relocate the live build output and entry-point source into `hold_dir`
    ///
    /// The entry point must exist (the command runs from the project root);
    /// a missing build directory is fine, the project may never have been
    /// built.
    pub fn acquire(layout: ProjectLayout, hold_dir: &Path) -> Result<Self> {
        fs::create_dir_all(hold_dir)?;

        let entry = layout.entry_path();
        if !entry.is_file() {
            return Err(Error::file_not_found(&entry)
                .with_context("open-editor must run from the project root"));
        }

        let held_entry = hold_dir.join("index.js");
        fsops::move_path(&entry, &held_entry)?;
        debug!(from = %entry.display(), to = %held_entry.display(), "entry point held");

        let build = layout.build_path();
        let held_build = if build.exists() {
            let stash = hold_dir.join("build");
            fsops::move_path(&build, &stash)?;
            debug!(from = %build.display(), to = %stash.display(), "build output held");
            Some(stash)
        } else {
            None
        };

        Ok(Self {
            layout,
            held_entry,
            held_build,
            restored: false,
        })
    }

    /// The project layout this hold was acquired for
    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Holding path of the original entry-point source
    pub fn held_entry(&self) -> &Path {
        &self.held_entry
    }

    /// Put the originals back, discarding anything written at the live paths
    ///
    /// Runs whether or not the rebuild succeeded; the build step's own result
    /// is handled by the caller after restoration.
    pub fn restore(mut self) -> Result<()> {
        let result = self.restore_inner();
        self.restored = true;
        result
    }

    fn restore_inner(&self) -> Result<()> {
        let build = self.layout.build_path();
        fsops::remove_if_exists(&build)?;
        if let Some(stash) = &self.held_build {
            fsops::move_path(stash, &build)?;
        }

        let entry = self.layout.entry_path();
        fsops::remove_if_exists(&entry)?;
        fsops::move_path(&self.held_entry, &entry)?;

        debug!("workspace restored");
        Ok(())
    }
}

impl Drop for WorkspaceHold {
    fn drop(&mut self) {
        if !self.restored {
            let _ = self.restore_inner();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn layout_in(root: &Path) -> ProjectLayout {
        ProjectLayout {
            root: root.to_path_buf(),
            build_dir: "build".to_string(),
            entry_file: "src/index.js".to_string(),
        }
    }

    fn seed_project(root: &Path) {
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/index.js"), "render(<App />);\n").unwrap();
        fs::create_dir_all(root.join("build/static")).unwrap();
        fs::write(root.join("build/index.html"), "<html>old</html>").unwrap();
        fs::write(root.join("build/static/app.js"), "old js").unwrap();
    }

    #[test]
    fn test_splice_replaces_placeholder() {
        let spliced = splice_bootstrap("before '{{RESOURCES}}' after", "{\"k\":\"v\"}").unwrap();
        assert_eq!(spliced, "before {\"k\":\"v\"} after");
    }

    #[test]
    fn test_splice_without_placeholder_is_hard_error() {
        let err = splice_bootstrap("no token here", "{}").unwrap_err();
        assert_eq!(err.code, siteglot_core::ErrorCode::PlaceholderMissing);
    }

    #[test]
    fn test_bundled_template_has_placeholder() {
        assert!(BOOTSTRAP_TEMPLATE.contains(RESOURCES_TOKEN));
    }

    #[test]
    fn test_restore_after_successful_rebuild() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("project");
        seed_project(&root);
        let layout = layout_in(&root);

        let hold = WorkspaceHold::acquire(layout.clone(), &tmp.path().join("hold")).unwrap();

        // Simulate the rebuild: new entry point, new build output, staged away.
        fs::write(layout.entry_path(), "render(<App />);\n// overlay\n").unwrap();
        fs::create_dir_all(layout.build_path()).unwrap();
        fs::write(layout.build_path().join("index.html"), "<html>new</html>").unwrap();
        fsops::move_path(&layout.build_path(), &tmp.path().join("staged")).unwrap();

        hold.restore().unwrap();

        assert_eq!(
            fs::read_to_string(layout.entry_path()).unwrap(),
            "render(<App />);\n"
        );
        assert_eq!(
            fs::read_to_string(layout.build_path().join("index.html")).unwrap(),
            "<html>old</html>"
        );
        assert_eq!(
            fs::read_to_string(tmp.path().join("staged/index.html")).unwrap(),
            "<html>new</html>"
        );
    }

    #[test]
    fn test_restore_after_failed_rebuild_discards_partial_output() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("project");
        seed_project(&root);
        let layout = layout_in(&root);

        let hold = WorkspaceHold::acquire(layout.clone(), &tmp.path().join("hold")).unwrap();

        // Simulate a build that died halfway: modified entry, partial output.
        fs::write(layout.entry_path(), "garbage").unwrap();
        fs::create_dir_all(layout.build_path()).unwrap();
        fs::write(layout.build_path().join("partial.js"), "half").unwrap();

        hold.restore().unwrap();

        assert_eq!(
            fs::read_to_string(layout.entry_path()).unwrap(),
            "render(<App />);\n"
        );
        assert!(!layout.build_path().join("partial.js").exists());
        assert_eq!(
            fs::read_to_string(layout.build_path().join("static/app.js")).unwrap(),
            "old js"
        );
    }

    #[test]
    fn test_acquire_without_build_dir() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("project");
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/index.js"), "entry\n").unwrap();
        let layout = layout_in(&root);

        let hold = WorkspaceHold::acquire(layout.clone(), &tmp.path().join("hold")).unwrap();
        fs::create_dir_all(layout.build_path()).unwrap();
        fs::write(layout.build_path().join("new.txt"), "x").unwrap();
        hold.restore().unwrap();

        // No pre-existing build output: the live path ends the run empty.
        assert!(!layout.build_path().exists());
        assert_eq!(fs::read_to_string(layout.entry_path()).unwrap(), "entry\n");
    }

    #[test]
    fn test_acquire_requires_entry_point() {
        let tmp = TempDir::new().unwrap();
        let layout = layout_in(&tmp.path().join("empty"));
        let err = WorkspaceHold::acquire(layout, &tmp.path().join("hold")).unwrap_err();
        assert_eq!(err.code, siteglot_core::ErrorCode::FileNotFound);
    }

    #[test]
    fn test_drop_backstop_restores() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("project");
        seed_project(&root);
        let layout = layout_in(&root);

        {
            let _hold =
                WorkspaceHold::acquire(layout.clone(), &tmp.path().join("hold")).unwrap();
            fs::write(layout.entry_path(), "scribble").unwrap();
            // Dropped without an explicit restore.
        }

        assert_eq!(
            fs::read_to_string(layout.entry_path()).unwrap(),
            "render(<App />);\n"
        );
    }
}
