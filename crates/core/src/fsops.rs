//! Filesystem relocation helpers
//!
//! The editor workspace flow moves whole directory trees between the project
//! and the system temp directory, which may live on a different filesystem.
//! `rename` is tried first; on failure the move degrades to copy-then-delete.

use crate::error::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Move a file or directory, falling back to copy + delete across devices
pub fn move_path(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }

    if fs::rename(src, dst).is_ok() {
        return Ok(());
    }

    if src.is_dir() {
        copy_dir_all(src, dst)?;
        fs::remove_dir_all(src)?;
    } else {
        fs::copy(src, dst)?;
        fs::remove_file(src)?;
    }
    Ok(())
}

/// Recursively copy a directory tree
pub fn copy_dir_all(src: &Path, dst: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| {
            crate::error::Error::io(format!("Failed to walk {}: {}", src.display(), e))
        })?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Remove a file or directory if it exists
pub fn remove_if_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    if path.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Delete any prior content at `path` and recreate it as an empty directory
pub fn reset_dir(path: &Path) -> Result<()> {
    remove_if_exists(path)?;
    fs::create_dir_all(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_move_file() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        let dst = tmp.path().join("sub/b.txt");
        write(&src, "hello");

        move_path(&src, &dst).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "hello");
    }

    #[test]
    fn test_move_directory_tree() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("build");
        write(&src.join("index.html"), "<html>");
        write(&src.join("static/app.js"), "js");

        let dst = tmp.path().join("stash");
        move_path(&src, &dst).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read_to_string(dst.join("index.html")).unwrap(), "<html>");
        assert_eq!(fs::read_to_string(dst.join("static/app.js")).unwrap(), "js");
    }

    #[test]
    fn test_copy_dir_all_preserves_source() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        write(&src.join("one.txt"), "1");

        let dst = tmp.path().join("dst");
        copy_dir_all(&src, &dst).unwrap();

        assert!(src.join("one.txt").exists());
        assert!(dst.join("one.txt").exists());
    }

    #[test]
    fn test_remove_if_exists_missing_is_ok() {
        let tmp = TempDir::new().unwrap();
        remove_if_exists(&tmp.path().join("nothing")).unwrap();
    }

    #[test]
    fn test_reset_dir_clears_previous_content() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("work");
        write(&dir.join("stale.txt"), "old");

        reset_dir(&dir).unwrap();

        assert!(dir.is_dir());
        assert!(!dir.join("stale.txt").exists());
    }
}
