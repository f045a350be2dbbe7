//! Translation-key scanning
//!
//! Walks a project's source tree, extracts translation keys from scripts and
//! templates, and aggregates them into a single JSON catalog. Input files are
//! sorted lexically and keys are deduplicated (first occurrence wins), so the
//! catalog is deterministic for a given tree.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// `t("key")` / `t('key', 'Default value')` call sites in scripts
static T_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\bt\(\s*(?:"([^"]+)"|'([^']+)')\s*(?:,\s*(?:"([^"]*)"|'([^']*)'))?"#,
    )
    .expect("static pattern")
});

/// `i18nKey="key"` attributes in JSX
static I18N_KEY_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"i18nKey\s*=\s*(?:"([^"]+)"|'([^']+)')"#).expect("static pattern"));

/// `{{t "key"}}` helpers in handlebars templates
static HBS_HELPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\{\{\s*t\s+(?:"([^"]+)"|'([^']+)')"#).expect("static pattern"));

/// A translation key extracted from a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedKey {
    /// The translation key
    pub key: String,
    /// Default text given at the call site, if any
    pub default_value: Option<String>,
    /// File the key was first seen in
    pub file: PathBuf,
}

/// Translation-key scanner with configurable filters
pub struct KeyScanner {
    root: PathBuf,
    extensions: Vec<String>,
    exclude_patterns: Vec<String>,
}

impl KeyScanner {
    /// Create a scanner rooted at the given project directory
    ///
    /// Defaults match a React project: scripts and handlebars templates under
    /// the root, with dependency and build directories excluded.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: ["js", "jsx", "ts", "tsx", "hbs"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            exclude_patterns: ["**/node_modules/**", "**/build/**", "**/dist/**"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Filter by file extensions (e.g., "js", "ts", "hbs")
    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = extensions.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Add patterns to exclude (glob patterns)
    pub fn exclude(mut self, patterns: &[&str]) -> Self {
        self.exclude_patterns
            .extend(patterns.iter().map(|s| s.to_string()));
        self
    }

    /// Scan and return extracted keys, ordered by file path, deduplicated
    pub fn scan(&self) -> Result<Vec<ScannedKey>> {
        let files = self.source_files()?;
        if files.is_empty() {
            return Err(Error::no_sources_found(&self.root));
        }

        let mut seen = std::collections::HashSet::new();
        let mut keys = Vec::new();

        for file in &files {
            let content = fs::read_to_string(file)
                .map_err(|e| Error::scan(format!("Failed to read {}: {}", file.display(), e)))?;

            for found in extract_keys(&content, file) {
                if seen.insert(found.key.clone()) {
                    debug!(key = %found.key, file = %file.display(), "extracted translation key");
                    keys.push(found);
                }
            }
        }

        Ok(keys)
    }

    /// Scan and write the aggregated catalog to `out`, returning the path
    ///
    /// The catalog is re-opened by the caller as the upload stream, so it is
    /// fully written and closed before this returns.
    pub fn scan_to_file(&self, out: &Path) -> Result<PathBuf> {
        let keys = self.scan()?;
        write_catalog(&keys, out)?;
        Ok(out.to_path_buf())
    }

    /// Discover matching source files, sorted lexically for determinism
    fn source_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|e| !is_hidden(e.path()))
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if !self.extensions.iter().any(|e| e == ext) {
                continue;
            }

            if self.should_exclude(&path.to_string_lossy()) {
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    fn should_exclude(&self, path_str: &str) -> bool {
        for pattern in &self.exclude_patterns {
            if pattern.contains("**") {
                let parts: Vec<&str> = pattern.split("**").collect();
                if parts.len() == 3 {
                    // "**/name/**" form: match on the path segment
                    let segment = parts[1].trim_matches('/');
                    if path_str
                        .split('/')
                        .any(|component| component == segment)
                    {
                        return true;
                    }
                } else if parts.len() == 2 {
                    let suffix = parts[1].trim_start_matches('/');
                    if path_str.contains(suffix) {
                        return true;
                    }
                }
            } else if let Ok(pat) = glob::Pattern::new(pattern) {
                if pat.matches(path_str) {
                    return true;
                }
            }
        }
        false
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.') && n != "." && n != "..")
        .unwrap_or(false)
}

/// Extract translation keys from one file's content
pub fn extract_keys(content: &str, file: &Path) -> Vec<ScannedKey> {
    let mut keys = Vec::new();

    for caps in T_CALL.captures_iter(content) {
        let key = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string());
        let default_value = caps
            .get(3)
            .or_else(|| caps.get(4))
            .map(|m| m.as_str().to_string());
        if let Some(key) = key {
            keys.push(ScannedKey {
                key,
                default_value,
                file: file.to_path_buf(),
            });
        }
    }

    for caps in I18N_KEY_ATTR.captures_iter(content) {
        if let Some(m) = caps.get(1).or_else(|| caps.get(2)) {
            keys.push(ScannedKey {
                key: m.as_str().to_string(),
                default_value: None,
                file: file.to_path_buf(),
            });
        }
    }

    if file.extension().and_then(|e| e.to_str()) == Some("hbs") {
        for caps in HBS_HELPER.captures_iter(content) {
            if let Some(m) = caps.get(1).or_else(|| caps.get(2)) {
                keys.push(ScannedKey {
                    key: m.as_str().to_string(),
                    default_value: None,
                    file: file.to_path_buf(),
                });
            }
        }
    }

    keys
}

/// Serialize keys as a JSON catalog mapping key to default text
///
/// Keys without an explicit default use the key itself, matching what the
/// translation service expects as the source text.
pub fn write_catalog(keys: &[ScannedKey], out: &Path) -> Result<()> {
    let mut catalog = BTreeMap::new();
    for k in keys {
        catalog.insert(
            k.key.clone(),
            k.default_value.clone().unwrap_or_else(|| k.key.clone()),
        );
    }

    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&catalog)?;
    fs::write(out, format!("{json}\n"))?;
    Ok(())
}
