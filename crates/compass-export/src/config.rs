//! Export fixer configuration.
//!
//! Settings can come from a TOML file and are then overridden by command
//! line arguments:
//!
//! ```toml
//! dist_dir = "web-build"
//! extensions = ["html", "htm"]
//! skip_hidden = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Configuration for [`fix_export`](crate::fix_export).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Root of the static export.
    pub dist_dir: PathBuf,
    /// File extensions to rewrite, without the leading dot.
    pub extensions: Vec<String>,
    /// Whether to skip files and directories starting with '.'.
    pub skip_hidden: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from("dist"),
            extensions: vec!["html".to_string()],
            skip_hidden: false,
        }
    }
}

impl ExportConfig {
    /// Create a config for a dist directory with default settings.
    pub fn new(dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
            ..Default::default()
        }
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Set the dist directory.
    pub fn with_dist_dir(mut self, dist_dir: impl Into<PathBuf>) -> Self {
        self.dist_dir = dist_dir.into();
        self
    }

    /// Replace the extensions to rewrite.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether hidden entries are skipped.
    pub fn skip_hidden(mut self, skip: bool) -> Self {
        self.skip_hidden = skip;
        self
    }

    /// Check whether a path's file name ends with one of the configured
    /// extensions.
    ///
    /// Matching is a case-sensitive suffix test on `.{ext}`, so `UP.HTML`
    /// does not match `html` while a file named `.html` does. A leading dot
    /// in the configured value is ignored.
    pub fn matches_extension(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|want| {
            let want = want.trim_start_matches('.');
            !want.is_empty()
                && name
                    .strip_suffix(want)
                    .is_some_and(|stem| stem.ends_with('.'))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.extensions, vec!["html"]);
        assert!(!config.skip_hidden);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ExportConfig::from_toml_str(r#"dist_dir = "web-build""#).unwrap();
        assert_eq!(config.dist_dir, PathBuf::from("web-build"));
        assert_eq!(config.extensions, vec!["html"]);
    }

    #[test]
    fn test_invalid_toml() {
        let err = ExportConfig::from_toml_str("extensions = 3").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.toml");
        fs::write(&path, "skip_hidden = \"yes\"").unwrap();

        match ExportConfig::load(&path) {
            Err(Error::Config { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_matches_extension() {
        let config = ExportConfig::default().with_extensions([".html", "htm"]);
        assert!(config.matches_extension(Path::new("a/index.html")));
        assert!(config.matches_extension(Path::new("index.htm")));
        assert!(config.matches_extension(Path::new("a/.html")));
        assert!(!config.matches_extension(Path::new("INDEX.HTM")));
        assert!(!config.matches_extension(Path::new("UP.HTML")));
        assert!(!config.matches_extension(Path::new("bundle.js")));
        assert!(!config.matches_extension(Path::new("html")));
        assert!(!config.matches_extension(Path::new("xhtml")));
    }
}
