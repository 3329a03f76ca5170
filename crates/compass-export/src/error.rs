//! Error types for export post-processing.

use std::path::PathBuf;

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fixing a web export.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The export directory does not exist or is not a directory.
    #[error("directory '{path}' not found")]
    NotADirectory { path: PathBuf },

    /// Config file could not be parsed.
    #[error("Invalid config '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Inline config could not be parsed.
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] toml::de::Error),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a missing directory error.
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }
}
