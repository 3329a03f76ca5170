//! Error types for icon resolution.

/// Result type alias for icon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when resolving icons.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Name is not one of the known icon keys.
    #[error("Unknown icon key '{name}'")]
    UnknownIconKey { name: String },

    /// Manifest serialization failed.
    #[error("Failed to serialize icon manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Create an unknown key error.
    pub fn unknown_key(name: impl Into<String>) -> Self {
        Self::UnknownIconKey { name: name.into() }
    }
}
