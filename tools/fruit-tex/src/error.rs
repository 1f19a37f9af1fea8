//! Error types for texture synthesis, persistence and configuration

use std::path::{Path, PathBuf};

/// Structurally invalid synthesis input
///
/// Channel overflow is never an error: every color operation clamps.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("Invalid texture dimension {size}: size must be greater than zero")]
    InvalidDimension { size: u32 },
}

/// Failure while handing a finished buffer to storage
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },

    #[error("PNG encoding is unavailable: rebuild fruit-tex with the `png-export` feature")]
    CodecUnavailable,
}

impl PersistError {
    #[cfg_attr(not(feature = "png-export"), allow(dead_code))]
    pub(crate) fn encode(path: &Path, err: impl std::fmt::Display) -> Self {
        PersistError::Encode {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// Failure of a single `(fruit, size)` item within a batch
#[derive(Debug, thiserror::Error)]
pub enum BatchItemError {
    #[error(transparent)]
    Texture(#[from] TextureError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Failure while loading generator configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown fruit '{0}'")]
    UnknownFruit(String),

    #[error("Duplicate fruit '{0}' in catalog")]
    DuplicateFruit(String),
}
