//! Shared error types for archmap.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchmapError {
    /// The document's rule block exists but is not valid rule data. Fatal to
    /// rule evaluation for the run; callers may recover with an empty rule
    /// set and still produce mapping and chain results.
    #[error("Malformed rule block in architecture document: {0}")]
    MalformedRuleBlock(String),

    /// The source tree could not be resolved into readable text.
    #[error("Source unavailable at {path}: {message}")]
    SourceUnavailable { path: PathBuf, message: String },

    /// The architecture document could not be fetched or decoded.
    #[error("Document unavailable at {path}: {message}")]
    DocumentUnavailable { path: PathBuf, message: String },

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ArchmapError {
    pub fn source_unavailable(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn document_unavailable(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DocumentUnavailable {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArchmapError>;
