//! Error types for Firemap

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FiremapError {
    // Document errors
    #[error("Invalid GeoJSON document: {reason}")]
    InvalidDocument { reason: String },

    #[error("Failed to parse {source_id}: {reason}")]
    Parse { source_id: String, reason: String },

    #[error("Unrecognized {field} value: {value}")]
    UnrecognizedValue { field: String, value: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FiremapError {
    pub fn invalid_document(reason: impl Into<String>) -> Self {
        FiremapError::InvalidDocument { reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, FiremapError>;
