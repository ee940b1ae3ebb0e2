//! Error types for diarist.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiaristError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Hypothesis parsing errors
    #[error("Malformed hypothesis payload: {0}")]
    HypothesisParse(#[from] serde_json::Error),

    // Speaker registry errors
    #[error("Empty speaker embedding")]
    EmptyEmbedding,

    #[error("Embedding dimension mismatch: session established {expected}, got {actual}")]
    EmbeddingDimensionMismatch { expected: usize, actual: usize },

    // Session errors
    #[error("Recognition session is closed")]
    SessionClosed,

    #[error("Recognizer error: {message}")]
    Recognizer { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for diarist operations.
pub type Result<T> = std::result::Result<T, DiaristError>;
