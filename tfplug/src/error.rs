//! Error types for tfplug

/// Error raised by path access on dynamic values
#[derive(Debug, thiserror::Error)]
pub enum TfplugError {
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Attribute not found: {0}")]
    AttributeNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Result type alias for tfplug operations
pub type Result<T> = std::result::Result<T, TfplugError>;
