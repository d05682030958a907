//! Error types for the editor.
//!
//! History and session operations never fail; an empty stack or a stray
//! slider event is reported as `None`/`false`. Errors only come from the
//! document boundary (file I/O, decoding, missing image) and from parsing
//! user-facing identifiers.

use thiserror::Error;

/// Main error type for editor operations.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(String),

    #[error("No image loaded")]
    NoImage,

    #[error("Document has no file path")]
    NoPath,

    #[error("Unsupported rotation: {0} degrees")]
    InvalidRotation(u32),

    #[error("Unknown flip axis: {0}")]
    InvalidFlipAxis(String),

    #[error("Unknown control: {0}")]
    UnknownControl(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<image::ImageError> for EditorError {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => EditorError::Io(io),
            other => EditorError::Image(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for EditorError {
    fn from(e: serde_json::Error) -> Self {
        EditorError::Config(e.to_string())
    }
}

/// Result type for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;
