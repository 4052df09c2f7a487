//! Error types for the memekit pipelines.
//!
//! Errors are organized by stage so that the per-file failure lines printed
//! by the crop batch carry the offending path and a concrete reason.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for memekit operations.
#[derive(Error, Debug)]
pub enum MemekitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Pipeline processing errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Source directory is missing or is not a directory
    #[error("Source directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// Image decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Re-encoding the cropped image failed
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// Crop rectangle would be empty
    #[error("Invalid crop geometry for {path}: {width}x{height} leaves no pixels")]
    InvalidGeometry {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    /// Reading the input or writing the output failed
    #[error("IO error for {path}: {message}")]
    Io { path: PathBuf, message: String },
}

/// Error raised by an [`ImageCodec`](crate::pipeline::ImageCodec) implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct CodecError(pub String);

impl CodecError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Convenience type alias for memekit results.
pub type Result<T> = std::result::Result<T, MemekitError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
