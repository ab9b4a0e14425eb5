//! Core error types

use thiserror::Error;

/// Errors from core buffer operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// PNG data could not be decoded into an RGBA buffer
    #[error("png decode failed: {0}")]
    PngDecode(#[source] image::ImageError),

    /// An RGBA buffer could not be encoded as PNG
    #[error("png encode failed: {0}")]
    PngEncode(#[source] image::ImageError),

    /// Snapshot file I/O failed
    #[error("snapshot io failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
