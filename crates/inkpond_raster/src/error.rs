//! Raster pipeline error types

use thiserror::Error;

/// Errors from mask, extraction, and scoring operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RasterError {
    /// Source image or target side length has a zero dimension
    #[error("invalid rasterizer input: {0}")]
    InvalidInput(String),

    /// No ink pixels inside the boundary at submission time
    #[error("no ink inside the boundary")]
    EmptySelection,

    /// Two masks of different resolutions were compared
    #[error("mask sizes differ: {a} vs {b}")]
    MaskSizeMismatch { a: u32, b: u32 },
}

/// Result type for raster operations
pub type Result<T> = std::result::Result<T, RasterError>;
