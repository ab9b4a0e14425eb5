//! Session error types

use thiserror::Error;

/// Errors surfaced by the game session
#[derive(Error, Debug)]
pub enum SessionError {
    /// A raster pipeline step failed
    #[error(transparent)]
    Raster(#[from] inkpond_raster::RasterError),
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
