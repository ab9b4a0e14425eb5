//! Inkpond Raster Pipeline
//!
//! The image half of the scoring loop:
//!
//! - **Binary Masks**: aspect-preserving binarization of arbitrary RGBA
//!   buffers to a shared square resolution
//! - **Region Extraction**: isolate boundary-masked ink, with a tight
//!   bounding box and in-place erasure
//! - **Similarity**: Dice overlap coefficient between two masks
//! - **Stencils**: procedural target silhouettes (fish, star, heart, ...)

pub mod error;
pub mod extract;
pub mod mask;
pub mod score;
pub mod stencil;

pub use error::{RasterError, Result};
pub use extract::{content_bounds, erase, extract, Extraction};
pub use mask::{rasterize, BinaryMask};
pub use score::dice;
pub use stencil::StencilShape;
