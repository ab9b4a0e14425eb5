//! Mask similarity scoring
//!
//! Dice/F1 overlap coefficient: `2*I / (A + B)` over opaque pixel counts.
//! Symmetric, 1.0 for identical non-empty masks, 0.0 for disjoint ones.
//! Two fully empty masks score 0.0 rather than erroring: an empty drawing
//! is a total miss, not a crash.

use crate::error::{RasterError, Result};
use crate::mask::BinaryMask;

/// Dice coefficient between two masks of the same resolution
pub fn dice(a: &BinaryMask, b: &BinaryMask) -> Result<f32> {
    if a.side() != b.side() {
        return Err(RasterError::MaskSizeMismatch {
            a: a.side(),
            b: b.side(),
        });
    }

    let total = a.opaque_count() + b.opaque_count();
    if total == 0 {
        return Ok(0.0);
    }

    let intersection = a
        .pixels()
        .data()
        .chunks_exact(4)
        .zip(b.pixels().data().chunks_exact(4))
        .filter(|(pa, pb)| pa[3] > 0 && pb[3] > 0)
        .count();

    Ok(2.0 * intersection as f32 / total as f32)
}
