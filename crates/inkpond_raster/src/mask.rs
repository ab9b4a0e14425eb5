//! Binary mask rasterization
//!
//! Scales an arbitrary RGBA image into an N x N square (aspect-preserving,
//! centered, same fit math as a CSS `object-fit: scale-down`: shrink to
//! fit, never enlarge) and binarizes the alpha channel: every output pixel
//! is all-255 or all-0 across the four channels. Never upscaling matters
//! for scoring: a stray dot must stay a dot instead of inflating to full
//! mask coverage. Two masks can only be compared at the same resolution,
//! so both the user crop and the target stencil go through this one path.

use inkpond_core::{PixelBuffer, Rgba8};

use crate::error::{RasterError, Result};

/// A square all-or-nothing alpha mask
#[derive(Clone, Debug)]
pub struct BinaryMask {
    pixels: PixelBuffer,
    opaque: usize,
}

impl BinaryMask {
    /// Side length of the square
    pub fn side(&self) -> u32 {
        self.pixels.width()
    }

    /// Number of opaque pixels
    pub fn opaque_count(&self) -> usize {
        self.opaque
    }

    pub fn is_opaque(&self, x: u32, y: u32) -> bool {
        self.pixels.alpha_at(x, y) > 0
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }
}

/// Rasterize `src` into a `side x side` binary mask
///
/// The source is scaled uniformly to fit (down only, never up), centered,
/// and sampled nearest-neighbor; a sampled alpha above zero becomes an
/// opaque mask pixel. Anything outside the scaled image stays transparent.
pub fn rasterize(src: &PixelBuffer, side: u32) -> Result<BinaryMask> {
    if src.width() == 0 || src.height() == 0 {
        return Err(RasterError::InvalidInput(format!(
            "source image is {}x{}",
            src.width(),
            src.height()
        )));
    }
    if side == 0 {
        return Err(RasterError::InvalidInput("mask side is zero".into()));
    }

    let src_w = src.width() as f32;
    let src_h = src.height() as f32;
    let scale = (side as f32 / src_w)
        .min(side as f32 / src_h)
        .min(1.0);
    let dst_w = src_w * scale;
    let dst_h = src_h * scale;
    let dst_x = (side as f32 - dst_w) / 2.0;
    let dst_y = (side as f32 - dst_h) / 2.0;

    let mut pixels = PixelBuffer::new(side, side);
    let mut opaque = 0usize;

    for y in 0..side {
        for x in 0..side {
            let fx = x as f32 + 0.5;
            let fy = y as f32 + 0.5;
            if fx < dst_x || fx >= dst_x + dst_w || fy < dst_y || fy >= dst_y + dst_h {
                continue;
            }
            let sx = (((fx - dst_x) / scale) as u32).min(src.width() - 1);
            let sy = (((fy - dst_y) / scale) as u32).min(src.height() - 1);
            if src.alpha_at(sx, sy) > 0 {
                pixels.set(x, y, Rgba8::WHITE);
                opaque += 1;
            }
        }
    }

    Ok(BinaryMask { pixels, opaque })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::new(width, height);
        buf.fill(Rgba8::opaque(239, 68, 68));
        buf
    }

    #[test]
    fn output_is_strictly_binary() {
        let mut src = PixelBuffer::new(10, 10);
        src.set(3, 3, Rgba8::new(40, 40, 40, 7)); // faint alpha still counts
        src.set(7, 2, Rgba8::WHITE);
        let mask = rasterize(&src, 16).unwrap();

        for px in mask.pixels().data().chunks_exact(4) {
            assert!(
                px == [0, 0, 0, 0] || px == [255, 255, 255, 255],
                "non-binary pixel {px:?}"
            );
        }
    }

    #[test]
    fn solid_square_fills_the_mask() {
        let mask = rasterize(&solid(10, 10), 8).unwrap();
        assert_eq!(mask.opaque_count(), 64);
    }

    #[test]
    fn wide_source_is_centered_vertically() {
        // 20x10 source in a 10x10 mask scales to 10x5, rows 2..7 hold it
        let mask = rasterize(&solid(20, 10), 10).unwrap();
        assert_eq!(mask.opaque_count(), 50);
        assert!(!mask.is_opaque(5, 1));
        assert!(mask.is_opaque(5, 3));
        assert!(mask.is_opaque(5, 6));
        assert!(!mask.is_opaque(5, 8));
    }

    #[test]
    fn tall_source_is_centered_horizontally() {
        let mask = rasterize(&solid(10, 20), 10).unwrap();
        assert_eq!(mask.opaque_count(), 50);
        assert!(!mask.is_opaque(1, 5));
        assert!(mask.is_opaque(4, 5));
        assert!(!mask.is_opaque(8, 5));
    }

    #[test]
    fn small_sources_are_centered_without_upscaling() {
        // A 3x3 dot in a 96 mask stays 3x3, centered
        let mask = rasterize(&solid(3, 3), 96).unwrap();
        assert_eq!(mask.opaque_count(), 9);
        assert!(mask.is_opaque(47, 47));
        assert!(!mask.is_opaque(40, 47));
    }

    #[test]
    fn zero_sized_input_is_rejected() {
        let empty = PixelBuffer::new(0, 5);
        assert!(matches!(
            rasterize(&empty, 8),
            Err(RasterError::InvalidInput(_))
        ));
        assert!(matches!(
            rasterize(&solid(4, 4), 0),
            Err(RasterError::InvalidInput(_))
        ));
    }

    #[test]
    fn transparent_source_yields_empty_mask() {
        let src = PixelBuffer::new(6, 6);
        let mask = rasterize(&src, 12).unwrap();
        assert_eq!(mask.opaque_count(), 0);
    }
}
