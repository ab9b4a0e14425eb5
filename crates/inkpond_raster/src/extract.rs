//! Boundary-masked region extraction
//!
//! At submission time the session pulls every ink pixel that sits inside
//! the pond boundary into a full-canvas scratch image, records the tight
//! bounding box, and later erases exactly those pixels from the live
//! layer. Extraction never mutates the ink; `erase` is the one mutation
//! outside brush drawing.

use inkpond_core::{Ellipse, InkLayer, PixelBuffer, PixelRect, Point, Rgba8};
use tracing::warn;

use crate::error::{RasterError, Result};

/// Ink isolated from inside the boundary
#[derive(Clone, Debug)]
pub struct Extraction {
    /// Full-canvas image holding only the retained pixels
    pub masked: PixelBuffer,
    /// Tight bounds of the retained pixels, at least 1x1
    pub bounds: PixelRect,
    /// How many pixels were retained
    pub pixel_count: usize,
}

impl Extraction {
    /// The retained ink cropped to its bounding box
    pub fn crop(&self) -> PixelBuffer {
        self.masked.sub_image(self.bounds)
    }
}

/// Copy out every ink pixel that is inside `boundary` and has alpha > 0
///
/// Fails with [`RasterError::EmptySelection`] when nothing qualifies; the
/// caller must then skip scoring and animation entirely.
pub fn extract(ink: &InkLayer, boundary: &Ellipse) -> Result<Extraction> {
    let src = ink.pixels();
    let mut masked = PixelBuffer::new(src.width(), src.height());

    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut pixel_count = 0usize;

    for y in 0..src.height() {
        for x in 0..src.width() {
            if src.alpha_at(x, y) == 0 {
                continue;
            }
            if !boundary.contains(Point::new(x as f32, y as f32)) {
                continue;
            }
            if let Some(px) = src.get(x, y) {
                masked.set(x, y, px);
            }
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
            pixel_count += 1;
        }
    }

    if pixel_count == 0 {
        return Err(RasterError::EmptySelection);
    }

    Ok(Extraction {
        masked,
        bounds: PixelRect::from_extents(min_x, min_y, max_x, max_y),
        pixel_count,
    })
}

/// Tight bounding box of every pixel with alpha > 0, if any
///
/// Target stencils are cropped through this before masking so both sides
/// of the comparison are tight-bounded the same way the extracted ink is.
pub fn content_bounds(image: &PixelBuffer) -> Option<PixelRect> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut any = false;

    for y in 0..image.height() {
        for x in 0..image.width() {
            if image.alpha_at(x, y) == 0 {
                continue;
            }
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
            any = true;
        }
    }

    any.then(|| PixelRect::from_extents(min_x, min_y, max_x, max_y))
}

/// Zero every ink pixel where `masked` has non-zero alpha
///
/// Running it again with the same image is a no-op: the targeted pixels
/// are already transparent.
pub fn erase(ink: &mut InkLayer, masked: &PixelBuffer) {
    let dst = ink.pixels_mut();
    if masked.width() != dst.width() || masked.height() != dst.height() {
        warn!(
            masked_w = masked.width(),
            masked_h = masked.height(),
            ink_w = dst.width(),
            ink_h = dst.height(),
            "erase mask does not match the ink layer; skipping"
        );
        return;
    }
    for y in 0..dst.height() {
        for x in 0..dst.width() {
            if masked.alpha_at(x, y) > 0 {
                dst.set(x, y, Rgba8::TRANSPARENT);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpond_core::Brush;

    fn pond() -> Ellipse {
        Ellipse::new(50.0, 50.0, 30.0, 20.0)
    }

    fn ink_with_dot(at: Point) -> InkLayer {
        let mut ink = InkLayer::new(100, 100);
        ink.stamp(
            &Brush::Paint {
                color: Rgba8::opaque(16, 185, 129),
                width: 3.0,
            },
            at,
        );
        ink
    }

    #[test]
    fn retains_only_pixels_inside_the_boundary() {
        let mut ink = ink_with_dot(Point::new(50.0, 50.0));
        // A second blob well outside the pond
        ink.stamp(
            &Brush::Paint {
                color: Rgba8::BLACK,
                width: 5.0,
            },
            Point::new(5.0, 5.0),
        );

        let got = extract(&ink, &pond()).unwrap();
        for y in 0..got.masked.height() {
            for x in 0..got.masked.width() {
                if got.masked.alpha_at(x, y) > 0 {
                    assert!(pond().contains(Point::new(x as f32, y as f32)));
                    assert!(ink.pixels().alpha_at(x, y) > 0);
                }
            }
        }
        assert_eq!(got.masked.alpha_at(5, 5), 0);
    }

    #[test]
    fn bounding_box_is_tight() {
        let ink = ink_with_dot(Point::new(50.0, 50.0));
        let got = extract(&ink, &pond()).unwrap();
        let b = got.bounds;

        // Every retained pixel is inside the box...
        for y in 0..got.masked.height() {
            for x in 0..got.masked.width() {
                if got.masked.alpha_at(x, y) > 0 {
                    assert!(b.contains(x, y), "({x},{y}) outside {b:?}");
                }
            }
        }
        // ...and every edge row/column of the box holds at least one pixel
        let edge_hit = |xs: Box<dyn Iterator<Item = (u32, u32)>>| {
            xs.into_iter().any(|(x, y)| got.masked.alpha_at(x, y) > 0)
        };
        assert!(edge_hit(Box::new((b.x..b.right()).map(|x| (x, b.y)))));
        assert!(edge_hit(Box::new((b.x..b.right()).map(|x| (x, b.bottom() - 1)))));
        assert!(edge_hit(Box::new((b.y..b.bottom()).map(|y| (b.x, y)))));
        assert!(edge_hit(Box::new((b.y..b.bottom()).map(|y| (b.right() - 1, y)))));
    }

    #[test]
    fn single_pixel_selection_yields_a_one_by_one_box() {
        let mut ink = InkLayer::new(100, 100);
        ink.pixels_mut().set(50, 50, Rgba8::BLACK);
        let got = extract(&ink, &pond()).unwrap();
        assert_eq!(got.pixel_count, 1);
        assert_eq!(got.bounds, PixelRect::new(50, 50, 1, 1));
        assert_eq!(got.crop().alpha_at(0, 0), 255);
    }

    #[test]
    fn empty_canvas_signals_empty_selection() {
        let ink = InkLayer::new(100, 100);
        assert!(matches!(
            extract(&ink, &pond()),
            Err(RasterError::EmptySelection)
        ));
    }

    #[test]
    fn ink_outside_the_boundary_is_still_empty() {
        let ink = ink_with_dot(Point::new(5.0, 5.0));
        assert!(matches!(
            extract(&ink, &pond()),
            Err(RasterError::EmptySelection)
        ));
    }

    #[test]
    fn content_bounds_matches_extraction_bounds() {
        let ink = ink_with_dot(Point::new(50.0, 50.0));
        let got = extract(&ink, &pond()).unwrap();
        assert_eq!(content_bounds(&got.masked), Some(got.bounds));
        assert_eq!(content_bounds(&PixelBuffer::new(8, 8)), None);
    }

    #[test]
    fn erase_is_idempotent() {
        let mut ink = ink_with_dot(Point::new(50.0, 50.0));
        let got = extract(&ink, &pond()).unwrap();

        erase(&mut ink, &got.masked);
        let after_first = ink.pixels().clone();
        assert_eq!(after_first.alpha_at(50, 50), 0);

        erase(&mut ink, &got.masked);
        assert_eq!(ink.pixels(), &after_first);
    }

    #[test]
    fn erase_with_mismatched_mask_leaves_ink_alone() {
        let mut ink = ink_with_dot(Point::new(50.0, 50.0));
        let before = ink.pixels().clone();
        let mut wrong = PixelBuffer::new(10, 10);
        wrong.fill(Rgba8::WHITE);
        erase(&mut ink, &wrong);
        assert_eq!(ink.pixels(), &before);
    }
}
