//! The persistent ink layer
//!
//! One full-canvas RGBA buffer that accumulates brush strokes for the whole
//! session. Strokes paint hard-edged round stamps; the eraser clears the
//! same footprint instead. Submission-time erasure goes through the region
//! extractor, not through this module.

use crate::color::Rgba8;
use crate::geometry::Point;
use crate::pixels::PixelBuffer;

/// Active drawing tool
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    /// Paint an opaque round stamp of `width` diameter
    Paint { color: Rgba8, width: f32 },
    /// Clear a round footprint of `width` diameter
    Erase { width: f32 },
}

impl Brush {
    fn radius(&self) -> f32 {
        let width = match self {
            Brush::Paint { width, .. } | Brush::Erase { width } => *width,
        };
        (width / 2.0).max(0.5)
    }
}

/// Full-canvas stroke surface, owned by the session for its whole lifetime
#[derive(Clone, Debug)]
pub struct InkLayer {
    pixels: PixelBuffer,
}

impl InkLayer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: PixelBuffer::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.pixels
    }

    /// Stamp the brush once at a point
    pub fn stamp(&mut self, brush: &Brush, at: Point) {
        let r = brush.radius();
        let min_x = (at.x - r).floor().max(0.0) as u32;
        let min_y = (at.y - r).floor().max(0.0) as u32;
        let max_x = ((at.x + r).ceil() as i64).min(self.width() as i64 - 1);
        let max_y = ((at.y + r).ceil() as i64).min(self.height() as i64 - 1);
        if max_x < 0 || max_y < 0 {
            return;
        }

        for y in min_y..=max_y as u32 {
            for x in min_x..=max_x as u32 {
                let center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                if center.distance_to(at) > r {
                    continue;
                }
                match brush {
                    Brush::Paint { color, .. } => self.pixels.set(x, y, *color),
                    Brush::Erase { .. } => self.pixels.set(x, y, Rgba8::TRANSPARENT),
                }
            }
        }
    }

    /// Stamp the brush along a segment so drag strokes stay gap-free
    pub fn line(&mut self, brush: &Brush, from: Point, to: Point) {
        let spacing = (brush.radius() * 0.5).max(0.5);
        let length = from.distance_to(to);
        let steps = (length / spacing).ceil() as u32;
        for i in 0..=steps {
            let t = if steps == 0 { 0.0 } else { i as f32 / steps as f32 };
            self.stamp(brush, from.lerp(to, t));
        }
    }

    /// Wipe the whole layer
    pub fn clear(&mut self) {
        self.pixels.clear();
    }
}
