//! Procedural target silhouettes
//!
//! Each catalog target paints an opaque-on-transparent silhouette into a
//! square buffer. Shapes are evaluated per pixel in a normalized
//! [-1, 1] x [-1, 1] space (y grows downward, matching the canvas) from
//! unions and subtractions of discs, triangles, and polygons, then feed
//! the same binarization path a glyph bitmap would.

use inkpond_core::{PixelBuffer, Rgba8};

/// Silhouette shapes for the built-in target catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StencilShape {
    Fish,
    Star,
    Heart,
    Umbrella,
    Moon,
    Apple,
    CatFace,
    Smiley,
}

impl StencilShape {
    /// Paint the silhouette into a `side x side` buffer
    pub fn paint(&self, side: u32) -> PixelBuffer {
        let mut out = PixelBuffer::new(side, side);
        if side == 0 {
            return out;
        }
        let half = side as f32 / 2.0;
        for y in 0..side {
            for x in 0..side {
                let u = (x as f32 + 0.5 - half) / half;
                let v = (y as f32 + 0.5 - half) / half;
                if self.contains(u, v) {
                    out.set(x, y, Rgba8::WHITE);
                }
            }
        }
        out
    }

    fn contains(&self, u: f32, v: f32) -> bool {
        match self {
            StencilShape::Fish => {
                ellipse(u, v, -0.2, 0.0, 0.55, 0.34)
                    || triangle(u, v, (0.25, 0.0), (0.85, -0.38), (0.85, 0.38))
            }
            StencilShape::Star => in_polygon(u, v, &star_points(0.95, 0.4)),
            StencilShape::Heart => {
                // Classic sextic heart, flipped into screen space
                let x = 1.25 * u;
                let y = 1.2 * -v + 0.2;
                let f = (x * x + y * y - 1.0).powi(3) - x * x * y.powi(3);
                f <= 0.0
            }
            StencilShape::Umbrella => {
                let canopy = disc(u, v, 0.0, -0.1, 0.85) && v <= -0.1;
                let handle = u.abs() <= 0.06 && (-0.1..=0.85).contains(&v);
                canopy || handle
            }
            StencilShape::Moon => {
                disc(u, v, -0.1, 0.0, 0.8) && !disc(u, v, 0.35, 0.0, 0.72)
            }
            StencilShape::Apple => {
                let body = disc(u, v, 0.0, 0.15, 0.72);
                let stem = (u - 0.05).abs() <= 0.06 && (-0.95..=-0.5).contains(&v);
                body || stem
            }
            StencilShape::CatFace => {
                disc(u, v, 0.0, 0.12, 0.68)
                    || triangle(u, v, (-0.66, -0.2), (-0.72, -0.92), (-0.12, -0.55))
                    || triangle(u, v, (0.66, -0.2), (0.72, -0.92), (0.12, -0.55))
            }
            StencilShape::Smiley => disc(u, v, 0.0, 0.0, 0.85),
        }
    }
}

fn disc(u: f32, v: f32, cx: f32, cy: f32, r: f32) -> bool {
    let dx = u - cx;
    let dy = v - cy;
    dx * dx + dy * dy <= r * r
}

fn ellipse(u: f32, v: f32, cx: f32, cy: f32, rx: f32, ry: f32) -> bool {
    let dx = (u - cx) / rx;
    let dy = (v - cy) / ry;
    dx * dx + dy * dy <= 1.0
}

fn triangle(u: f32, v: f32, a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> bool {
    let sign = |p: (f32, f32), q: (f32, f32)| (u - q.0) * (p.1 - q.1) - (p.0 - q.0) * (v - q.1);
    let d1 = sign(a, b);
    let d2 = sign(b, c);
    let d3 = sign(c, a);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Even-odd point-in-polygon test
fn in_polygon(u: f32, v: f32, points: &[(f32, f32)]) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > v) != (yj > v) && u < (xj - xi) * (v - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Ten vertices of a five-pointed star, tip up
fn star_points(outer: f32, inner: f32) -> Vec<(f32, f32)> {
    let mut points = Vec::with_capacity(10);
    for i in 0..10 {
        let r = if i % 2 == 0 { outer } else { inner };
        let angle = std::f32::consts::PI * (i as f32 / 5.0) - std::f32::consts::FRAC_PI_2;
        points.push((r * angle.cos(), r * angle.sin()));
    }
    points
}
