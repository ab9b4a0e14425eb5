//! Inkpond Core
//!
//! This crate provides the foundational primitives for the Inkpond engine:
//!
//! - **Geometry**: points, sizes, pixel rects, and the elliptical pond boundary
//! - **Pixel Buffers**: CPU-side RGBA8 buffers with blitting and PNG snapshots
//! - **Ink Layer**: the persistent stroke surface with brush and eraser ops
//!
//! Everything here is rendering-framework agnostic: a host embeds these types
//! and draws the resulting buffers however it likes.

pub mod color;
pub mod error;
pub mod geometry;
pub mod ink;
pub mod pixels;

pub use color::Rgba8;
pub use error::{CoreError, Result};
pub use geometry::{Ellipse, PixelRect, Point, Size};
pub use ink::{Brush, InkLayer};
pub use pixels::PixelBuffer;
