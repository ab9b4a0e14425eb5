//! CPU-side RGBA8 pixel buffers
//!
//! The engine never talks to a GPU: ink, crops, masks and composed frames
//! are all plain byte buffers. Hosts upload them however their renderer
//! wants; tests read them back pixel by pixel.

use std::io::Cursor;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::color::Rgba8;
use crate::error::{CoreError, Result};
use crate::geometry::PixelRect;

/// A width x height RGBA8 buffer (straight alpha, row-major)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a fully transparent buffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Wrap raw RGBA8 bytes; returns `None` when the length does not match
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba8> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let i = self.index(x, y);
        Some(Rgba8::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    /// Write a pixel; out-of-bounds writes are dropped
    pub fn set(&mut self, x: u32, y: u32, color: Rgba8) {
        if !self.in_bounds(x, y) {
            return;
        }
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&color.to_array());
    }

    /// Alpha channel at a pixel, 0 outside the buffer
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if !self.in_bounds(x, y) {
            return 0;
        }
        self.data[self.index(x, y) + 3]
    }

    /// Reset every pixel to transparent
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Fill every pixel with one color
    pub fn fill(&mut self, color: Rgba8) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&color.to_array());
        }
    }

    /// Copy out a rectangular region, clamped to the buffer extent
    pub fn sub_image(&self, rect: PixelRect) -> PixelBuffer {
        let mut out = PixelBuffer::new(rect.width, rect.height);
        for row in 0..rect.height {
            for col in 0..rect.width {
                if let Some(px) = self.get(rect.x + col, rect.y + row) {
                    out.set(col, row, px);
                }
            }
        }
        out
    }

    /// Source-over blit of `src` at (x, y) with a global opacity multiplier
    ///
    /// Positions may be negative or hang past the edge; out-of-range source
    /// pixels are clipped.
    pub fn blit_over(&mut self, src: &PixelBuffer, x: i32, y: i32, opacity: f32) {
        let opacity = opacity.clamp(0.0, 1.0);
        if opacity == 0.0 {
            return;
        }
        for sy in 0..src.height {
            let dy = y + sy as i32;
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            for sx in 0..src.width {
                let dx = x + sx as i32;
                if dx < 0 || dx >= self.width as i32 {
                    continue;
                }
                let si = src.index(sx, sy);
                let sa = src.data[si + 3] as f32 / 255.0 * opacity;
                if sa <= 0.0 {
                    continue;
                }
                let di = self.index(dx as u32, dy as u32);
                let da = self.data[di + 3] as f32 / 255.0;
                let out_a = sa + da * (1.0 - sa);
                for c in 0..3 {
                    let s = src.data[si + c] as f32;
                    let d = self.data[di + c] as f32;
                    let blended = (s * sa + d * da * (1.0 - sa)) / out_a;
                    self.data[di + c] = blended.round().clamp(0.0, 255.0) as u8;
                }
                self.data[di + 3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    /// Decode a PNG into an RGBA buffer
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes)
            .map_err(CoreError::PngDecode)?
            .to_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(Self {
            width,
            height,
            data: decoded.into_raw(),
        })
    }

    /// Encode this buffer as a PNG byte stream
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        PngEncoder::new(Cursor::new(&mut bytes))
            .write_image(&self.data, self.width, self.height, ExtendedColorType::Rgba8)
            .map_err(CoreError::PngEncode)?;
        Ok(bytes)
    }

    /// Write a PNG snapshot to disk
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        tracing::debug!(path = %path.display(), "wrote png snapshot");
        Ok(())
    }
}
