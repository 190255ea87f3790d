//! In-memory RGBA8 surface.

use st_core::Color;

use crate::{PixelSurface, SurfaceError, SurfaceResult};

/// Row-major RGBA8 pixel buffer.
///
/// Byte order matches `image::RgbaImage`, so the raw bytes can be handed to
/// an encoder without conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width:  u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a `width × height` buffer filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> SurfaceResult<Self> {
        let len = byte_len(width, height)?;
        let mut buf = Self { width, height, pixels: vec![0; len] };
        buf.clear(fill);
        Ok(buf)
    }

    /// Wrap an existing RGBA8 buffer.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> SurfaceResult<Self> {
        let expected = byte_len(width, height)?;
        if pixels.len() != expected {
            return Err(SurfaceError::BufferSize { width, height, expected, got: pixels.len() });
        }
        Ok(Self { width, height, pixels })
    }

    /// Raw RGBA8 bytes, row-major.
    #[inline]
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn into_rgba(self) -> Vec<u8> {
        self.pixels
    }

    /// Count pixels that differ from `color`.
    pub fn count_not(&self, color: Color) -> usize {
        let want = color.to_rgba_bytes();
        self.pixels.chunks_exact(4).filter(|px| **px != want).count()
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize * self.width as usize + x as usize) * 4)
    }
}

fn byte_len(width: u32, height: u32) -> SurfaceResult<usize> {
    if width == 0 || height == 0 {
        return Err(SurfaceError::Empty { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(SurfaceError::TooLarge { width, height })
}

impl PixelSurface for PixelBuffer {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    fn get_pixel(&self, x: u32, y: u32) -> Color {
        match self.offset(x, y) {
            Some(i) => Color::from_rgba_bytes([
                self.pixels[i],
                self.pixels[i + 1],
                self.pixels[i + 2],
                self.pixels[i + 3],
            ]),
            None => Color::TRANSPARENT,
        }
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i..i + 4].copy_from_slice(&color.to_rgba_bytes());
        }
    }

    fn clear(&mut self, color: Color) {
        let bytes = color.to_rgba_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}
