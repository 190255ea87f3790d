//! The `PixelSurface` trait.

use st_core::Color;

/// A mutable grid of [`Color`]s owned by the host.
///
/// The engine only needs random access plus a fill.  Implementations may
/// assume `get_pixel`/`set_pixel` receive in-bounds coordinates: the engine
/// bounds-checks in [`plot`][crate::plot] before calling them.  Implementations
/// should still ignore out-of-bounds writes rather than panic.
pub trait PixelSurface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Color at `(x, y)`.
    fn get_pixel(&self, x: u32, y: u32) -> Color;

    /// Overwrite the color at `(x, y)`.
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);

    /// Fill every pixel with `color`.
    fn clear(&mut self, color: Color);

    /// `true` if `(x, y)` addresses a pixel of this surface.
    #[inline]
    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height())
    }

    /// Row-major RGBA8 copy of the surface, for encoders.
    fn to_rgba8(&self) -> Vec<u8> {
        let (w, h) = (self.width(), self.height());
        let mut out = Vec::with_capacity(w as usize * h as usize * 4);
        for y in 0..h {
            for x in 0..w {
                out.extend_from_slice(&self.get_pixel(x, y).to_rgba_bytes());
            }
        }
        out
    }
}
