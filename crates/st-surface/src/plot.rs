//! The single write path from painters to a surface.

use st_core::{BlendMode, Color};

use crate::PixelSurface;

/// Snap a real coordinate to a pixel index the way each operator expects:
/// alpha-over truncates toward zero, the accumulating modes round half up.
#[inline]
pub fn snap(coord: f64, mode: BlendMode) -> i64 {
    let snapped = if mode.is_accumulating() { (coord + 0.5).floor() } else { coord.trunc() };
    // Saturating cast; NaN lands on 0 and infinities far off-canvas.
    snapped as i64
}

/// Blend `color` into the pixel under `(x, y)` with weight `alpha`.
///
/// Alpha above 255 is clamped here so the blend operators only ever see
/// `alpha <= 255`.  Returns `false` (and writes nothing) when the snapped
/// coordinate falls outside the surface.
pub fn plot<S: PixelSurface + ?Sized>(
    surface: &mut S,
    x:       f64,
    y:       f64,
    color:   Color,
    alpha:   f64,
    mode:    BlendMode,
) -> bool {
    let (px, py) = (snap(x, mode), snap(y, mode));
    if !surface.contains(px, py) {
        return false;
    }
    let (px, py) = (px as u32, py as u32);
    let under = surface.get_pixel(px, py);
    surface.set_pixel(px, py, mode.apply(under, color, alpha.min(255.0)));
    true
}
