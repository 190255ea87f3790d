//! The three compositing operators and their single dispatch point.
//!
//! In every operator `src` is the color already on the surface and `dst` is
//! the color being painted; `alpha` is the weight of `dst`.  Alpha is a real
//! number (painters use fractional caps such as `128 / 10`); the weighted
//! product is truncated to an integer before the `>> 8` divide.
//!
//! All three operators short-circuit: `alpha >= 255` yields `dst` unchanged
//! and `alpha <= 0` yields `src` unchanged.  Otherwise the result is opaque.
//! Callers clamp alpha into `[0, 255]` before invoking them.

use rand::Rng;

use crate::Color;

/// Which blend operator a painter (or traveler plotter) uses.
///
/// Chosen once at construction and stored; never switched afterwards.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BlendMode {
    /// Standard alpha-over interpolation.
    Normal,
    /// Adds the weighted paint color, saturating at 255.
    Additive,
    /// Subtracts the weighted paint color, saturating at 0.
    Subtractive,
}

impl BlendMode {
    /// Resolve the blend flags of a run into one operator.
    ///
    /// With both flags set a fair coin decides (one draw from `rng`); with
    /// neither set the result is [`BlendMode::Normal`] and no randomness is
    /// consumed.
    pub fn pick<R: Rng + ?Sized>(additive: bool, subtractive: bool, rng: &mut R) -> BlendMode {
        match (additive, subtractive) {
            (true, true) => {
                if rng.r#gen::<f64>() > 0.5 {
                    BlendMode::Additive
                } else {
                    BlendMode::Subtractive
                }
            }
            (true, false) => BlendMode::Additive,
            (false, true) => BlendMode::Subtractive,
            (false, false) => BlendMode::Normal,
        }
    }

    /// Apply this operator.
    #[inline]
    pub fn apply(self, src: Color, dst: Color, alpha: f64) -> Color {
        match self {
            BlendMode::Normal      => blend_normal(src, dst, alpha),
            BlendMode::Additive    => blend_additive(src, dst, alpha),
            BlendMode::Subtractive => blend_subtractive(src, dst, alpha),
        }
    }

    /// `true` for the two modes that accumulate rather than interpolate.
    #[inline]
    pub fn is_accumulating(self) -> bool {
        !matches!(self, BlendMode::Normal)
    }
}

/// `(alpha * dst + (255 - alpha) * src) >> 8` per channel.
pub fn blend_normal(src: Color, dst: Color, alpha: f64) -> Color {
    if alpha >= 255.0 {
        return dst;
    }
    if alpha <= 0.0 {
        return src;
    }
    let mix = |s: u8, d: u8| (alpha * f64::from(d) + (255.0 - alpha) * f64::from(s)) as i32 >> 8;
    Color::opaque_clamped(
        mix(src.r(), dst.r()),
        mix(src.g(), dst.g()),
        mix(src.b(), dst.b()),
    )
}

/// `src + ((alpha * dst) >> 8)` per channel, clamped to 255.
pub fn blend_additive(src: Color, dst: Color, alpha: f64) -> Color {
    if alpha >= 255.0 {
        return dst;
    }
    if alpha <= 0.0 {
        return src;
    }
    Color::opaque_clamped(
        i32::from(src.r()) + weighted(alpha, dst.r()),
        i32::from(src.g()) + weighted(alpha, dst.g()),
        i32::from(src.b()) + weighted(alpha, dst.b()),
    )
}

/// `src - ((alpha * dst) >> 8)` per channel, clamped to 0.
pub fn blend_subtractive(src: Color, dst: Color, alpha: f64) -> Color {
    if alpha >= 255.0 {
        return dst;
    }
    if alpha <= 0.0 {
        return src;
    }
    Color::opaque_clamped(
        i32::from(src.r()) - weighted(alpha, dst.r()),
        i32::from(src.g()) - weighted(alpha, dst.g()),
        i32::from(src.b()) - weighted(alpha, dst.b()),
    )
}

#[inline]
fn weighted(alpha: f64, channel: u8) -> i32 {
    (alpha * f64::from(channel)) as i32 >> 8
}
