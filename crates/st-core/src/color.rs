//! Packed 32-bit RGBA colors.
//!
//! Layout is `0xRRGGBBAA`.  Every constructor clamps each channel into
//! `[0, 255]` (truncating toward zero), so a `Color` value can never carry an
//! out-of-range component.

use std::fmt;

/// A packed RGBA color.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Pack four real-valued channels.  Out-of-range values clamp silently;
    /// fractional values truncate toward zero.  `NaN` becomes 0.
    #[inline]
    pub fn pack(r: f64, g: f64, b: f64, a: f64) -> Color {
        Color::rgba(channel(r), channel(g), channel(b), channel(a))
    }

    /// Pack four in-range channels.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    /// Opaque color from integer channels, clamped into `[0, 255]`.
    ///
    /// This is the packer the blend operators feed their per-channel
    /// arithmetic into.
    #[inline]
    pub fn opaque_clamped(r: i32, g: i32, b: i32) -> Color {
        Color::rgba(clamp_i32(r), clamp_i32(g), clamp_i32(b), 255)
    }

    /// Opaque color from a 24-bit `0xRRGGBB` value (palette entries).
    #[inline]
    pub const fn from_rgb24(rgb: u32) -> Color {
        Color(((rgb & 0x00ff_ffff) << 8) | 0xff)
    }

    /// Reinterpret a packed `0xRRGGBBAA` value.
    #[inline]
    pub const fn from_u32(packed: u32) -> Color {
        Color(packed)
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Channels in `[r, g, b, a]` byte order, as stored by RGBA8 buffers.
    #[inline]
    pub const fn to_rgba_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub const fn from_rgba_bytes(bytes: [u8; 4]) -> Color {
        Color(u32::from_be_bytes(bytes))
    }
}

#[inline]
fn channel(c: f64) -> u8 {
    // `as` saturates and truncates toward zero; NaN maps to 0.
    c.clamp(0.0, 255.0) as u8
}

#[inline]
fn clamp_i32(c: i32) -> u8 {
    c.clamp(0, 255) as u8
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Color(packed)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:08x})", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}
