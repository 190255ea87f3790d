//! Sand palette.
//!
//! A `Palette` is a non-empty list of opaque colors.  Each painter draws one
//! color from it at construction time.

use rand::Rng;

use crate::{Color, CoreError, CoreResult};

/// Warm earth tones with a heavy tail of near-black blue; the repeated
/// `0x000022` entries bias painters toward dark grains.
const DEFAULT_RGB: [u32; 33] = [
    0x3a242b, 0x3b2426, 0x352325, 0x836454, 0x7d5533, 0x8b7352, 0xb1a181, 0xa4632e, 0xbb6b33,
    0xb47249, 0xca7239, 0xd29057, 0xe0b87e, 0xd9b166, 0xf5eabe, 0xfcfadf, 0xd9d1b0, 0xfcfadf,
    0xd1d1ca, 0xa7b1ac, 0x879a8c, 0x9186ad, 0x776a8e, 0x000022, 0x000022, 0x000022, 0x000022,
    0x000022, 0x000022, 0x000022, 0x000022, 0x000022, 0x000022,
];

/// A non-empty list of colors.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Color>", into = "Vec<Color>"))]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette.  Fails on an empty list.
    pub fn new(colors: Vec<Color>) -> CoreResult<Self> {
        if colors.is_empty() {
            return Err(CoreError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Build an opaque palette from 24-bit `0xRRGGBB` entries.
    pub fn from_rgb24(entries: &[u32]) -> CoreResult<Self> {
        Self::new(entries.iter().copied().map(Color::from_rgb24).collect())
    }

    /// Pick a uniformly random entry.
    pub fn some_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        let i = (rng.r#gen::<f64>() * self.colors.len() as f64) as usize;
        // `gen::<f64>()` is in [0, 1) so `i < len`; the min guards rounding.
        self.colors[i.min(self.colors.len() - 1)]
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_RGB.iter().copied().map(Color::from_rgb24).collect(),
        }
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = CoreError;
    fn try_from(colors: Vec<Color>) -> CoreResult<Self> {
        Palette::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
