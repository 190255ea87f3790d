//! Traveler overlay: jittering dabs along the line between a city and its
//! friend.  Purely cosmetic and off by default.

use std::f64::consts::TAU;

use st_core::{BlendMode, CityRng, Color};
use st_surface::{PixelSurface, plot};

/// Traveler/anti-traveler pairs per call.
pub const TRAVELERS: usize = 11;

/// Travelers paint at full strength.
pub const TRAVELER_ALPHA: f64 = 255.0;

/// One dab in a hundred is knocked off the line.
const NOISE_CHANCE_PER_MILLE: f64 = 990.0;

/// Maximum noise displacement per axis, in pixels.
const NOISE_AMPLITUDE: f64 = 3.0;

/// How a city paints its travelers.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TravelerStyle {
    pub mode:  BlendMode,
    pub color: Color,
    pub alpha: f64,
}

impl TravelerStyle {
    /// Resolve the blend flags the same way painters do.
    pub fn pick(additive: bool, subtractive: bool, color: Color, rng: &mut CityRng) -> Self {
        Self {
            mode: BlendMode::pick(additive, subtractive, rng.inner()),
            color,
            alpha: TRAVELER_ALPHA,
        }
    }
}

/// Paint [`TRAVELERS`] mirrored pairs between `from` and `to`.
///
/// Each pair sits at `mid ± sin(t) · (from − to) / 2` for a random angle
/// `t`.  Returns the number of dabs that landed on the surface.
pub fn draw_travelers<S: PixelSurface + ?Sized>(
    surface: &mut S,
    from:    (f64, f64),
    to:      (f64, f64),
    style:   &TravelerStyle,
    rng:     &mut CityRng,
) -> usize {
    let half = ((from.0 - to.0) / 2.0, (from.1 - to.1) / 2.0);
    let mid = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);

    let mut landed = 0;
    for _ in 0..TRAVELERS {
        let s = (rng.unit() * TAU).sin();
        for sign in [1.0, -1.0] {
            let mut dx = sign * s * half.0 + mid.0;
            let mut dy = sign * s * half.1 + mid.1;
            if rng.unit() * 1000.0 > NOISE_CHANCE_PER_MILLE {
                dx += rng.unit() * NOISE_AMPLITUDE - rng.unit() * NOISE_AMPLITUDE;
                dy += rng.unit() * NOISE_AMPLITUDE - rng.unit() * NOISE_AMPLITUDE;
            }
            landed += plot(surface, dx.trunc(), dy.trunc(), style.color, style.alpha, style.mode)
                as usize;
        }
    }
    landed
}
