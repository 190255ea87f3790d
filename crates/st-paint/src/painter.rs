//! The grain painter.
//!
//! Each stroke paints one faint "sweep" dab at `sin(p)` along the segment,
//! then eleven pairs of grains fanned around that point at
//! `sin(p ± sin(i · w))`, fading linearly with `i`.  Between the sweep and
//! the grains both `p` and the grain spread take a small random step, which
//! makes successive strokes wander along the segment and builds the sand
//! texture over many frames.

use st_core::{BlendMode, CityRng, Color, Palette};
use st_surface::{PixelSurface, plot};

/// Grain pairs per stroke.
pub const GRAINS: usize = 11;

/// Sweep dab plus both grains of every pair.
pub const DABS_PER_STROKE: usize = 1 + 2 * GRAINS;

/// Bound on `|grain_distance|`.
pub const MAX_GRAIN_DISTANCE: f64 = 0.22;

/// Half-width of the uniform step applied to `p` and `grain_distance`.
pub const DRIFT: f64 = 0.05;

/// Scale of the perpendicular offset used by crosswise strokes.
pub const PERPENDICULAR_OFFSET: f64 = 0.42;

// ── PainterStyle ──────────────────────────────────────────────────────────────

/// Blend operator and alpha cap of one painter, fixed at construction.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PainterStyle {
    pub mode:      BlendMode,
    pub max_alpha: f64,
}

impl PainterStyle {
    /// Accumulating modes build up over many strokes and are capped at 128;
    /// alpha-over uses the full 255.
    pub fn for_mode(mode: BlendMode) -> Self {
        let max_alpha = if mode.is_accumulating() { 128.0 } else { 255.0 };
        Self { mode, max_alpha }
    }
}

// ── GrainPainter ──────────────────────────────────────────────────────────────

/// A drifting sand brush.
#[derive(Clone, Debug, PartialEq)]
pub struct GrainPainter {
    color:          Color,
    style:          PainterStyle,
    /// Position along the segment, fed through `sin`.  Kept in `[0, 1]`.
    p:              f64,
    /// Angular spread of the grain fan.  Kept in `±MAX_GRAIN_DISTANCE`.
    grain_distance: f64,
}

impl GrainPainter {
    /// Build a painter with explicit state.  `p` and `grain_distance` are
    /// clamped into their ranges.
    pub fn new(color: Color, style: PainterStyle, p: f64, grain_distance: f64) -> Self {
        Self {
            color,
            style,
            p: p.clamp(0.0, 1.0),
            grain_distance: grain_distance.clamp(-MAX_GRAIN_DISTANCE, MAX_GRAIN_DISTANCE),
        }
    }

    /// Build a painter the way a city does at run start: a palette color, a
    /// spread in `[0.01, 0.1)`, a phase in `[0, 1)`, then the blend operator
    /// (a coin flip when both accumulating modes are enabled).
    pub fn random(palette: &Palette, additive: bool, subtractive: bool, rng: &mut CityRng) -> Self {
        let color = palette.some_color(rng.inner());
        let grain_distance = rng.gen_range(0.01..0.1);
        let p = rng.unit();
        let mode = BlendMode::pick(additive, subtractive, rng.inner());
        Self::new(color, PainterStyle::for_mode(mode), p, grain_distance)
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn style(&self) -> PainterStyle {
        self.style
    }

    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }

    #[inline]
    pub fn grain_distance(&self) -> f64 {
        self.grain_distance
    }

    /// Paint one stroke directly along `(ox, oy) → (x, y)`.
    ///
    /// Returns the number of dabs that landed on the surface (at most
    /// [`DABS_PER_STROKE`]).
    pub fn render<S: PixelSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        x:       f64,
        y:       f64,
        ox:      f64,
        oy:      f64,
        rng:     &mut CityRng,
    ) -> usize {
        self.stroke(surface, x, y, ox, oy, rng)
    }

    /// Paint one stroke across the segment: both endpoints are rotated a
    /// quarter turn about the midpoint and scaled by
    /// [`PERPENDICULAR_OFFSET`] before the usual stroke is laid down.
    pub fn render_perpendicular<S: PixelSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        x:       f64,
        y:       f64,
        ox:      f64,
        oy:      f64,
        rng:     &mut CityRng,
    ) -> usize {
        let mx = (x + ox) / 2.0;
        let my = (y + oy) / 2.0;
        let g = PERPENDICULAR_OFFSET;

        let x1 = mx + (y - my) * g;
        let y1 = my - (x - mx) * g;
        let ox1 = mx + (oy - my) * g;
        let oy1 = my - (ox - mx) * g;

        self.stroke(surface, x1, y1, ox1, oy1, rng)
    }

    fn stroke<S: PixelSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        x:       f64,
        y:       f64,
        ox:      f64,
        oy:      f64,
        rng:     &mut CityRng,
    ) -> usize {
        let PainterStyle { mode, max_alpha } = self.style;
        let (dx, dy) = (x - ox, y - oy);

        // Sweep uses the phase from before this stroke's drift.
        let sinp = self.p.sin();
        let mut landed =
            plot(surface, ox + dx * sinp, oy + dy * sinp, self.color, max_alpha / 10.0, mode) as usize;

        self.drift(rng);

        let w = self.grain_distance / 10.0;
        for i in 0..GRAINS {
            let fi = i as f64;
            let alpha = (0.1 - fi / (GRAINS as f64 * 10.0)) * max_alpha;
            let siniw = (fi * w).sin();
            for s in [(self.p + siniw).sin(), (self.p - siniw).sin()] {
                let gx = (ox + dx * s).trunc();
                let gy = (oy + dy * s).trunc();
                landed += plot(surface, gx, gy, self.color, alpha, mode) as usize;
            }
        }
        landed
    }

    fn drift(&mut self, rng: &mut CityRng) {
        self.grain_distance = (self.grain_distance + rng.gen_range(-DRIFT..DRIFT))
            .clamp(-MAX_GRAIN_DISTANCE, MAX_GRAIN_DISTANCE);
        self.p = (self.p + rng.gen_range(-DRIFT..DRIFT)).clamp(0.0, 1.0);
    }
}
