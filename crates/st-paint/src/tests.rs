//! Unit tests for st-paint.

use st_core::{BlendMode, CityId, CityRng, Color};
use st_surface::{PixelBuffer, PixelSurface};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Surface double that records every write and fails on out-of-bounds ones.
struct Recording {
    inner:  PixelBuffer,
    writes: Vec<(u32, u32)>,
    colors: Vec<Color>,
}

impl Recording {
    fn new(w: u32, h: u32) -> Self {
        Self { inner: PixelBuffer::new(w, h, Color::BLACK).unwrap(), writes: Vec::new(), colors: Vec::new() }
    }
}

impl PixelSurface for Recording {
    fn width(&self) -> u32 { self.inner.width() }
    fn height(&self) -> u32 { self.inner.height() }
    fn get_pixel(&self, x: u32, y: u32) -> Color { self.inner.get_pixel(x, y) }
    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        assert!(x < self.width() && y < self.height(), "write out of bounds at ({x}, {y})");
        self.writes.push((x, y));
        self.colors.push(color);
        self.inner.set_pixel(x, y, color);
    }
    fn clear(&mut self, color: Color) { self.inner.clear(color) }
}

fn rng(seed: u64) -> CityRng {
    CityRng::new(seed, CityId(0))
}

#[cfg(test)]
mod painter {
    use st_core::{Palette, blend_normal};

    use super::*;
    use crate::painter::DRIFT;
    use crate::{DABS_PER_STROKE, GRAINS, GrainPainter, MAX_GRAIN_DISTANCE, PainterStyle};

    fn additive_painter() -> GrainPainter {
        GrainPainter::new(
            Color::rgba(200, 150, 100, 255),
            PainterStyle::for_mode(BlendMode::Additive),
            0.5,
            0.1,
        )
    }

    #[test]
    fn style_caps_alpha_by_mode() {
        assert_eq!(PainterStyle::for_mode(BlendMode::Additive).max_alpha, 128.0);
        assert_eq!(PainterStyle::for_mode(BlendMode::Subtractive).max_alpha, 128.0);
        assert_eq!(PainterStyle::for_mode(BlendMode::Normal).max_alpha, 255.0);
    }

    #[test]
    fn new_clamps_state() {
        let p = GrainPainter::new(Color::WHITE, PainterStyle::for_mode(BlendMode::Normal), 3.0, -1.0);
        assert_eq!(p.p(), 1.0);
        assert_eq!(p.grain_distance(), -MAX_GRAIN_DISTANCE);
    }

    #[test]
    fn single_render_writes_23_dabs_in_bounds() {
        let mut surface = Recording::new(20, 20);
        let mut painter = additive_painter();
        let landed = painter.render(&mut surface, 10.0, 10.0, 0.0, 0.0, &mut rng(1));
        assert_eq!(landed, DABS_PER_STROKE);
        assert_eq!(surface.writes.len(), 23);
        assert!(surface.writes.iter().all(|&(x, y)| x <= 10 && y <= 10));
    }

    #[test]
    fn stroke_values_follow_the_grain_schedule() {
        let grey = |v: u8| Color::rgba(v, v, v, 255);
        let (p, gd) = (0.5, 0.2);
        let mut painter =
            GrainPainter::new(Color::WHITE, PainterStyle::for_mode(BlendMode::Normal), p, gd);
        let mut surface = Recording::new(1000, 3);
        painter.render(&mut surface, 1000.0, 1.0, 0.0, 1.0, &mut rng(8));

        // Same stream as the painter: spread drifts first, then phase.
        let mut twin = rng(8);
        let gd2 = (gd + twin.gen_range(-DRIFT..DRIFT)).clamp(-MAX_GRAIN_DISTANCE, MAX_GRAIN_DISTANCE);
        let p2 = (p + twin.gen_range(-DRIFT..DRIFT)).clamp(0.0, 1.0);
        assert_eq!((painter.p(), painter.grain_distance()), (p2, gd2));

        let w = gd2 / 10.0;
        let mut expected = vec![(1000.0 * p.sin(), 255.0 / 10.0)];
        for i in 0..GRAINS {
            let alpha = (0.1 - i as f64 / 110.0) * 255.0;
            let siniw = (i as f64 * w).sin();
            expected.push(((1000.0 * (p2 + siniw).sin()).trunc(), alpha));
            expected.push(((1000.0 * (p2 - siniw).sin()).trunc(), alpha));
        }
        assert_eq!(surface.writes.len(), DABS_PER_STROKE);

        let mut model = vec![Color::BLACK; 1000];
        for (k, &(x, alpha)) in expected.iter().enumerate() {
            let x = x as usize;
            assert_eq!(surface.writes[k], (x as u32, 1), "dab {k}");
            let want = blend_normal(model[x], Color::WHITE, alpha);
            assert_eq!(surface.colors[k], want, "dab {k}");
            model[x] = want;
        }

        // Sweep: pre-drift phase, alpha 25.5 on black.
        assert_eq!(surface.writes[0], (479, 1));
        assert_eq!(surface.colors[0], grey(25));
        // Grain 0: both dabs on the same pixel at full grain alpha.
        assert_eq!(surface.writes[1], surface.writes[2]);
        assert_eq!(surface.colors[2], blend_normal(surface.colors[1], Color::WHITE, 25.5));
        // Grain 10: the faintest pair, at the edges of the fan.
        assert_ne!(surface.writes[21], surface.writes[22]);
        assert_eq!(surface.colors[21], grey(2));
        assert_eq!(surface.colors[22], grey(2));
    }

    #[test]
    fn perpendicular_render_writes_23_dabs() {
        let mut surface = Recording::new(64, 64);
        let mut painter = additive_painter();
        let landed = painter.render_perpendicular(&mut surface, 40.0, 30.0, 20.0, 30.0, &mut rng(2));
        assert_eq!(landed, DABS_PER_STROKE);
        assert_eq!(surface.writes.len(), DABS_PER_STROKE);
    }

    #[test]
    fn perpendicular_stroke_crosses_the_segment() {
        // Horizontal segment (20,30)→(40,30): the crosswise stroke is vertical
        // through x = 30, spanning y in [30 - 4.2, 30 + 4.2].
        let mut surface = Recording::new(64, 64);
        let mut painter =
            GrainPainter::new(Color::WHITE, PainterStyle::for_mode(BlendMode::Normal), 0.5, 0.0);
        painter.render_perpendicular(&mut surface, 40.0, 30.0, 20.0, 30.0, &mut rng(3));
        for &(x, y) in &surface.writes {
            assert_eq!(x, 30, "dab at ({x}, {y}) is off the perpendicular");
            assert!((25..=34).contains(&y), "dab at ({x}, {y}) outside the offset span");
        }
    }

    #[test]
    fn off_canvas_segment_writes_nothing() {
        let mut surface = Recording::new(10, 10);
        let mut painter = additive_painter();
        let landed = painter.render(&mut surface, 500.0, 500.0, 400.0, 400.0, &mut rng(4));
        assert_eq!(landed, 0);
        assert!(surface.writes.is_empty());
    }

    #[test]
    fn drift_stays_in_range() {
        let mut surface = PixelBuffer::new(8, 8, Color::BLACK).unwrap();
        let mut painter = additive_painter();
        let mut r = rng(5);
        let mut last = (painter.p(), painter.grain_distance());
        for _ in 0..5_000 {
            painter.render(&mut surface, 5.0, 5.0, 1.0, 1.0, &mut r);
            let now = (painter.p(), painter.grain_distance());
            assert!((0.0..=1.0).contains(&now.0));
            assert!((-MAX_GRAIN_DISTANCE..=MAX_GRAIN_DISTANCE).contains(&now.1));
            assert!((now.0 - last.0).abs() <= DRIFT + 1e-12);
            assert!((now.1 - last.1).abs() <= DRIFT + 1e-12);
            last = now;
        }
    }

    #[test]
    fn same_seed_same_pixels() {
        let paint = |seed| {
            let mut surface = PixelBuffer::new(32, 32, Color::BLACK).unwrap();
            let mut painter = additive_painter();
            let mut r = rng(seed);
            for _ in 0..200 {
                painter.render(&mut surface, 30.0, 25.0, 2.0, 3.0, &mut r);
            }
            surface
        };
        assert_eq!(paint(7), paint(7));
    }

    #[test]
    fn normal_mode_paints_toward_color() {
        let mut surface = PixelBuffer::new(16, 16, Color::BLACK).unwrap();
        let mut painter =
            GrainPainter::new(Color::WHITE, PainterStyle::for_mode(BlendMode::Normal), 0.3, 0.05);
        let mut r = rng(6);
        for _ in 0..50 {
            painter.render(&mut surface, 12.0, 12.0, 0.0, 0.0, &mut r);
        }
        assert!(surface.count_not(Color::BLACK) > 0);
    }

    #[test]
    fn random_respects_ranges_and_flags() {
        let palette = Palette::default();
        let mut r = rng(8);
        for _ in 0..100 {
            let p = GrainPainter::random(&palette, false, false, &mut r);
            assert_eq!(p.style().mode, BlendMode::Normal);
            assert!((0.01..0.1).contains(&p.grain_distance()));
            assert!((0.0..1.0).contains(&p.p()));
            assert!(palette.colors().contains(&p.color()));
        }
        let p = GrainPainter::random(&palette, true, false, &mut r);
        assert_eq!(p.style(), PainterStyle::for_mode(BlendMode::Additive));
    }
}

#[cfg(test)]
mod traveler {
    use super::*;
    use crate::{TRAVELERS, TravelerStyle, draw_travelers};

    #[test]
    fn draws_mirrored_pairs_on_the_segment() {
        let mut surface = Recording::new(64, 64);
        let style = TravelerStyle { mode: BlendMode::Normal, color: Color::WHITE, alpha: 255.0 };
        let landed = draw_travelers(&mut surface, (10.0, 20.0), (50.0, 20.0), &style, &mut rng(1));
        assert_eq!(landed, 2 * TRAVELERS);
        // Horizontal segment: every dab is on row 20 unless noise knocked it.
        let on_row = surface.writes.iter().filter(|&&(_, y)| y == 20).count();
        assert!(on_row >= 2 * TRAVELERS - 4, "{:?}", surface.writes);
        assert!(surface.writes.iter().all(|&(x, _)| (7..=53).contains(&x)));
    }

    #[test]
    fn full_alpha_replaces_pixel_with_color() {
        let mut surface = PixelBuffer::new(32, 32, Color::BLACK).unwrap();
        let red = Color::rgba(255, 0, 0, 255);
        let style = TravelerStyle { mode: BlendMode::Subtractive, color: red, alpha: 255.0 };
        draw_travelers(&mut surface, (5.0, 5.0), (25.0, 25.0), &style, &mut rng(2));
        let painted: Vec<_> = (0..32)
            .flat_map(|y| (0..32).map(move |x| (x, y)))
            .filter(|&(x, y)| surface.get_pixel(x, y) != Color::BLACK)
            .collect();
        assert!(!painted.is_empty());
        assert!(painted.iter().all(|&(x, y)| surface.get_pixel(x, y) == red));
    }

    #[test]
    fn pick_uses_full_alpha() {
        let style = TravelerStyle::pick(true, false, Color::WHITE, &mut rng(3));
        assert_eq!(style.mode, BlendMode::Additive);
        assert_eq!(style.alpha, crate::TRAVELER_ALPHA);
    }
}
