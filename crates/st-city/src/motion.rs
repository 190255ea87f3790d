//! One city's step: spring toward the friend, damp, integrate, then paint.

use st_core::{CityId, FieldConfig};
use st_paint::draw_travelers;
use st_surface::PixelSurface;

use crate::{CityBrushes, CityStore};

/// The friend's offset is divided by this before it is added to velocity.
pub const ATTRACTION_DIVISOR: f64 = 1000.0;

/// Velocity retained per step.
pub const DAMPING: f64 = 0.936;

impl CityStore {
    /// Advance `city` one step toward `friend_at` and paint.
    ///
    /// `friend_at` is where the city sees its friend: the live position for
    /// sequential iterations, the start-of-iteration copy for snapshot ones.
    /// Painting happens from the city's new position.  Travelers are drawn
    /// first when enabled; grains follow when the pair is closer than
    /// `distance_minimum`.
    ///
    /// Returns the number of dabs that landed on the surface.
    pub fn advance<S: PixelSurface + ?Sized>(
        &mut self,
        city:      CityId,
        friend_at: (f64, f64),
        brushes:   &mut CityBrushes,
        surface:   &mut S,
        config:    &FieldConfig,
    ) -> usize {
        let i = city.index();
        let (fx, fy) = friend_at;

        self.vx[i] = (self.vx[i] + (fx - self.x[i]) / ATTRACTION_DIVISOR) * DAMPING;
        self.vy[i] = (self.vy[i] + (fy - self.y[i]) / ATTRACTION_DIVISOR) * DAMPING;
        self.x[i] += self.vx[i];
        self.y[i] += self.vy[i];

        let (x, y) = (self.x[i], self.y[i]);
        let rng = &mut brushes.rngs[i];
        let mut landed = 0;

        if config.draw_travelers {
            landed += draw_travelers(surface, (x, y), friend_at, &brushes.travelers[i], rng);
        }

        if config.use_sand_painters && (fx - x).hypot(fy - y) < config.distance_minimum {
            for painter in &mut brushes.painters[i] {
                landed += if config.draw_perpendicular {
                    painter.render_perpendicular(surface, x, y, fx, fy, rng)
                } else {
                    painter.render(surface, x, y, fx, fy, rng)
                };
            }
        }
        landed
    }
}
