//! Fluent builder for one run's `CityStore` + `CityBrushes`.
//!
//! # Usage
//!
//! ```rust
//! use st_city::CityStoreBuilder;
//! use st_core::{FieldConfig, SimRng};
//!
//! let config = FieldConfig { city_count: 10, ..FieldConfig::default() };
//! let mut rng = SimRng::new(7);
//!
//! let (store, brushes) = CityStoreBuilder::new(&config, /*run_seed=*/ 7)
//!     .build(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(store.count, 10);
//! assert_eq!(brushes.len(), 10);
//! ```

use std::f64::consts::TAU;

use st_core::{CityRng, FieldConfig, SimRng};
use st_paint::{GrainPainter, TravelerStyle};
use tracing::debug;

use crate::{CityBrushes, CityResult, CityStore, assign_friends, spiral_layout};

/// Builds the cities of one run from a validated [`FieldConfig`].
pub struct CityStoreBuilder<'a> {
    config:   &'a FieldConfig,
    run_seed: u64,
}

impl<'a> CityStoreBuilder<'a> {
    /// `run_seed` seeds every city's [`CityRng`].
    pub fn new(config: &'a FieldConfig, run_seed: u64) -> Self {
        Self { config, run_seed }
    }

    /// Seat the cities on the spiral, give each its painters and traveler
    /// style, then draw the friend graph.
    ///
    /// `rng` supplies the spiral offset and the friend choices, in that order.
    pub fn build(self, rng: &mut SimRng) -> CityResult<(CityStore, CityBrushes)> {
        let config = self.config;
        let count = config.city_count;

        let offset = rng.unit() * TAU;
        debug!(offset, count, "seating cities on spiral");

        let mut store = CityStore::new(count);
        for (i, seat) in spiral_layout(count, config.center(), config.velocity, offset)
            .into_iter()
            .enumerate()
        {
            store.x[i] = seat.x;
            store.y[i] = seat.y;
            store.vx[i] = seat.vx;
            store.vy[i] = seat.vy;
        }

        let (add, sub) = (config.blending_additive, config.blending_subtractive);
        let mut painters = Vec::with_capacity(count);
        let mut travelers = Vec::with_capacity(count);
        let mut rngs = Vec::with_capacity(count);
        for city in store.city_ids() {
            let mut city_rng = CityRng::new(self.run_seed, city);
            painters.push(
                (0..config.sand_painter_count)
                    .map(|_| GrainPainter::random(&config.palette, add, sub, &mut city_rng))
                    .collect::<Vec<_>>(),
            );
            travelers.push(TravelerStyle::pick(add, sub, config.traveler_color, &mut city_rng));
            rngs.push(city_rng);
        }

        assign_friends(&mut store, rng)?;

        Ok((store, CityBrushes { painters, travelers, rngs }))
    }
}
