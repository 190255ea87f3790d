//! Run configuration.
//!
//! One immutable [`FieldConfig`] value is handed to the field builder and
//! read by every layer below it.  There is no process-wide tunable state.
//! Defaults reproduce the classic piece: 400 cities on an 800×800 canvas,
//! three painters each, mixed additive/subtractive grains, restart every
//! 2,400 iterations.

use crate::{Color, CoreError, CoreResult, Palette, Seed};

/// Smallest population for which friend selection is guaranteed to find a
/// partner other than the city itself.
pub const MIN_CITY_COUNT: usize = 5;

/// How cities observe each other within one iteration.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UpdateOrder {
    /// Cities advance in ascending index order, in place.  A city whose
    /// friend has a lower index reads the friend's already-advanced position.
    #[default]
    Sequential,
    /// Friend positions are read from a copy taken at the start of the
    /// iteration, so update order does not leak into the motion.
    Snapshot,
}

/// Top-level configuration for one field.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,

    /// Number of cities.  Must be at least [`MIN_CITY_COUNT`].
    pub city_count: usize,
    /// Grain painters owned by each city.
    pub sand_painter_count: usize,

    /// Iterations per run; the field restarts once this is exceeded.
    pub iterations_max: u64,
    /// Iterations performed by one `Field::tick` call.
    pub iterations_per_tick: u64,

    /// Cities closer than this to their friend paint grains.
    pub distance_minimum: f64,
    /// Initial spiral speed of city 0.
    pub velocity: f64,

    pub blending_additive: bool,
    pub blending_subtractive: bool,

    /// Paint the traveler overlay along each city→friend line.
    pub draw_travelers: bool,
    /// Paint grains crosswise through the segment midpoint.
    pub draw_perpendicular: bool,
    /// Paint grains at all.  Cities still move when this is off.
    pub use_sand_painters: bool,

    pub seed: Seed,
    pub background_color: Color,
    pub traveler_color: Color,
    pub palette: Palette,

    pub update_order: UpdateOrder,

    /// Observer snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width:                 800,
            height:                800,
            city_count:            400,
            sand_painter_count:    3,
            iterations_max:        120 * 20,
            iterations_per_tick:   1,
            distance_minimum:      333.0,
            velocity:              20.0,
            blending_additive:     true,
            blending_subtractive:  true,
            draw_travelers:        false,
            draw_perpendicular:    true,
            use_sand_painters:     true,
            seed:                  Seed::default(),
            background_color:      Color::BLACK,
            traveler_color:        Color::WHITE,
            palette:               Palette::default(),
            update_order:          UpdateOrder::Sequential,
            output_interval_ticks: 0,
        }
    }
}

impl FieldConfig {
    /// Check every invariant the engine relies on.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::Config(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.city_count < MIN_CITY_COUNT {
            return Err(CoreError::Config(format!(
                "friend selection cannot terminate for N < {MIN_CITY_COUNT} (city_count = {})",
                self.city_count
            )));
        }
        if u32::try_from(self.city_count).is_err() {
            return Err(CoreError::Config(format!(
                "city_count {} exceeds the id space",
                self.city_count
            )));
        }
        if self.iterations_max == 0 {
            return Err(CoreError::Config("iterations_max must be at least 1".into()));
        }
        if self.iterations_per_tick == 0 {
            return Err(CoreError::Config("iterations_per_tick must be at least 1".into()));
        }
        if !self.distance_minimum.is_finite() || self.distance_minimum < 0.0 {
            return Err(CoreError::Config(format!(
                "distance_minimum must be finite and >= 0, got {}",
                self.distance_minimum
            )));
        }
        if !self.velocity.is_finite() {
            return Err(CoreError::Config(format!(
                "velocity must be finite, got {}",
                self.velocity
            )));
        }
        Ok(())
    }

    /// Canvas center, where the spiral is anchored.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}
