//! `st-paint` — brushes that turn a pair of points into blended dabs.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`painter`]  | `GrainPainter`, `PainterStyle` — the drifting sand brush   |
//! | [`traveler`] | `TravelerStyle`, `draw_travelers` — cosmetic line overlay  |
//!
//! # Design notes
//!
//! A brush never owns or references cities.  It receives endpoint
//! coordinates per call, the surface to write into, and the owning city's
//! [`CityRng`][st_core::CityRng] for its random drift.  Every write goes
//! through [`st_surface::plot`], so off-canvas dabs are silently dropped and
//! each brush keeps the blend operator it was built with.

pub mod painter;
pub mod traveler;

#[cfg(test)]
mod tests;

pub use painter::{
    DABS_PER_STROKE, GRAINS, GrainPainter, MAX_GRAIN_DISTANCE, PERPENDICULAR_OFFSET, PainterStyle,
};
pub use traveler::{TRAVELER_ALPHA, TRAVELERS, TravelerStyle, draw_travelers};
