//! `st-city` — the cities of one run.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`store`]   | `CityStore` (SoA kinematics + friends), `CityBrushes`         |
//! | [`spiral`]  | `spiral_layout` — initial positions and velocities            |
//! | [`friends`] | `pick_friend`, `assign_friends` — the directed friend graph   |
//! | [`motion`]  | `CityStore::advance` — spring, damping, integration, painting |
//! | [`builder`] | `CityStoreBuilder` — one run's cities in one step             |
//! | [`error`]   | `CityError`, `CityResult<T>`                                  |
//!
//! # Identity
//!
//! A city is its [`CityId`][st_core::CityId]: the index into every array of
//! [`CityStore`] and [`CityBrushes`].  Friends are stored as ids, never as
//! references, so the friend graph may contain cycles without any ownership
//! cycle.

pub mod builder;
pub mod error;
pub mod friends;
pub mod motion;
pub mod spiral;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::CityStoreBuilder;
pub use error::{CityError, CityResult};
pub use friends::{MAX_FRIEND_ATTEMPTS, assign_friends, pick_friend};
pub use motion::{ATTRACTION_DIVISOR, DAMPING};
pub use spiral::{Seat, spiral_layout};
pub use store::{CityBrushes, CityStore};
