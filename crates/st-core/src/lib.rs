//! `st-core` — foundational types for the sand traveler engine.
//!
//! This crate is a dependency of every other `st-*` crate.  It has no `st-*`
//! dependencies and only small external ones (`rand`, `rustc-hash`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CityId`                                              |
//! | [`color`]       | `Color` — packed, always-clamped RGBA                 |
//! | [`blend`]       | `BlendMode` and the three blend operators             |
//! | [`palette`]     | `Palette` — the sand colors painters draw from        |
//! | [`rng`]         | `Seed`, `CityRng` (per-city), `SimRng` (field-level)  |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `FieldConfig`, `UpdateOrder`                          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `FieldConfig` from JSON.                  |

pub mod blend;
pub mod color;
pub mod config;
pub mod error;
pub mod ids;
pub mod palette;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use blend::{BlendMode, blend_additive, blend_normal, blend_subtractive};
pub use color::Color;
pub use config::{FieldConfig, MIN_CITY_COUNT, UpdateOrder};
pub use error::{CoreError, CoreResult};
pub use ids::CityId;
pub use palette::Palette;
pub use rng::{CityRng, Seed, SimRng};
pub use time::Tick;
