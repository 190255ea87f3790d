//! `st-field` — the simulation field.
//!
//! # Run lifecycle
//!
//! ```text
//! Uninitialized ──start()──▶ Running ──(iterations > iterations_max)──▶ start() again
//! ```
//!
//! There is no terminal state: the field restarts indefinitely until the
//! host stops calling `tick`.  `tick` starts the first run itself if the host
//! has not.
//!
//! # One tick
//!
//! ```text
//! repeat config.iterations_per_tick times:
//!   for city in 0..N (ascending):
//!     advance(city, friend position)    — spring, damp, integrate, paint
//!   iterations += 1
//!   if iterations > iterations_max: start(); return early
//! ```
//!
//! With [`UpdateOrder::Sequential`][st_core::UpdateOrder] friend positions are
//! read live, so a city whose friend has a lower index sees the friend's
//! already-advanced position.  [`UpdateOrder::Snapshot`][st_core::UpdateOrder]
//! reads them from a copy taken at the start of each iteration.
//!
//! # Quick-start
//!
//! ```rust
//! use st_core::{Color, FieldConfig};
//! use st_field::{FieldBuilder, NoopObserver};
//! use st_surface::PixelBuffer;
//!
//! let config = FieldConfig { width: 200, height: 200, city_count: 20, ..FieldConfig::default() };
//! let surface = PixelBuffer::new(200, 200, Color::BLACK).unwrap();
//! let mut field = FieldBuilder::new(config, surface).build().unwrap();
//! field.run_ticks(10, &mut NoopObserver).unwrap();
//! ```

pub mod builder;
pub mod error;
pub mod field;
pub mod observer;


pub use builder::FieldBuilder;
pub use error::{FieldError, FieldResult};
pub use field::{Field, RunSummary, TickReport};
pub use observer::{FieldObserver, NoopObserver};
