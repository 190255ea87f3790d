//! `st-surface` — the pixel surface painters write into.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`surface`] | `PixelSurface` trait — the host's canvas contract           |
//! | [`buffer`]  | `PixelBuffer` — in-memory RGBA8 implementation              |
//! | [`plot`]    | `plot` — snap, bounds-check, clamp alpha, blend, write      |
//! | [`error`]   | `SurfaceError`, `SurfaceResult<T>`                          |
//!
//! Every paint operation in the engine goes through [`plot`]; coordinates
//! outside `[0, width) × [0, height)` are dropped there without error.

pub mod buffer;
pub mod error;
pub mod plot;
pub mod surface;


pub use buffer::PixelBuffer;
pub use error::{SurfaceError, SurfaceResult};
pub use plot::{plot, snap};
pub use surface::PixelSurface;
