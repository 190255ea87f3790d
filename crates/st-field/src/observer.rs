//! Field observer trait for progress reporting and frame capture.

use st_core::Tick;
use st_surface::PixelSurface;

/// Callbacks invoked by [`Field::run_ticks`][crate::Field::run_ticks].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — restart counter
///
/// ```rust
/// use st_field::FieldObserver;
///
/// #[derive(Default)]
/// struct Restarts(u64);
///
/// impl FieldObserver for Restarts {
///     fn on_run_start(&mut self, run: u64) {
///         if run > 0 {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait FieldObserver {
    /// A run has begun (the first one, or a restart).
    fn on_run_start(&mut self, _run: u64) {}

    /// A run has ended after `iterations` iterations.  Always followed by
    /// `on_run_start` for the next run.
    fn on_run_end(&mut self, _run: u64, _iterations: u64) {}

    /// Called after each tick.  `dabs` is the number of dabs that landed on
    /// the surface during the tick.
    fn on_tick_end(&mut self, _tick: Tick, _dabs: usize) {}

    /// Called every `config.output_interval_ticks` ticks with read-only
    /// access to the canvas.
    fn on_snapshot(&mut self, _tick: Tick, _surface: &dyn PixelSurface) {}

    /// Called once after the last tick of a `run_ticks` call.
    fn on_finish(&mut self, _final_tick: Tick) {}
}

/// A [`FieldObserver`] that does nothing.
pub struct NoopObserver;

impl FieldObserver for NoopObserver {}
