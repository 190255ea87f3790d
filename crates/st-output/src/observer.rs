//! `FieldOutputObserver<W>` — bridges `FieldObserver` to a `FrameWriter`.

use st_core::Tick;
use st_field::FieldObserver;
use st_surface::PixelSurface;
use tracing::warn;

use crate::row::{RunSummaryRow, TickSummaryRow};
use crate::writer::FrameWriter;
use crate::{OutputError, OutputResult};

/// A [`FieldObserver`] that writes frames and summaries to any
/// [`FrameWriter`] backend.
///
/// Errors from the writer are stored internally because `FieldObserver`
/// methods have no return value.  After `field.run_ticks()` returns, check
/// for errors with [`take_error`][Self::take_error].
pub struct FieldOutputObserver<W: FrameWriter> {
    writer:     W,
    run:        u64,
    last_error: Option<OutputError>,
}

impl<W: FrameWriter> FieldOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, run: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `run_ticks` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: FrameWriter> FieldObserver for FieldOutputObserver<W> {
    fn on_run_start(&mut self, run: u64) {
        self.run = run;
    }

    fn on_run_end(&mut self, run: u64, iterations: u64) {
        let result = self.writer.write_run_summary(&RunSummaryRow { run, iterations });
        self.store_err(result);
    }

    fn on_tick_end(&mut self, tick: Tick, dabs: usize) {
        let row = TickSummaryRow { tick: tick.0, run: self.run, dabs: dabs as u64 };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, surface: &dyn PixelSurface) {
        let result = self.writer.write_frame(tick, surface);
        self.store_err(result);
    }

    fn on_finish(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
