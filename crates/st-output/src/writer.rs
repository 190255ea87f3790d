//! The `FrameWriter` trait implemented by all backend writers.

use st_core::Tick;
use st_surface::PixelSurface;

use crate::{OutputResult, RunSummaryRow, TickSummaryRow};

/// Trait implemented by the CSV and PNG writers.
///
/// A backend only overrides the records it stores; the rest default to
/// no-ops.  Errors are stored by the observer and retrieved with
/// [`FieldOutputObserver::take_error`][crate::FieldOutputObserver::take_error].
pub trait FrameWriter {
    /// Write the canvas as it stands at `tick`.
    fn write_frame(&mut self, _tick: Tick, _surface: &dyn PixelSurface) -> OutputResult<()> {
        Ok(())
    }

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
        Ok(())
    }

    /// Write one run summary row.
    fn write_run_summary(&mut self, _row: &RunSummaryRow) -> OutputResult<()> {
        Ok(())
    }

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}

/// Fan out to two writers.  The second writer still sees a record when the
/// first fails; the first error is returned.
impl<A: FrameWriter, B: FrameWriter> FrameWriter for (A, B) {
    fn write_frame(&mut self, tick: Tick, surface: &dyn PixelSurface) -> OutputResult<()> {
        let a = self.0.write_frame(tick, surface);
        let b = self.1.write_frame(tick, surface);
        a.and(b)
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        let a = self.0.write_tick_summary(row);
        let b = self.1.write_tick_summary(row);
        a.and(b)
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        let a = self.0.write_run_summary(row);
        let b = self.1.write_run_summary(row);
        a.and(b)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let a = self.0.finish();
        let b = self.1.finish();
        a.and(b)
    }
}
