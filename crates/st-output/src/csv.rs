//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_summaries.csv`
//! - `run_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, RunSummaryRow, TickSummaryRow};
use crate::writer::FrameWriter;

/// Writes tick and run summaries to two CSV files.
pub struct CsvWriter {
    ticks:    Writer<File>,
    runs:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut ticks = Writer::from_path(dir.join("tick_summaries.csv"))?;
        ticks.write_record(["tick", "run", "dabs"])?;

        let mut runs = Writer::from_path(dir.join("run_summaries.csv"))?;
        runs.write_record(["run", "iterations"])?;

        Ok(Self { ticks, runs, finished: false })
    }
}

impl FrameWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.ticks.write_record(&[row.tick.to_string(), row.run.to_string(), row.dabs.to_string()])?;
        Ok(())
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.runs.write_record(&[row.run.to_string(), row.iterations.to_string()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.ticks.flush()?;
        self.runs.flush()?;
        Ok(())
    }
}
