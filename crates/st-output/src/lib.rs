//! `st-output` — frame and summary writers for the sand traveler engine.
//!
//! Two backends are provided:
//!
//! | Backend     | Files created                                   |
//! |-------------|-------------------------------------------------|
//! | `CsvWriter` | `tick_summaries.csv`, `run_summaries.csv`       |
//! | `PngWriter` | `frame_000000.png`, `frame_000010.png`, …       |
//!
//! Both implement [`FrameWriter`]; a pair `(A, B)` of writers is itself a
//! writer, so one observer can feed both.  Writers are driven by
//! [`FieldOutputObserver`], which implements `st_field::FieldObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use st_output::{CsvWriter, FieldOutputObserver, PngWriter};
//!
//! let writer = (CsvWriter::new(dir)?, PngWriter::new(dir)?);
//! let mut obs = FieldOutputObserver::new(writer);
//! field.run_ticks(600, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod png;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FieldOutputObserver;
pub use png::PngWriter;
pub use row::{RunSummaryRow, TickSummaryRow};
pub use writer::FrameWriter;
