//! PNG frame backend.
//!
//! One file per snapshot, named `<prefix>_<tick>.png` with the tick
//! zero-padded to six digits so frames sort in order.

use std::fs;
use std::path::{Path, PathBuf};

use st_core::Tick;
use st_surface::PixelSurface;
use tracing::debug;

use crate::{OutputError, OutputResult};
use crate::writer::FrameWriter;

/// Writes canvas snapshots as RGBA PNG files.
pub struct PngWriter {
    dir:     PathBuf,
    prefix:  String,
    written: usize,
}

impl PngWriter {
    /// Write frames into `dir`, creating it if needed.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf(), prefix: "frame".to_owned(), written: 0 })
    }

    /// Replace the default `frame` file name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Path the frame for `tick` is written to.
    pub fn frame_path(&self, tick: Tick) -> PathBuf {
        self.dir.join(format!("{}_{:06}.png", self.prefix, tick.0))
    }

    /// Frames written so far.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl FrameWriter for PngWriter {
    fn write_frame(&mut self, tick: Tick, surface: &dyn PixelSurface) -> OutputResult<()> {
        let (width, height) = (surface.width(), surface.height());
        let bytes = surface.to_rgba8();
        let got = bytes.len();
        let img = image::RgbaImage::from_raw(width, height, bytes)
            .ok_or(OutputError::FrameSize { width, height, got })?;

        let path = self.frame_path(tick);
        img.save(&path)?;
        self.written += 1;
        debug!(path = %path.display(), "frame written");
        Ok(())
    }
}
