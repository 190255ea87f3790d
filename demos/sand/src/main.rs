//! sand — headless driver for the sand traveler engine.
//!
//! Runs a field for a fixed number of ticks and writes PNG frames plus tick
//! and run summaries.
//!
//! ```text
//! sand [CONFIG.json] [--ticks N] [--out DIR]
//! ```
//!
//! Fields missing from the JSON file take their defaults.  Set `RUST_LOG`
//! (e.g. `RUST_LOG=st_field=info`) for run lifecycle logs.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use st_core::{FieldConfig, Tick};
use st_field::{FieldBuilder, FieldObserver};
use st_output::{CsvWriter, FieldOutputObserver, FrameWriter, PngWriter};
use st_surface::{PixelBuffer, PixelSurface};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Used when the configuration leaves snapshots disabled.
const DEFAULT_OUTPUT_INTERVAL: u64 = 60;

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "sand", version, about = "Render a sand traveler field to PNG frames")]
struct Args {
    /// JSON field configuration.  Missing fields take their defaults.
    config: Option<PathBuf>,

    /// Ticks to run.
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Directory for frames and summaries.
    #[arg(long, default_value = "output/sand")]
    out: PathBuf,
}

// ── Observer wrapper to count events ──────────────────────────────────────────

struct CountingObserver<W: FrameWriter> {
    inner:    FieldOutputObserver<W>,
    dabs:     u64,
    restarts: u64,
    frames:   usize,
}

impl<W: FrameWriter> CountingObserver<W> {
    fn new(inner: FieldOutputObserver<W>) -> Self {
        Self { inner, dabs: 0, restarts: 0, frames: 0 }
    }
}

impl<W: FrameWriter> FieldObserver for CountingObserver<W> {
    fn on_run_start(&mut self, run: u64) {
        if run > 0 {
            self.restarts += 1;
        }
        self.inner.on_run_start(run);
    }

    fn on_run_end(&mut self, run: u64, iterations: u64) {
        self.inner.on_run_end(run, iterations);
    }

    fn on_tick_end(&mut self, tick: Tick, dabs: usize) {
        self.dabs += dabs as u64;
        self.inner.on_tick_end(tick, dabs);
    }

    fn on_snapshot(&mut self, tick: Tick, surface: &dyn PixelSurface) {
        self.frames += 1;
        self.inner.on_snapshot(tick, surface);
    }

    fn on_finish(&mut self, final_tick: Tick) {
        self.inner.on_finish(final_tick);
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config(path: Option<&Path>) -> Result<FieldConfig> {
    let Some(path) = path else {
        return Ok(FieldConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let Args { config: config_path, ticks, out: out_dir } = Args::parse();

    let mut config = load_config(config_path.as_deref())?;
    if config.output_interval_ticks == 0 {
        config.output_interval_ticks = DEFAULT_OUTPUT_INTERVAL;
    }

    println!("=== sand — sand traveler ===");
    println!(
        "Canvas: {}x{}  |  Cities: {}  |  Painters/city: {}  |  Ticks: {ticks}",
        config.width, config.height, config.city_count, config.sand_painter_count
    );
    println!(
        "Iterations: {}/tick, restart after {}  |  Frame every {} ticks",
        config.iterations_per_tick, config.iterations_max, config.output_interval_ticks
    );
    println!();

    // 1. Canvas and field.
    let surface = PixelBuffer::new(config.width, config.height, config.background_color)?;
    let mut field = FieldBuilder::new(config, surface).build()?;

    // 2. Output.
    fs::create_dir_all(&out_dir)?;
    let writer = (CsvWriter::new(&out_dir)?, PngWriter::new(&out_dir)?.with_prefix("sand"));
    let mut obs = CountingObserver::new(FieldOutputObserver::new(writer));

    // 3. Run.
    info!(ticks, out = %out_dir.display(), "running");
    let t0 = Instant::now();
    field.run_ticks(ticks, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  dabs painted : {}", obs.dabs);
    println!("  restarts     : {}", obs.restarts);
    println!("  frames       : {} (in {})", obs.frames, out_dir.display());
    println!(
        "  current run  : {} ({} iterations)",
        field.run().unwrap_or(0),
        field.iterations()
    );

    Ok(())
}
