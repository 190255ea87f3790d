//! The `Field` struct and its tick loop.

use st_city::{CityBrushes, CityStore, CityStoreBuilder};
use st_core::{CityId, FieldConfig, SimRng, Tick, UpdateOrder};
use st_surface::PixelSurface;
use tracing::info;

use crate::{FieldError, FieldObserver, FieldResult};

// ── Reports ───────────────────────────────────────────────────────────────────

/// How a run ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RunSummary {
    pub run:        u64,
    pub iterations: u64,
}

/// What one call to [`Field::tick`] did.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TickReport {
    /// Dabs that landed on the surface.
    pub dabs:         usize,
    /// Iterations performed (fewer than `iterations_per_tick` on restart).
    pub iterations:   u64,
    /// Set when this tick started the field's first run.
    pub started_run:  Option<u64>,
    /// Set when the iteration budget ran out during this tick.
    pub finished_run: Option<RunSummary>,
    /// The run that replaced `finished_run`.
    pub restarted:    Option<u64>,
}

// ── Field ─────────────────────────────────────────────────────────────────────

/// The simulation field: cities, canvas, and run lifecycle.
///
/// Create via [`FieldBuilder`][crate::FieldBuilder].
pub struct Field<S: PixelSurface> {
    config:  FieldConfig,
    surface: S,

    /// City kinematics and friend graph.  Empty until the first run starts.
    cities:  CityStore,

    /// Per-city painters and RNGs, separated for the split-borrow pattern.
    brushes: CityBrushes,

    /// Root RNG.  Every run draws its own child from it.
    rng:     SimRng,

    /// Index of the current run; `None` before the first `start`.
    run:        Option<u64>,
    iterations: u64,
    clock:      Tick,
}

impl<S: PixelSurface> Field<S> {
    pub(crate) fn new(config: FieldConfig, surface: S, rng: SimRng) -> Self {
        Self {
            config,
            surface,
            cities:     CityStore::new(0),
            brushes:    CityBrushes { painters: Vec::new(), travelers: Vec::new(), rngs: Vec::new() },
            rng,
            run:        None,
            iterations: 0,
            clock:      Tick::ZERO,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Begin a new run: reset the iteration counter, clear the canvas to the
    /// background color, seat the cities on the spiral, and assign friends.
    ///
    /// Returns the new run index.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn start(&mut self) -> FieldResult<u64> {
        let run = self.run.map_or(0, |r| r + 1);

        let mut run_rng = self.rng.child(run);
        let run_seed: u64 = run_rng.random();
        let (cities, brushes) = CityStoreBuilder::new(&self.config, run_seed).build(&mut run_rng)?;

        self.surface.clear(self.config.background_color);
        self.cities = cities;
        self.brushes = brushes;
        self.iterations = 0;
        self.run = Some(run);

        info!(run, cities = self.cities.count, run_seed, "run started");
        Ok(run)
    }

    /// Replace the configuration, re-seed from `config.seed`, and start over
    /// at run 0.
    ///
    /// The field is left untouched when `config` is invalid or does not
    /// match the surface size.
    pub fn start_with(&mut self, config: FieldConfig) -> FieldResult<u64> {
        config.validate()?;
        check_surface(&config, &self.surface)?;

        info!(seed = ?config.seed, cities = config.city_count, "reconfigured");
        self.rng = SimRng::new(config.seed.expand());
        self.config = config;
        self.run = None;
        self.start()
    }

    /// Advance the field by one tick of `config.iterations_per_tick`
    /// iterations.  Starts the first run if needed; restarts (and returns
    /// early) when the iteration budget is exceeded.
    pub fn tick(&mut self) -> FieldResult<TickReport> {
        let mut report = TickReport::default();
        if self.run.is_none() {
            report.started_run = Some(self.start()?);
        }

        for _ in 0..self.config.iterations_per_tick {
            report.dabs += self.iterate();
            report.iterations += 1;
            self.iterations += 1;

            if self.iterations > self.config.iterations_max {
                report.finished_run = self.run.map(|run| RunSummary { run, iterations: self.iterations });
                report.restarted = Some(self.start()?);
                break;
            }
        }

        self.clock = self.clock + 1;
        Ok(report)
    }

    /// Run exactly `n` ticks, calling observer hooks at every boundary.
    pub fn run_ticks<O: FieldObserver>(&mut self, n: u64, observer: &mut O) -> FieldResult<()> {
        let interval = self.config.output_interval_ticks;
        for _ in 0..n {
            let now = self.clock;
            let report = self.tick()?;

            if let Some(run) = report.started_run {
                observer.on_run_start(run);
            }
            if let Some(ended) = report.finished_run {
                observer.on_run_end(ended.run, ended.iterations);
            }
            if let Some(run) = report.restarted {
                observer.on_run_start(run);
            }
            observer.on_tick_end(now, report.dabs);
            if now.is_on_interval(interval) {
                observer.on_snapshot(now, &self.surface);
            }
        }
        observer.on_finish(self.clock);
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Euclidean distance between two cities.  Zero when `a == b`.
    ///
    /// # Panics
    ///
    /// When `a != b` and either id is not a city of the current run.  Before
    /// the first run there are no cities at all.
    pub fn distance_between(&self, a: CityId, b: CityId) -> f64 {
        self.cities.distance(a, b)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Give the canvas back to the host.
    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn cities(&self) -> &CityStore {
        &self.cities
    }

    pub fn brushes(&self) -> &CityBrushes {
        &self.brushes
    }

    /// Current run index, or `None` before the first run.
    pub fn run(&self) -> Option<u64> {
        self.run
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Iterations completed in the current run.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Ticks completed since the field was built.
    pub fn current_tick(&self) -> Tick {
        self.clock
    }

    // ── Core iteration ────────────────────────────────────────────────────

    /// Advance every city once in ascending index order.
    fn iterate(&mut self) -> usize {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let config  = &self.config;
        let surface = &mut self.surface;
        let cities  = &mut self.cities;
        let brushes = &mut self.brushes;

        let snapshot = match config.update_order {
            UpdateOrder::Sequential => None,
            UpdateOrder::Snapshot   => Some(cities.positions()),
        };

        let mut dabs = 0;
        for i in 0..cities.count {
            // `count` fits in u32 (validated config).
            let city = CityId(i as u32);
            let friend = cities.friend_of(city);
            let friend_at = match &snapshot {
                Some(positions) => positions[friend.index()],
                None            => cities.position(friend),
            };
            dabs += cities.advance(city, friend_at, brushes, surface, config);
        }
        dabs
    }
}

/// Reject a surface whose size differs from the configured canvas.
pub(crate) fn check_surface<S: PixelSurface + ?Sized>(config: &FieldConfig, surface: &S) -> FieldResult<()> {
    let (w, h) = (surface.width(), surface.height());
    if (w, h) != (config.width, config.height) {
        return Err(FieldError::SurfaceMismatch {
            width:      config.width,
            height:     config.height,
            got_width:  w,
            got_height: h,
        });
    }
    Ok(())
}
