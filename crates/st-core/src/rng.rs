//! Seeds and deterministic RNG wrappers.
//!
//! # Determinism strategy
//!
//! A run is fully determined by `(seed, FieldConfig, tick count)`:
//!
//! - The field owns one root [`SimRng`] seeded from [`Seed::expand`].
//! - Each `start()` draws a fresh run seed from the root, so restarts produce
//!   a new picture while the whole sequence stays reproducible.
//! - Each city gets its own [`CityRng`] seeded by
//!
//!     seed = run_seed XOR (city_id * MIXING_CONSTANT)
//!
//!   The mixing constant is the 64-bit fractional part of the golden ratio,
//!   which spreads consecutive city IDs uniformly across the seed space.
//!   A city's painters and traveler noise draw only from its own RNG, so the
//!   per-city streams never depend on how many other cities exist.

use std::hash::Hasher;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHasher;

use crate::CityId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── Seed ──────────────────────────────────────────────────────────────────────

/// A user-facing seed: either a raw integer or a phrase.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Seed {
    Number(u64),
    Text(String),
}

impl Seed {
    /// Expand into a 64-bit RNG state.  Phrases are hashed with `FxHasher`,
    /// which is deterministic across processes (unlike `RandomState`).
    pub fn expand(&self) -> u64 {
        match self {
            Seed::Number(n) => *n,
            Seed::Text(s) => {
                let mut hasher = FxHasher::default();
                hasher.write(s.as_bytes());
                hasher.finish()
            }
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Text("Sand Traveler by Jared Tarbell".to_owned())
    }
}

impl From<u64> for Seed {
    fn from(n: u64) -> Self {
        Seed::Number(n)
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Seed::Text(s.to_owned())
    }
}

// ── CityRng ───────────────────────────────────────────────────────────────────

/// Per-city deterministic RNG.
///
/// Created once per city at run start and stored in a parallel `Vec<CityRng>`
/// alongside the city's SoA arrays.
pub struct CityRng(SmallRng);

impl CityRng {
    /// Seed deterministically from the run seed and a city ID.
    pub fn new(run_seed: u64, city: CityId) -> Self {
        let seed = run_seed ^ u64::from(city.0).wrapping_mul(MIXING_CONSTANT);
        CityRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Field-level RNG for run-wide decisions (spiral offset, friend graph, run
/// seeds).  Used only from the single thread that owns the field.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, e.g. one per run.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen()
    }
}
