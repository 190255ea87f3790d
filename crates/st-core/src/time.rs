//! Simulation time.
//!
//! The engine is tick-count driven, never wall-clock driven: a `Tick` is one
//! call to `Field::tick` by the host loop.  Within a tick the field may run
//! several iterations (`FieldConfig::iterations_per_tick`); iterations are
//! counted per run and reset on restart, ticks are never reset.

use std::fmt;

/// An absolute tick counter since the field was built.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// `true` if this tick falls on an `interval` boundary.  An interval of
    /// zero never matches.
    #[inline]
    pub fn is_on_interval(self, interval: u64) -> bool {
        interval > 0 && self.0.is_multiple_of(interval)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
