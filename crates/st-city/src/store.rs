//! City storage: `CityStore` (SoA kinematics) and `CityBrushes` (painters,
//! traveler style, and RNG per city).
//!
//! # Why two structs?
//!
//! Advancing a city reads its friend's position from `CityStore` while
//! mutating that city's painters and RNG.  Keeping the brushes in a separate
//! struct lets the motion step hold `&CityStore` and `&mut CityBrushes` at
//! the same time without index juggling.

use st_core::{CityId, CityRng};
use st_paint::{GrainPainter, TravelerStyle};

// ── CityStore ─────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for every city's kinematic state.
///
/// Every `Vec` has exactly `count` elements; the `CityId` is the index into
/// all of them.
#[derive(Clone, Debug, PartialEq)]
pub struct CityStore {
    /// Number of cities.  Equals the length of every SoA `Vec`.
    pub count: usize,

    pub x:  Vec<f64>,
    pub y:  Vec<f64>,
    pub vx: Vec<f64>,
    pub vy: Vec<f64>,

    /// The city each city is attracted to.  `CityId::INVALID` until
    /// [`assign_friends`][crate::assign_friends] runs; never the city itself
    /// afterwards.
    pub friend: Vec<CityId>,
}

impl CityStore {
    /// Allocate `count` cities at the origin, at rest, without friends.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            x:      vec![0.0; count],
            y:      vec![0.0; count],
            vx:     vec![0.0; count],
            vy:     vec![0.0; count],
            friend: vec![CityId::INVALID; count],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `CityId`s in ascending index order.
    pub fn city_ids(&self) -> impl Iterator<Item = CityId> + '_ {
        (0..self.count as u32).map(CityId)
    }

    #[inline]
    pub fn position(&self, city: CityId) -> (f64, f64) {
        (self.x[city.index()], self.y[city.index()])
    }

    #[inline]
    pub fn velocity(&self, city: CityId) -> (f64, f64) {
        (self.vx[city.index()], self.vy[city.index()])
    }

    #[inline]
    pub fn friend_of(&self, city: CityId) -> CityId {
        self.friend[city.index()]
    }

    /// Euclidean distance between two cities.  Zero when `a == b`.
    pub fn distance(&self, a: CityId, b: CityId) -> f64 {
        if a == b {
            return 0.0;
        }
        let (ax, ay) = self.position(a);
        let (bx, by) = self.position(b);
        (bx - ax).hypot(by - ay)
    }

    /// Copy of every position, for snapshot-ordered iterations.
    pub fn positions(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}

// ── CityBrushes ───────────────────────────────────────────────────────────────

/// Per-city brushes, parallel to [`CityStore`].
///
/// Each city exclusively owns its painters for the lifetime of the run.
pub struct CityBrushes {
    pub painters:  Vec<Vec<GrainPainter>>,
    pub travelers: Vec<TravelerStyle>,
    pub rngs:      Vec<CityRng>,
}

impl CityBrushes {
    pub fn len(&self) -> usize {
        self.rngs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rngs.is_empty()
    }

    /// Painters of one city.
    #[inline]
    pub fn painters_of(&self, city: CityId) -> &[GrainPainter] {
        &self.painters[city.index()]
    }
}
