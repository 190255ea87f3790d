//! Friend selection.
//!
//! City `i` befriends `(i + k) mod N` with `k = trunc(1 + u · N / 5)` for a
//! uniform `u ∈ [0, 1)`, so friends are always a short hop forward in index
//! order.  The selection loop is bounded and reports failure instead of
//! spinning forever on a degenerate population.

use st_core::{CityId, SimRng};

use crate::{CityError, CityResult, CityStore};

/// Retries before [`pick_friend`] gives up.
pub const MAX_FRIEND_ATTEMPTS: u32 = 64;

/// Choose a friend for `city` in a population of `count`.
///
/// Never returns `city` itself.
pub fn pick_friend(city: CityId, count: usize, rng: &mut SimRng) -> CityResult<CityId> {
    if count > 1 {
        let reach = count as f64 / 5.0;
        for _ in 0..MAX_FRIEND_ATTEMPTS {
            let hop = (1.0 + rng.unit() * reach) as usize;
            let friend = (city.index() + hop) % count;
            if friend != city.index() {
                // `friend < count`, and `count` fits in u32 (validated config).
                return Ok(CityId(friend as u32));
            }
        }
    }
    Err(CityError::NoValidFriend { city, attempts: MAX_FRIEND_ATTEMPTS })
}

/// Give every city in `store` a friend, in ascending id order.
pub fn assign_friends(store: &mut CityStore, rng: &mut SimRng) -> CityResult<()> {
    for i in 0..store.count {
        let city = CityId(i as u32);
        store.friend[i] = pick_friend(city, store.count, rng)?;
    }
    Ok(())
}
