//! Quasi-random selection from curated value pools.
//!
//! Challenge schedules need draws that *look* random to the player but still
//! guarantee category coverage, e.g. "every slope pool contributes at least
//! one challenge". Two mechanisms provide that:
//!
//! - [`take`] removes a uniformly random element from a pool, so repeated
//!   draws from one pool never repeat a value (sampling without replacement).
//! - [`CoverageToken`] tracks which pools have been visited across a bounded
//!   run of [`take_from_pools`] calls, so each pool is drawn from before any
//!   pool repeats — decoupling "which pool" from "which value".
//!
//! Pool exhaustion is a schedule-sizing bug, not a runtime condition: every
//! function panics rather than recovers.

use rand::Rng;

use crate::game_engine::models::Range;

/// Tracks which pools a bounded sequence of [`take_from_pools`] calls has
/// already drawn from.
///
/// One token is created per generation pass and threaded through the calls
/// that share a coverage requirement. While the token still has unvisited
/// pools, each tokened call draws from a uniformly chosen *unvisited* pool;
/// the token is consumed when every pool has been visited once.
#[derive(Debug, Clone)]
pub struct CoverageToken {
    unvisited: Vec<usize>,
}

impl CoverageToken {
    pub fn new(pool_count: usize) -> Self {
        CoverageToken { unvisited: (0..pool_count).collect() }
    }

    /// Number of pools not yet drawn from through this token.
    pub fn remaining(&self) -> usize {
        self.unvisited.len()
    }

    fn take_pool_index<R: Rng>(&mut self, rng: &mut R) -> usize {
        assert!(!self.unvisited.is_empty(), "coverage token exhausted");
        let i = rng.gen_range(0..self.unvisited.len());
        self.unvisited.remove(i)
    }
}

/// Materialise an inclusive integer range as an ordered pool, optionally
/// omitting zero (used to forbid zero/undefined slopes).
pub fn range_to_values(range: Range, exclude_zero: bool) -> Vec<i32> {
    (range.min..=range.max)
        .filter(|&v| !exclude_zero || v != 0)
        .collect()
}

/// Remove and return one uniformly random element from `pool`.
///
/// Panics if the pool is empty.
pub fn take<R: Rng, T>(rng: &mut R, pool: &mut Vec<T>) -> T {
    assert!(!pool.is_empty(), "pool exhausted");
    let index = rng.gen_range(0..pool.len());
    pool.remove(index)
}

/// Draw a unique value from one of several pools.
///
/// With a token, the pool is a uniformly chosen pool the token has not yet
/// visited; without one, the pool is chosen uniformly among all of them.
/// Either way the value is removed from its pool.
pub fn take_from_pools<R: Rng, T>(
    rng: &mut R,
    pools: &mut [Vec<T>],
    token: Option<&mut CoverageToken>,
) -> T {
    let index = match token {
        Some(token) => token.take_pool_index(rng),
        None => rng.gen_range(0..pools.len()),
    };
    take(rng, &mut pools[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn range_to_values_is_ordered_and_can_exclude_zero() {
        let range = Range::new(-2, 2);
        assert_eq!(range_to_values(range, false), vec![-2, -1, 0, 1, 2]);
        assert_eq!(range_to_values(range, true), vec![-2, -1, 1, 2]);
    }

    #[test]
    fn take_never_repeats_within_a_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = range_to_values(Range::new(1, 20), false);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..20 {
            assert!(seen.insert(take(&mut rng, &mut pool)));
        }
        assert!(pool.is_empty());
    }

    #[test]
    #[should_panic(expected = "pool exhausted")]
    fn exhausted_pool_panics() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut pool: Vec<i32> = vec![];
        take(&mut rng, &mut pool);
    }

    #[test]
    fn token_visits_every_pool_before_any_repeat() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            // tag values by pool: pool i holds values i*100..
            let mut pools: Vec<Vec<i32>> =
                (0..3).map(|i| (0..5).map(|v| i * 100 + v).collect()).collect();
            let mut token = CoverageToken::new(pools.len());
            let mut pools_seen = std::collections::HashSet::new();
            for _ in 0..3 {
                let value = take_from_pools(&mut rng, &mut pools, Some(&mut token));
                pools_seen.insert(value / 100);
            }
            assert_eq!(pools_seen.len(), 3, "a pool repeated before coverage (seed {seed})");
            assert_eq!(token.remaining(), 0);
        }
    }

    #[test]
    fn untokened_draw_still_removes_the_value() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pools = vec![vec![1, 2], vec![3, 4]];
        let before: usize = pools.iter().map(Vec::len).sum();
        let _ = take_from_pools(&mut rng, &mut pools, None);
        let after: usize = pools.iter().map(Vec::len).sum();
        assert_eq!(after, before - 1);
    }
}
