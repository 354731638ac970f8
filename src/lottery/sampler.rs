//! Uniform sampling of tickets without replacement.
//!
//! The randomness source is always passed in by the caller; nothing here
//! touches a global generator.

use rand::seq::index;
use rand::Rng;

use crate::lottery::catalog::GameConfig;
use crate::lottery::ticket::Ticket;

/// Draw `count` distinct terms of `start, start + step, ...` (`length` terms),
/// in arbitrary order.
///
/// Only the drawn indices are materialized, so the cost depends on `count`
/// and not on `length`. The last term must fit in `u32`.
pub fn sample_progression<R: Rng + ?Sized>(
    start: u32,
    step: u32,
    length: usize,
    count: usize,
    rng: &mut R,
) -> Vec<u32> {
    debug_assert!(count <= length, "cannot draw more values than the pool holds");
    index::sample(rng, length, count)
        .into_iter()
        .map(|i| start + i as u32 * step)
        .collect()
}

/// Draw one uniformly random ticket of `count` numbers from the game's range.
pub fn sample<R: Rng + ?Sized>(config: &GameConfig, count: usize, rng: &mut R) -> Ticket {
    let mut numbers = sample_progression(config.min_number, 1, config.range_size(), count, rng);
    numbers.sort_unstable();
    Ticket::from_sorted_unchecked(numbers)
}
