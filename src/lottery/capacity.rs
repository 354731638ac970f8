//! Exact counting of the distinct tickets a game allows.
//!
//! Capacities grow fast: C(100, 50) is about 1e29, well past `u64`, so
//! all arithmetic is done on [`BigUint`].

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::lottery::catalog::GameConfig;
use crate::lottery::error::{LotteryError, Result};

/// Binomial coefficient C(n, k), exact.
///
/// Uses the multiplicative formula; every intermediate division is exact
/// because `acc * (n - i) / (i + 1)` is itself C(n, i + 1).
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let k = k.min(n - k);
    let mut acc = BigUint::one();
    for i in 0..k {
        acc *= n - i;
        acc /= i + 1;
    }
    acc
}

/// Number of distinct tickets of `count` numbers drawn from the game's range.
pub fn capacity(config: &GameConfig, count: usize) -> BigUint {
    binomial(config.range_size(), count)
}

/// Number of distinct tickets with `count / 2` even and the rest odd numbers.
pub fn balanced_capacity(config: &GameConfig, count: usize) -> BigUint {
    let (evens, odds) = parity_pool_sizes(config);
    let even_count = count / 2;
    binomial(evens, even_count) * binomial(odds, count - even_count)
}

/// Sizes of the even and odd sub-pools of the game's range.
pub fn parity_pool_sizes(config: &GameConfig) -> (usize, usize) {
    let size = config.range_size();
    let evens = if config.min_number % 2 == 0 {
        (size + 1) / 2
    } else {
        size / 2
    };
    (evens, size - evens)
}

/// Fail with [`LotteryError::Capacity`] if more tickets are requested than exist.
pub fn check_feasible(capacity: &BigUint, requested: usize) -> Result<()> {
    if BigUint::from(requested) > *capacity {
        return Err(LotteryError::Capacity {
            requested,
            capacity: capacity.clone(),
        });
    }
    Ok(())
}
