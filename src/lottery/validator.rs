//! Distribution policies for candidate tickets.
//!
//! A [`Strategy`] decides both how a candidate ticket is produced and
//! which distribution rules it must pass:
//!
//! - **RejectBased** (default): uniform sample, then test the
//!   consecutive-run and parity rules
//! - **Balanced**: build the ticket from the even and odd sub-pools so
//!   parity is split by construction; the run rule is optional
//! - **Unconstrained**: uniform sample, no distribution rules
//!
//! Uniqueness is handled separately by the generator.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::lottery::capacity;
use crate::lottery::catalog::GameConfig;
use crate::lottery::error::LotteryError;
use crate::lottery::sampler;
use crate::lottery::ticket::Ticket;

/// Longest allowed streak of consecutive pairs (`n`, `n + 1`).
///
/// Three pairs is four consecutive numbers; a fifth is rejected.
pub const MAX_CONSECUTIVE_PAIRS: usize = 3;

/// Minimum share of even numbers, and of odd numbers, on a ticket.
pub const MIN_PARITY_RATIO: f64 = 0.3;

/// Check the consecutive-run rule.
///
/// Walks the sorted ticket counting consecutive pairs; the counter resets
/// whenever a gap appears. Fails once the counter exceeds
/// [`MAX_CONSECUTIVE_PAIRS`].
pub fn passes_run_rule(ticket: &Ticket) -> bool {
    let mut consecutive = 0;
    for pair in ticket.numbers().windows(2) {
        if pair[1] == pair[0] + 1 {
            consecutive += 1;
            if consecutive > MAX_CONSECUTIVE_PAIRS {
                return false;
            }
        } else {
            consecutive = 0;
        }
    }
    true
}

/// Check the parity rule: both evens and odds make up at least
/// [`MIN_PARITY_RATIO`] of the ticket.
pub fn passes_parity_rule(ticket: &Ticket) -> bool {
    if ticket.is_empty() {
        return false;
    }
    let len = ticket.len() as f64;
    let evens = ticket.even_count();
    let odds = ticket.len() - evens;
    evens as f64 / len >= MIN_PARITY_RATIO && odds as f64 / len >= MIN_PARITY_RATIO
}

/// Build a ticket with `count / 2` even numbers and the remainder odd.
///
/// Evens and odds are each an arithmetic progression with step 2, so the
/// sub-pools are indexed without being collected. The caller must make
/// sure both are large enough, which [`capacity::balanced_capacity`]
/// being non-zero guarantees.
pub fn construct_balanced<R: Rng + ?Sized>(config: &GameConfig, count: usize, rng: &mut R) -> Ticket {
    let (even_pool, odd_pool) = capacity::parity_pool_sizes(config);
    let min = config.min_number;
    let (first_even, first_odd) = if min % 2 == 0 { (min, min + 1) } else { (min + 1, min) };

    let even_count = count / 2;
    let mut numbers = sampler::sample_progression(first_even, 2, even_pool, even_count, rng);
    numbers.extend(sampler::sample_progression(
        first_odd,
        2,
        odd_pool,
        count - even_count,
        rng,
    ));
    numbers.sort_unstable();
    Ticket::from_sorted_unchecked(numbers)
}

/// How candidate tickets are produced and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Sample uniformly and reject tickets failing the run or parity rule.
    #[default]
    RejectBased,
    /// Construct parity-balanced tickets; optionally apply the run rule.
    Balanced {
        /// Whether constructed tickets must also pass the run rule.
        check_runs: bool,
    },
    /// Sample uniformly with no distribution rules.
    Unconstrained,
}

impl Strategy {
    /// Produce one candidate ticket.
    pub fn candidate<R: Rng + ?Sized>(&self, config: &GameConfig, count: usize, rng: &mut R) -> Ticket {
        match self {
            Strategy::RejectBased | Strategy::Unconstrained => sampler::sample(config, count, rng),
            Strategy::Balanced { .. } => construct_balanced(config, count, rng),
        }
    }

    /// Check a candidate against this strategy's distribution rules.
    pub fn validate(&self, ticket: &Ticket) -> bool {
        match self {
            Strategy::RejectBased => passes_run_rule(ticket) && passes_parity_rule(ticket),
            Strategy::Balanced { check_runs } => !check_runs || passes_run_rule(ticket),
            Strategy::Unconstrained => true,
        }
    }

    /// Number of distinct tickets this strategy can ever produce.
    ///
    /// For `Balanced` this is the count of exactly-split tickets, which can
    /// be zero when one parity pool is too small.
    pub fn capacity(&self, config: &GameConfig, count: usize) -> BigUint {
        match self {
            Strategy::Balanced { .. } => capacity::balanced_capacity(config, count),
            _ => capacity::capacity(config, count),
        }
    }

    /// Short name, as accepted by [`Strategy::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::RejectBased => "reject",
            Strategy::Balanced { .. } => "balanced",
            Strategy::Unconstrained => "unconstrained",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Balanced { check_runs: false } => write!(f, "balanced (no run check)"),
            other => write!(f, "{}", other.name()),
        }
    }
}

impl FromStr for Strategy {
    type Err = LotteryError;

    /// Parse a strategy name. `"balanced"` enables the run check.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" | "reject-based" => Ok(Strategy::RejectBased),
            "balanced" => Ok(Strategy::Balanced { check_runs: true }),
            "unconstrained" | "random" => Ok(Strategy::Unconstrained),
            other => Err(LotteryError::Parse(format!("unknown strategy '{}'", other))),
        }
    }
}
