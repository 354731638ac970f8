//! Configuration options for the ticket generator.

use serde::{Deserialize, Serialize};

use crate::lottery::validator::Strategy;

/// Configuration for [`TicketGenerator`](crate::lottery::TicketGenerator).
///
/// # Example
/// ```
/// use lotto_gen::lottery::{GeneratorConfig, Strategy};
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.strategy, Strategy::RejectBased);
/// assert!(config.seed.is_none()); // OS entropy by default
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Strategy used when a request does not name one.
    pub strategy: Strategy,

    /// Random seed for reproducibility.
    ///
    /// Only meant for tests and benchmarks. If `None`, the generator is
    /// seeded from OS entropy so ticket sequences cannot be predicted.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Create a new GeneratorConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the default strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Counters from the most recent generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Attempts consumed from the budget.
    pub attempts: usize,

    /// Candidates accepted into the batch.
    pub accepted: usize,

    /// Candidates dropped because the batch already held them.
    pub duplicates: usize,

    /// Candidates dropped by the distribution rules.
    pub rejected: usize,
}

impl GenerationStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of attempts that produced an accepted ticket.
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.accepted as f64 / self.attempts as f64
        }
    }
}
