//! Bounded generate-and-test loop producing a batch of unique tickets.
//!
//! A request moves through three states:
//!
//! ```text
//! Accumulating ──(batch full)──────────► Success
//!      │
//!      └──────(attempt budget spent)────► Exhausted
//! ```
//!
//! Before any sampling the request is checked against the catalog (game
//! and ticket size) and against the number of distinct tickets the chosen
//! strategy can produce. Exhaustion is reported as an error; partial
//! batches are discarded.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::lottery::budget::AttemptBudget;
use crate::lottery::capacity;
use crate::lottery::catalog::GameCatalog;
use crate::lottery::config::{GenerationStats, GeneratorConfig};
use crate::lottery::error::{LotteryError, Result};
use crate::lottery::ticket::TicketBatch;
use crate::lottery::uniqueness::UniquenessFilter;
use crate::lottery::validator::Strategy;

/// Where a generation request currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    /// Sampling candidates.
    Accumulating,
    /// The batch reached the requested size.
    Success,
    /// The attempt budget ran out first.
    Exhausted,
}

/// One generation request as handed over by an external caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Game identifier in the catalog.
    pub game_id: String,
    /// Number of tickets wanted.
    pub quantity: usize,
    /// Numbers per ticket.
    pub size: usize,
    /// Strategy to use for this request.
    #[serde(default)]
    pub strategy: Strategy,
}

impl GenerationRequest {
    /// Create a request using the default strategy.
    pub fn new(game_id: &str, quantity: usize, size: usize) -> Self {
        Self {
            game_id: game_id.to_string(),
            quantity,
            size,
            strategy: Strategy::default(),
        }
    }

    /// Builder method: set the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Ticket generator over a read-only game catalog.
///
/// Owns its randomness source; by default a `StdRng` seeded from OS
/// entropy. Any `Rng` can be injected with [`TicketGenerator::with_rng`].
///
/// # Example
/// ```
/// use lotto_gen::lottery::{GameCatalog, GeneratorConfig, TicketGenerator};
///
/// let catalog = GameCatalog::builtin();
/// let mut generator = TicketGenerator::new(&catalog, GeneratorConfig::default());
///
/// let batch = generator.generate("megasena", 5, 6).unwrap();
/// assert_eq!(batch.len(), 5);
/// assert_eq!(batch.formatted()[0].len(), 6);
/// ```
pub struct TicketGenerator<'c, R: Rng = StdRng> {
    catalog: &'c GameCatalog,
    config: GeneratorConfig,
    rng: R,
    state: GenerationState,
    stats: GenerationStats,
}

impl<'c> TicketGenerator<'c, StdRng> {
    /// Create a generator whose RNG follows `config.seed`.
    pub fn new(catalog: &'c GameCatalog, config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(catalog, config, rng)
    }
}

impl<'c, R: Rng> TicketGenerator<'c, R> {
    /// Create a generator with an explicit randomness source.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(catalog: &'c GameCatalog, config: GeneratorConfig, rng: R) -> Self {
        Self {
            catalog,
            config,
            rng,
            state: GenerationState::Accumulating,
            stats: GenerationStats::new(),
        }
    }

    /// Generate `quantity` unique tickets of `size` numbers with the
    /// configured default strategy.
    pub fn generate(&mut self, game_id: &str, quantity: usize, size: usize) -> Result<TicketBatch> {
        let strategy = self.config.strategy;
        self.generate_with(game_id, quantity, size, strategy)
    }

    /// Run a [`GenerationRequest`].
    pub fn run(&mut self, request: &GenerationRequest) -> Result<TicketBatch> {
        self.generate_with(&request.game_id, request.quantity, request.size, request.strategy)
    }

    /// Generate `quantity` unique tickets of `size` numbers with `strategy`.
    ///
    /// # Errors
    /// - `UnknownGame` if the game is not registered
    /// - `Range` if `size` is outside the game's bounds
    /// - `InvalidQuantity` if `quantity` is zero
    /// - `Capacity` if fewer than `quantity` distinct tickets exist
    /// - `GenerationExhausted` if `quantity * 10` attempts were not enough
    pub fn generate_with(
        &mut self,
        game_id: &str,
        quantity: usize,
        size: usize,
        strategy: Strategy,
    ) -> Result<TicketBatch> {
        self.state = GenerationState::Accumulating;
        self.stats = GenerationStats::new();

        let config = self.catalog.config_for(game_id)?;
        self.catalog.validate_count(game_id, size)?;
        if quantity == 0 {
            return Err(LotteryError::InvalidQuantity(quantity));
        }
        capacity::check_feasible(&strategy.capacity(config, size), quantity)?;

        let mut accepted = Vec::with_capacity(quantity);
        let mut filter = UniquenessFilter::with_capacity(quantity);
        let mut budget = AttemptBudget::for_quantity(quantity);

        while accepted.len() < quantity && budget.try_consume() {
            let candidate = strategy.candidate(config, size, &mut self.rng);

            if !filter.is_new(&candidate) {
                self.stats.duplicates += 1;
                continue;
            }
            if !strategy.validate(&candidate) {
                self.stats.rejected += 1;
                continue;
            }

            filter.record(&candidate);
            accepted.push(candidate);
        }

        self.stats.attempts = budget.used();
        self.stats.accepted = accepted.len();

        if accepted.len() < quantity {
            self.state = GenerationState::Exhausted;
            return Err(LotteryError::GenerationExhausted {
                requested: quantity,
                accepted: accepted.len(),
                attempts: budget.used(),
            });
        }

        self.state = GenerationState::Success;
        Ok(TicketBatch::new(accepted, config.digit_width()))
    }

    /// State reached by the most recent request.
    pub fn state(&self) -> GenerationState {
        self.state
    }

    /// Counters from the most recent request.
    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// The catalog this generator resolves games against.
    pub fn catalog(&self) -> &GameCatalog {
        self.catalog
    }
}

/// Run independent requests in parallel.
///
/// Each request gets its own entropy-seeded generator; only the read-only
/// catalog is shared. Results come back in request order.
pub fn generate_parallel(catalog: &GameCatalog, requests: &[GenerationRequest]) -> Vec<Result<TicketBatch>> {
    generate_parallel_with(catalog, requests, |_| {})
}

/// Like [`generate_parallel`], calling `on_done` as each request finishes.
///
/// `on_done` runs on worker threads, in completion order.
pub fn generate_parallel_with<F>(
    catalog: &GameCatalog,
    requests: &[GenerationRequest],
    on_done: F,
) -> Vec<Result<TicketBatch>>
where
    F: Fn(&Result<TicketBatch>) + Sync,
{
    requests
        .par_iter()
        .map(|request| {
            let config = GeneratorConfig::new().with_strategy(request.strategy);
            let result = TicketGenerator::new(catalog, config).run(request);
            on_done(&result);
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lottery::catalog::GameConfig;
    use crate::lottery::validator::{passes_parity_rule, passes_run_rule};
    use num_bigint::BigUint;
    use rustc_hash::FxHashSet;

    fn seeded(catalog: &GameCatalog, seed: u64) -> TicketGenerator<'_> {
        TicketGenerator::new(catalog, GeneratorConfig::default().with_seed(seed))
    }

    fn assert_well_formed(batch: &TicketBatch, config: &GameConfig, size: usize) {
        let mut fingerprints = FxHashSet::default();
        for ticket in batch.tickets() {
            assert_eq!(ticket.len(), size);
            assert!(ticket.numbers().windows(2).all(|w| w[0] < w[1]));
            assert!(ticket.numbers().iter().all(|&n| config.contains(n)));
            assert!(fingerprints.insert(ticket.fingerprint()), "duplicate ticket in batch");
        }
    }

    #[test]
    fn test_megasena_batch() {
        let catalog = GameCatalog::builtin();
        let mut generator = seeded(&catalog, 42);

        let batch = generator.generate("megasena", 5, 6).unwrap();
        assert_eq!(batch.len(), 5);
        assert_eq!(generator.state(), GenerationState::Success);
        assert_well_formed(&batch, catalog.config_for("megasena").unwrap(), 6);

        for row in batch.formatted() {
            assert_eq!(row.len(), 6);
            for cell in row {
                assert_eq!(cell.len(), 2);
                let n: u32 = cell.parse().unwrap();
                assert!((1..=60).contains(&n));
            }
        }
    }

    #[test]
    fn test_reject_based_tickets_pass_rules() {
        let catalog = GameCatalog::builtin();
        let mut generator = seeded(&catalog, 7);

        let batch = generator.generate("quina", 40, 5).unwrap();
        for ticket in batch.tickets() {
            assert!(passes_run_rule(ticket));
            assert!(passes_parity_rule(ticket));
            let evens = ticket.even_count() as f64 / 5.0;
            assert!(evens >= 0.3 && 1.0 - evens >= 0.3);
        }
    }

    #[test]
    fn test_lotofacil_batch() {
        let catalog = GameCatalog::builtin();
        let mut generator = seeded(&catalog, 3);

        let batch = generator.generate("lotofacil", 3, 15).unwrap();
        assert_eq!(batch.len(), 3);
        assert_well_formed(&batch, catalog.config_for("lotofacil").unwrap(), 15);
    }

    #[test]
    fn test_capacity_error_before_sampling() {
        let catalog = GameCatalog::new()
            .with_game("tiny", GameConfig::new(1, 5, 5, 5).unwrap())
            .unwrap();
        let mut generator = seeded(&catalog, 1);

        assert_eq!(
            generator.generate("tiny", 2, 5),
            Err(LotteryError::Capacity {
                requested: 2,
                capacity: BigUint::from(1u32),
            })
        );
        assert_eq!(generator.stats().attempts, 0);
    }

    #[test]
    fn test_range_error_before_sampling() {
        let catalog = GameCatalog::builtin();
        let mut generator = seeded(&catalog, 1);

        assert!(matches!(
            generator.generate("megasena", 5, 0),
            Err(LotteryError::Range { requested: 0, .. })
        ));
        assert!(matches!(
            generator.generate("megasena", 5, 16),
            Err(LotteryError::Range { requested: 16, .. })
        ));
        assert_eq!(generator.stats().attempts, 0);
    }

    #[test]
    fn test_unknown_game_and_zero_quantity() {
        let catalog = GameCatalog::builtin();
        let mut generator = seeded(&catalog, 1);

        assert_eq!(
            generator.generate("keno", 1, 6),
            Err(LotteryError::UnknownGame("keno".to_string()))
        );
        assert_eq!(
            generator.generate("megasena", 0, 6),
            Err(LotteryError::InvalidQuantity(0))
        );
    }

    #[test]
    fn test_exhaustion_when_every_candidate_fails() {
        // The only possible ticket is 1..=8, a run of eight.
        let catalog = GameCatalog::new()
            .with_game("run", GameConfig::new(1, 8, 8, 8).unwrap())
            .unwrap();
        let mut generator = seeded(&catalog, 5);

        assert_eq!(
            generator.generate("run", 1, 8),
            Err(LotteryError::GenerationExhausted {
                requested: 1,
                accepted: 0,
                attempts: 10,
            })
        );
        assert_eq!(generator.state(), GenerationState::Exhausted);
        assert_eq!(generator.stats().rejected, 10);

        // Without distribution rules the same request succeeds.
        let batch = generator
            .generate_with("run", 1, 8, Strategy::Unconstrained)
            .unwrap();
        assert_eq!(batch.tickets()[0].numbers(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(generator.stats().attempts, 1);
    }

    #[test]
    fn test_duplicates_consume_attempts() {
        // Every ticket of the range is requested, so repeats are frequent.
        let catalog = GameCatalog::new()
            .with_game("pair", GameConfig::new(1, 3, 2, 2).unwrap())
            .unwrap();
        let mut generator = seeded(&catalog, 11);

        let batch = generator
            .generate_with("pair", 3, 2, Strategy::Unconstrained)
            .unwrap();
        assert_eq!(batch.len(), 3);
        let stats = generator.stats();
        assert_eq!(stats.accepted, 3);
        assert_eq!(stats.attempts, stats.accepted + stats.duplicates);
        assert!(stats.attempts <= 30);
    }

    #[test]
    fn test_balanced_strategy_splits_parity() {
        let catalog = GameCatalog::builtin();
        let mut generator = seeded(&catalog, 21);

        let batch = generator
            .generate_with("megasena", 20, 6, Strategy::Balanced { check_runs: true })
            .unwrap();
        assert_eq!(batch.len(), 20);
        for ticket in batch.tickets() {
            assert_eq!(ticket.even_count(), 3);
            assert!(passes_run_rule(ticket));
        }
    }

    #[test]
    fn test_wide_range_game() {
        let wide = GameConfig::new(1, 4_000_000_000, 6, 6).unwrap();
        let catalog = GameCatalog::new().with_game("wide", wide).unwrap();
        let mut generator = seeded(&catalog, 17);

        for strategy in [Strategy::RejectBased, Strategy::Balanced { check_runs: true }] {
            let batch = generator.generate_with("wide", 50, 6, strategy).unwrap();
            assert_eq!(batch.len(), 50);
            assert_eq!(batch.width(), 10);
            for ticket in batch.tickets() {
                assert!(ticket.numbers().iter().all(|&n| (1..=4_000_000_000).contains(&n)));
            }
        }
    }

    #[test]
    fn test_balanced_infeasible_pool() {
        let catalog = GameCatalog::new()
            .with_game("narrow", GameConfig::new(2, 4, 3, 3).unwrap())
            .unwrap();
        let mut generator = seeded(&catalog, 2);

        assert!(matches!(
            generator.generate_with("narrow", 1, 3, Strategy::Balanced { check_runs: false }),
            Err(LotteryError::Capacity { requested: 1, .. })
        ));
        // Plain sampling still has one ticket available.
        assert!(generator
            .generate_with("narrow", 1, 3, Strategy::Unconstrained)
            .is_ok());
    }

    #[test]
    fn test_injected_rng_is_reproducible() {
        let catalog = GameCatalog::builtin();
        let config = GeneratorConfig::default();

        let mut a = TicketGenerator::with_rng(&catalog, config, StdRng::seed_from_u64(99));
        let mut b = TicketGenerator::with_rng(&catalog, config, StdRng::seed_from_u64(99));
        assert_eq!(
            a.generate("duplasena", 4, 6).unwrap(),
            b.generate("duplasena", 4, 6).unwrap()
        );
    }

    #[test]
    fn test_run_request() {
        let catalog = GameCatalog::builtin();
        let mut generator = seeded(&catalog, 8);
        let request = GenerationRequest::new("diadesorte", 2, 7)
            .with_strategy(Strategy::Balanced { check_runs: false });

        let batch = generator.run(&request).unwrap();
        assert_eq!(batch.len(), 2);
        assert!(batch.tickets().iter().all(|t| t.even_count() == 3));
    }

    #[test]
    fn test_generate_parallel() {
        let catalog = GameCatalog::builtin();
        let requests = vec![
            GenerationRequest::new("megasena", 5, 6),
            GenerationRequest::new("lotofacil", 3, 15),
            GenerationRequest::new("keno", 1, 6),
            GenerationRequest::new("quina", 4, 5).with_strategy(Strategy::Unconstrained),
        ];

        let results = generate_parallel(&catalog, &requests);
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap().len(), 5);
        assert_eq!(results[1].as_ref().unwrap().len(), 3);
        assert!(matches!(results[2], Err(LotteryError::UnknownGame(_))));
        assert_eq!(results[3].as_ref().unwrap().len(), 4);
    }

    #[test]
    fn test_generate_parallel_reports_each_request() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let catalog = GameCatalog::builtin();
        let requests = vec![GenerationRequest::new("timemania", 2, 10); 6];
        let done = AtomicUsize::new(0);

        let results = generate_parallel_with(&catalog, &requests, |_| {
            done.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(done.load(Ordering::Relaxed), 6);
        assert!(results.iter().all(|r| r.as_ref().map(|b| b.len() == 2).unwrap_or(false)));
    }
}
