//! Constrained random ticket generation.
//!
//! Given a game's number range and a ticket size, this module produces
//! batches of distinct, sorted tickets that satisfy distribution rules
//! (bounded consecutive runs, parity balance), and reports statistics
//! over a finished batch.
//!
//! # Overview
//!
//! A generation request runs as a bounded generate-and-test loop:
//! 1. Resolve the game in the [`GameCatalog`] and check the ticket size
//! 2. Reject the request if more tickets are wanted than distinct ones exist
//! 3. Draw candidates with the chosen [`Strategy`], drop batch duplicates
//!    and candidates failing the rules, until the batch is full or
//!    `quantity * 10` attempts are spent
//!
//! # Strategies
//!
//! - **RejectBased** (default): uniform sample, reject runs of five or more
//!   consecutive numbers and tickets with under 30% evens or odds
//! - **Balanced**: split evens and odds by construction, run rule optional
//! - **Unconstrained**: uniform sample, uniqueness only
//!
//! # Example
//!
//! ```
//! use lotto_gen::lottery::{analyze, GameCatalog, GeneratorConfig, Strategy, TicketGenerator};
//!
//! let catalog = GameCatalog::builtin();
//! let mut generator = TicketGenerator::new(&catalog, GeneratorConfig::default());
//!
//! let batch = generator
//!     .generate_with("megasena", 5, 6, Strategy::Balanced { check_runs: true })
//!     .unwrap();
//! let stats = analyze(&batch).unwrap();
//! assert_eq!(stats.percent_even, 50.0);
//! ```
//!
//! The module does not persist anything and only guarantees uniqueness
//! within one batch.

pub mod analysis;
pub mod budget;
pub mod capacity;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod sampler;
pub mod ticket;
pub mod uniqueness;
pub mod validator;

// Re-export main types for convenient access
pub use analysis::{analyze, Stats};
pub use budget::{AttemptBudget, ATTEMPTS_PER_TICKET};
pub use capacity::{binomial, check_feasible};
pub use catalog::{GameCatalog, GameConfig};
pub use config::{GenerationStats, GeneratorConfig};
pub use error::LotteryError;
pub use generator::{
    generate_parallel, generate_parallel_with, GenerationRequest, GenerationState, TicketGenerator,
};
pub use output::{format_batch, format_stats, BatchReport};
pub use ticket::{Fingerprint, Ticket, TicketBatch};
pub use uniqueness::UniquenessFilter;
pub use validator::Strategy;
