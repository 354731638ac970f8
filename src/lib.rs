//! # Lotto Gen
//!
//! A constrained random-combination generator for number-draw lotteries.
//!
//! ## Features
//!
//! - **Unique Batches**: No ticket repeats within a generated batch
//! - **Distribution Rules**: Bounded consecutive runs and parity balance
//! - **Pluggable Strategies**: Reject-based, constructive balanced, unconstrained
//! - **Exact Feasibility**: Big-integer binomial capacity checks before sampling
//! - **Batch Analysis**: Frequency and parity statistics
//!
//! ## Quick Start
//!
//! ```ignore
//! use lotto_gen::lottery::{GameCatalog, GeneratorConfig, TicketGenerator, analyze};
//!
//! // 1. Load the game table
//! let catalog = GameCatalog::builtin();
//!
//! // 2. Create a generator (seeded from OS entropy)
//! let mut generator = TicketGenerator::new(&catalog, GeneratorConfig::default());
//!
//! // 3. Generate 5 Mega-Sena tickets of 6 numbers
//! let batch = generator.generate("megasena", 5, 6)?;
//!
//! // 4. Inspect
//! let stats = analyze(&batch)?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    TicketGenerator                        │
//! │  - Catalog lookup          - Capacity check               │
//! │  - Bounded attempt loop    - Batch-local uniqueness       │
//! └──────────────────────────────────────────────────────────┘
//!                               │
//!                               │ candidate / validate
//!                               ▼
//!         ┌─────────────────────┼─────────────────────┐
//!         ▼                     ▼                     ▼
//!   ┌─────────────┐      ┌────────────┐      ┌───────────────┐
//!   │ RejectBased │      │  Balanced  │      │ Unconstrained │
//!   └─────────────┘      └────────────┘      └───────────────┘
//! ```

#![warn(missing_docs)]

/// Ticket generation, validation and analysis.
pub mod lottery;

// Re-export commonly used types at crate root for convenience
pub use lottery::{
    analyze, GameCatalog, GameConfig, GeneratorConfig, LotteryError, Stats, Strategy, Ticket,
    TicketBatch, TicketGenerator,
};
