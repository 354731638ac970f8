//! Error type shared by every lottery operation.

use num_bigint::BigUint;

/// Errors that can occur while resolving games, generating or analyzing tickets.
///
/// Every variant is terminal: nothing in this crate retries on error beyond
/// the single bounded sampling loop of the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LotteryError {
    /// The game identifier is not registered in the catalog.
    UnknownGame(String),
    /// Requested numbers per ticket fall outside the game's bounds.
    Range {
        /// Game identifier.
        game: String,
        /// Requested ticket size.
        requested: usize,
        /// Smallest allowed ticket size.
        min: usize,
        /// Largest allowed ticket size.
        max: usize,
    },
    /// More tickets were requested than distinct tickets exist.
    Capacity {
        /// Number of tickets requested.
        requested: usize,
        /// Number of distinct tickets available.
        capacity: BigUint,
    },
    /// The attempt budget ran out before the batch was complete.
    GenerationExhausted {
        /// Number of tickets requested.
        requested: usize,
        /// Number of tickets accepted before the budget ran out.
        accepted: usize,
        /// Attempts consumed.
        attempts: usize,
    },
    /// A request asked for zero tickets.
    InvalidQuantity(usize),
    /// Analysis was requested on a batch with no tickets.
    EmptyBatch,
    /// A game configuration violates its invariants.
    InvalidConfig(String),
    /// Reading or writing a file failed.
    Io(String),
    /// JSON or ticket text could not be parsed.
    Parse(String),
}

impl std::fmt::Display for LotteryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LotteryError::UnknownGame(game) => write!(f, "Unknown game '{}'", game),
            LotteryError::Range {
                game,
                requested,
                min,
                max,
            } => write!(
                f,
                "Numbers per ticket for {} must be between {} and {}, got {}",
                game, min, max, requested
            ),
            LotteryError::Capacity {
                requested,
                capacity,
            } => write!(
                f,
                "Cannot generate {} unique tickets: only {} exist",
                requested, capacity
            ),
            LotteryError::GenerationExhausted {
                requested,
                accepted,
                attempts,
            } => write!(
                f,
                "Generated only {} of {} tickets after {} attempts",
                accepted, requested, attempts
            ),
            LotteryError::InvalidQuantity(quantity) => {
                write!(f, "Ticket quantity must be at least 1, got {}", quantity)
            }
            LotteryError::EmptyBatch => write!(f, "Cannot analyze an empty batch"),
            LotteryError::InvalidConfig(msg) => write!(f, "Invalid game config: {}", msg),
            LotteryError::Io(msg) => write!(f, "I/O error: {}", msg),
            LotteryError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for LotteryError {}

impl From<std::io::Error> for LotteryError {
    fn from(err: std::io::Error) -> Self {
        LotteryError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LotteryError {
    fn from(err: serde_json::Error) -> Self {
        LotteryError::Parse(err.to_string())
    }
}

/// Convenience alias used across the lottery module.
pub type Result<T> = std::result::Result<T, LotteryError>;
