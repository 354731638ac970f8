//! Aggregate statistics over a finished batch.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::lottery::error::{LotteryError, Result};
use crate::lottery::ticket::TicketBatch;

/// Frequency and parity statistics of a batch.
///
/// Percentages are taken over every number of every ticket, not per ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of tickets in the batch.
    pub total_tickets: usize,
    /// Numbers on the first ticket.
    pub ticket_size: usize,
    /// Occurrences of each drawn number; numbers never drawn are absent.
    pub frequency_by_number: BTreeMap<u32, usize>,
    /// Share of even numbers, 0-100.
    pub percent_even: f64,
    /// Share of odd numbers, 0-100.
    pub percent_odd: f64,
}

impl Stats {
    /// The `n` most frequent numbers, most frequent first; ties go to the smaller number.
    pub fn most_frequent(&self, n: usize) -> Vec<(u32, usize)> {
        let mut entries: Vec<(u32, usize)> = self
            .frequency_by_number
            .iter()
            .map(|(&number, &count)| (number, count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }
}

/// Compute [`Stats`] for a batch.
///
/// Pure: analyzing the same batch twice yields identical stats.
///
/// # Errors
/// `EmptyBatch` if the batch holds no tickets or no numbers.
pub fn analyze(batch: &TicketBatch) -> Result<Stats> {
    let first = batch.tickets().first().ok_or(LotteryError::EmptyBatch)?;

    let mut frequency_by_number = BTreeMap::new();
    let mut total = 0usize;
    let mut evens = 0usize;

    for &number in batch.tickets().iter().flat_map(|t| t.numbers()) {
        *frequency_by_number.entry(number).or_insert(0) += 1;
        total += 1;
        if number % 2 == 0 {
            evens += 1;
        }
    }

    if total == 0 {
        return Err(LotteryError::EmptyBatch);
    }

    let odds = total - evens;
    Ok(Stats {
        total_tickets: batch.len(),
        ticket_size: first.len(),
        frequency_by_number,
        percent_even: evens as f64 / total as f64 * 100.0,
        percent_odd: odds as f64 / total as f64 * 100.0,
    })
}
