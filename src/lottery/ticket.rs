//! Ticket, fingerprint and batch types.
//!
//! - `Ticket`: sorted, duplicate-free numbers for one bet
//! - `Fingerprint`: canonical equality key of a ticket
//! - `TicketBatch`: the tickets produced by one generation request

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lottery::error::{LotteryError, Result};
use crate::lottery::uniqueness::UniquenessFilter;

/// One bet: distinct numbers in ascending order.
///
/// Deserializing checks the ordering, so a ticket read from JSON holds
/// the same invariant as a generated one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTicket")]
pub struct Ticket {
    numbers: Vec<u32>,
}

#[derive(Deserialize)]
struct RawTicket {
    numbers: Vec<u32>,
}

impl TryFrom<RawTicket> for Ticket {
    type Error = LotteryError;

    fn try_from(raw: RawTicket) -> Result<Self> {
        Ticket::from_ascending(raw.numbers)
    }
}

impl Ticket {
    /// Build a ticket from arbitrary-order numbers, sorting them.
    ///
    /// Returns `None` if any number repeats.
    pub fn from_unsorted(mut numbers: Vec<u32>) -> Option<Self> {
        numbers.sort_unstable();
        if numbers.windows(2).any(|w| w[0] == w[1]) {
            return None;
        }
        Some(Self { numbers })
    }

    /// Build a ticket from numbers that must already be strictly ascending.
    pub fn from_ascending(numbers: Vec<u32>) -> Result<Self> {
        if numbers.windows(2).any(|w| w[0] >= w[1]) {
            return Err(LotteryError::Parse(format!(
                "ticket numbers {:?} must be strictly ascending",
                numbers
            )));
        }
        Ok(Self { numbers })
    }

    /// Wrap numbers the caller has already sorted and deduplicated.
    #[inline]
    pub(crate) fn from_sorted_unchecked(numbers: Vec<u32>) -> Self {
        debug_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        Self { numbers }
    }

    /// The numbers, ascending.
    #[inline]
    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    /// Number of values on the ticket.
    #[inline]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Check if the ticket holds no numbers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Count of even numbers on the ticket.
    pub fn even_count(&self) -> usize {
        self.numbers.iter().filter(|&&n| n % 2 == 0).count()
    }

    /// Canonical equality key.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint(self.numbers.clone())
    }

    /// Render each number as a zero-padded decimal string of `width` digits.
    pub fn formatted(&self, width: usize) -> Vec<String> {
        self.numbers
            .iter()
            .map(|n| format!("{:0width$}", n, width = width))
            .collect()
    }
}

/// Equality key of a ticket: its sorted numbers.
///
/// Lives only as long as one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(Vec<u32>);

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

/// Tickets produced by one generation request.
///
/// No two tickets in a batch share a fingerprint, and all hold the same
/// number of values. Deserializing enforces both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBatch")]
pub struct TicketBatch {
    tickets: Vec<Ticket>,
    width: usize,
}

#[derive(Deserialize)]
struct RawBatch {
    tickets: Vec<Ticket>,
    width: usize,
}

impl TryFrom<RawBatch> for TicketBatch {
    type Error = LotteryError;

    fn try_from(raw: RawBatch) -> Result<Self> {
        TicketBatch::from_tickets(raw.tickets, raw.width)
    }
}

impl TicketBatch {
    /// Wrap accepted tickets; `width` is the zero-padding width for display.
    pub(crate) fn new(tickets: Vec<Ticket>, width: usize) -> Self {
        Self { tickets, width }
    }

    /// Build a batch from already-valid tickets.
    ///
    /// Fails with `Parse` if the tickets differ in length or one repeats.
    pub fn from_tickets(tickets: Vec<Ticket>, width: usize) -> Result<Self> {
        let mut filter = UniquenessFilter::with_capacity(tickets.len());
        let size = tickets.first().map_or(0, Ticket::len);

        for (i, ticket) in tickets.iter().enumerate() {
            if ticket.len() != size {
                return Err(LotteryError::Parse(format!(
                    "ticket {} has {} numbers, expected {}",
                    i + 1,
                    ticket.len(),
                    size
                )));
            }
            if !filter.record(ticket) {
                return Err(LotteryError::Parse(format!("ticket {} is a duplicate", i + 1)));
            }
        }

        Ok(Self { tickets, width })
    }

    /// Rebuild a batch from its zero-padded string form.
    ///
    /// Each ticket must parse and be strictly ascending; all tickets must
    /// have the same length and none may repeat. The padding width is
    /// taken from the widest entry.
    pub fn from_formatted(rows: &[Vec<String>]) -> Result<Self> {
        let mut tickets: Vec<Ticket> = Vec::with_capacity(rows.len());
        let mut width = 1;

        for (i, row) in rows.iter().enumerate() {
            let mut numbers = Vec::with_capacity(row.len());
            for cell in row {
                let value: u32 = cell.trim().parse().map_err(|_| {
                    LotteryError::Parse(format!("ticket {}: '{}' is not a number", i + 1, cell))
                })?;
                width = width.max(cell.trim().len());
                numbers.push(value);
            }
            let ticket = Ticket::from_ascending(numbers).map_err(|_| {
                LotteryError::Parse(format!("ticket {}: numbers must be strictly ascending", i + 1))
            })?;
            tickets.push(ticket);
        }

        Self::from_tickets(tickets, width)
    }

    /// Accepted tickets in generation order.
    #[inline]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Zero-padding width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of tickets.
    #[inline]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Check if the batch holds no tickets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// External representation: every ticket as zero-padded strings.
    pub fn formatted(&self) -> Vec<Vec<String>> {
        self.tickets.iter().map(|t| t.formatted(self.width)).collect()
    }
}
