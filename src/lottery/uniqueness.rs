//! Batch-local duplicate detection.

use rustc_hash::FxHashSet;

use crate::lottery::ticket::{Fingerprint, Ticket};

/// Fingerprints of the tickets accepted so far in one request.
///
/// Never shared between requests; dropped with the request.
#[derive(Debug, Default)]
pub struct UniquenessFilter {
    seen: FxHashSet<Fingerprint>,
}

impl UniquenessFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter with room for `capacity` fingerprints.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Check if the ticket has not been accepted yet.
    #[inline]
    pub fn is_new(&self, ticket: &Ticket) -> bool {
        !self.seen.contains(&ticket.fingerprint())
    }

    /// Record an accepted ticket. Returns `false` if it was already present.
    pub fn record(&mut self, ticket: &Ticket) -> bool {
        self.seen.insert(ticket.fingerprint())
    }

    /// Number of recorded fingerprints.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_duplicates() {
        let mut filter = UniquenessFilter::with_capacity(4);
        let a = Ticket::from_unsorted(vec![1, 2, 3]).unwrap();
        let b = Ticket::from_unsorted(vec![3, 2, 1]).unwrap();
        let c = Ticket::from_unsorted(vec![1, 2, 4]).unwrap();

        assert!(filter.is_new(&a));
        assert!(filter.record(&a));
        assert!(!filter.is_new(&b));
        assert!(!filter.record(&b));
        assert!(filter.is_new(&c));
        assert_eq!(filter.len(), 1);
    }
}
