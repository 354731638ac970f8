//! Termination policy for the generation loop.

/// Sampling attempts allowed per requested ticket.
pub const ATTEMPTS_PER_TICKET: usize = 10;

/// Fixed attempt ceiling for one request: `quantity * ATTEMPTS_PER_TICKET`.
///
/// This is the only termination control of the generator; there is no
/// wall-clock timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptBudget {
    limit: usize,
    used: usize,
}

impl AttemptBudget {
    /// Budget for a request of `quantity` tickets.
    pub fn for_quantity(quantity: usize) -> Self {
        Self {
            limit: quantity.saturating_mul(ATTEMPTS_PER_TICKET),
            used: 0,
        }
    }

    /// Consume one attempt. Returns `false` (and consumes nothing) once exhausted.
    #[inline]
    pub fn try_consume(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.used += 1;
        true
    }

    /// Check if no attempts remain.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.used >= self.limit
    }

    /// Attempts consumed so far.
    #[inline]
    pub fn used(&self) -> usize {
        self.used
    }

    /// Total attempts allowed.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }
}
