//! Request sequencing for in-flight lookups.
//!
//! Directory lookups fire while the user is still typing, so responses can
//! arrive out of order. A [`LookupSession`] hands out a ticket per request;
//! starting a new request invalidates every earlier ticket, and the caller
//! drops any response whose ticket is no longer current.

use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one lookup request within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Owns the request sequence for one pair of form fields.
#[derive(Debug, Default)]
pub struct LookupSession {
    current: AtomicU64,
}

impl LookupSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating all earlier tickets.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.current.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Whether a response for this ticket should still be applied.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.current.load(Ordering::Relaxed) == ticket.0
    }

    /// Invalidate all outstanding tickets without starting a request
    /// (e.g. the field was cleared).
    pub fn cancel_pending(&self) {
        self.current.fetch_add(1, Ordering::Relaxed);
    }
}
