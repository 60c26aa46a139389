//! Single-flight gate for interval polling.
//!
//! Each timer tick asks the gate for a ticket. While a request is in flight
//! the tick is skipped, and a response is accepted only when it carries the
//! ticket currently in flight. Responses can therefore never land out of
//! order or overwrite a newer snapshot.
//!
//! A request still outstanding after [`STALE_AFTER_TICKS`] skipped ticks is
//! abandoned and the next tick issues a fresh one, so a fetch that never
//! settles cannot freeze the poll.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

/// Skipped ticks after which an outstanding request is given up on.
pub const STALE_AFTER_TICKS: u32 = 10;

/// Identifies one issued poll request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollTicket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PollGate {
    issued: u64,
    in_flight: Option<u64>,
    /// Ticks skipped while the current request was outstanding.
    waited: u32,
}

impl PollGate {
    /// Issue a ticket for this tick, or `None` if a request is still outstanding.
    pub fn begin(&mut self) -> Option<PollTicket> {
        if self.in_flight.is_some() && self.waited < STALE_AFTER_TICKS {
            self.waited += 1;
            return None;
        }
        self.issued += 1;
        self.in_flight = Some(self.issued);
        self.waited = 0;
        Some(PollTicket(self.issued))
    }

    /// Settle a ticket. Returns `true` when the response should be applied.
    pub fn finish(&mut self, ticket: PollTicket) -> bool {
        if self.in_flight == Some(ticket.0) {
            self.in_flight = None;
            self.waited = 0;
            true
        } else {
            false
        }
    }

    /// Abandon the outstanding request; its response will be ignored.
    pub fn cancel(&mut self) {
        self.in_flight = None;
        self.waited = 0;
    }
}
