//! Active-student roster shown on the admin dashboard.
//!
//! DESIGN
//! ======
//! Every accepted poll replaces the rows wholesale; there is no diffing.
//! Overlapping requests are prevented by the embedded [`PollGate`], so a
//! slow response can never overwrite a newer snapshot.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use std::time::Duration;

use roster::StudentRecord;

use crate::util::poll::{PollGate, PollTicket};

pub const ROSTER_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterState {
    pub rows: Vec<StudentRecord>,
    /// At least one snapshot has been applied.
    pub loaded: bool,
    gate: PollGate,
}

impl RosterState {
    /// Ticket for this tick's request, or `None` to skip the tick.
    pub fn begin_poll(&mut self) -> Option<PollTicket> {
        self.gate.begin()
    }

    /// Apply a poll result. Returns `true` if the rows were replaced.
    ///
    /// Failed or superseded results leave the table as it was.
    pub fn apply_snapshot(&mut self, ticket: PollTicket, result: Result<Vec<StudentRecord>, String>) -> bool {
        if !self.gate.finish(ticket) {
            return false;
        }
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.loaded = true;
                true
            }
            Err(_) => false,
        }
    }

    /// Drop the outstanding request, e.g. when the page unmounts.
    pub fn stop_polling(&mut self) {
        self.gate.cancel();
    }

    /// Table body cells, one row per record, in column order.
    pub fn table_rows(&self) -> Vec<[String; 4]> {
        self.rows.iter().map(StudentRecord::cells).collect()
    }
}
