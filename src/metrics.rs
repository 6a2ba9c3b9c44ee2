//! Live column counts
//!
//! Recomputed from the roster on every read; nothing is cached.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::roster::{Roster, Status};

/// Per-column counts plus board totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub yes: usize,
    pub maybe: usize,
    pub no: usize,
    pub no_response: usize,
    /// Sum of all list lengths
    pub total: usize,
    /// Distinct names across all lists (shown as "attendees")
    pub unique_count: usize,
}

impl Metrics {
    /// Project counts from a roster
    pub fn from_roster(roster: &Roster) -> Self {
        let count = |status| roster.list(status).len();
        let unique: HashSet<&str> = roster.entries().map(|(_, name)| name).collect();

        Self {
            yes: count(Status::Yes),
            maybe: count(Status::Maybe),
            no: count(Status::No),
            no_response: count(Status::NoResponse),
            total: roster.total(),
            unique_count: unique.len(),
        }
    }

    /// Count for a single column
    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Yes => self.yes,
            Status::Maybe => self.maybe,
            Status::No => self.no,
            Status::NoResponse => self.no_response,
        }
    }

    /// Total and unique count agree (no name is in two places)
    pub fn is_consistent(&self) -> bool {
        self.total == self.unique_count
    }
}
