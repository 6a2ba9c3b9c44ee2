//! Roster mutations
//!
//! Every operation either applies completely or leaves the roster
//! unchanged. Operations that have nothing to do return `false`
//! (or `Ok(false)`) instead of failing.

use super::state::{ConflictPolicy, Roster};
use super::status::Status;
use crate::error::{RosterError, RosterResult};

impl Roster {
    /// Move `name` from one column to another, prepending it to the target.
    ///
    /// No-op if `from == to` or `name` is not in `from`. If `name` is
    /// already in `to` it is only removed from `from`.
    pub fn move_name(&mut self, name: &str, from: Status, to: Status) -> bool {
        if from == to {
            return false;
        }
        let Some(pos) = self.list(from).iter().position(|n| n == name) else {
            return false;
        };

        let name = self.list_mut(from).remove(pos);
        let target = self.list_mut(to);
        if !target.contains(&name) {
            target.insert(0, name);
        }
        true
    }

    /// Add a new name to the head of "No Response".
    ///
    /// Blank input is ignored. Fails if the trimmed name is already
    /// anywhere on the board.
    pub fn add(&mut self, name: &str) -> RosterResult<bool> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }
        if self.contains(trimmed) {
            return Err(RosterError::DuplicateName {
                name: trimmed.to_string(),
            });
        }

        self.list_mut(Status::NoResponse)
            .insert(0, trimmed.to_string());
        Ok(true)
    }

    /// Rename `old` within `status`, keeping its position.
    ///
    /// A blank new name cancels the edit. Fails if the new name belongs to
    /// anyone other than `old`.
    pub fn rename(&mut self, old: &str, status: Status, new: &str) -> RosterResult<bool> {
        let trimmed = new.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }
        if trimmed != old && self.contains(trimmed) {
            return Err(RosterError::DuplicateName {
                name: trimmed.to_string(),
            });
        }

        match self.list_mut(status).iter_mut().find(|n| n.as_str() == old) {
            Some(slot) if slot.as_str() != trimmed => {
                *slot = trimmed.to_string();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Delete `name` from `status`. Confirmation is the caller's job.
    pub fn remove(&mut self, name: &str, status: Status) -> bool {
        let list = self.list_mut(status);
        let before = list.len();
        list.retain(|n| n != name);
        list.len() != before
    }

    /// Replace the whole board, resolving duplicates last-seen-wins
    pub fn replace_all(&mut self, roster: Roster) {
        self.replace_all_with(roster, ConflictPolicy::LastSeenWins);
    }

    /// Replace the whole board with an explicit duplicate policy
    pub fn replace_all_with(&mut self, roster: Roster, policy: ConflictPolicy) {
        *self = roster.normalized(policy);
    }

    /// Replace the board with the bundled example list
    pub fn reset(&mut self) {
        self.replace_all(Roster::example());
    }

    /// Empty every list
    pub fn clear(&mut self) {
        self.replace_all(Roster::new());
    }
}
