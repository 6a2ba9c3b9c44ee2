//! The two durable roster slots
//!
//! - current-state: rewritten after every mutation, read once at startup
//! - snapshot: written on explicit save, read on explicit load
//!
//! Malformed slot contents read as absent.

use super::storage::StoragePort;
use crate::config::BoardConfig;
use crate::error::StorageError;
use crate::roster::{ConflictPolicy, Roster};

/// Roster persistence over a [`StoragePort`]
#[derive(Debug)]
pub struct Slots<S: StoragePort> {
    storage: S,
    state_key: String,
    snapshot_key: String,
}

impl<S: StoragePort> Slots<S> {
    pub fn new(storage: S, config: &BoardConfig) -> Self {
        Self {
            storage,
            state_key: config.state_key.clone(),
            snapshot_key: config.snapshot_key.clone(),
        }
    }

    /// Parse a slot. `Ok(None)` if absent, `Err` if present but malformed.
    fn read(&self, key: &str) -> Result<Option<Roster>, StorageError> {
        let Some(json) = self.storage.get(key) else {
            return Ok(None);
        };
        serde_json::from_str::<Roster>(&json)
            .map(|roster| Some(roster.normalized(ConflictPolicy::LastSeenWins)))
            .map_err(|source| StorageError::Malformed {
                key: key.to_string(),
                source,
            })
    }

    /// Read a slot, logging and discarding malformed data
    fn read_or_absent(&self, key: &str) -> Option<Roster> {
        match self.read(key) {
            Ok(roster) => roster,
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }

    fn write(&mut self, key: &str, roster: &Roster) {
        match serde_json::to_string(roster) {
            Ok(json) => self.storage.set(key, &json),
            Err(e) => log::warn!("Failed to encode roster for {}: {}", key, e),
        }
    }

    /// Auto-saved board, if present and well-formed
    pub fn load_current(&self) -> Option<Roster> {
        self.read_or_absent(&self.state_key)
    }

    /// Auto-save the board
    pub fn store_current(&mut self, roster: &Roster) {
        let key = self.state_key.clone();
        self.write(&key, roster);
    }

    /// Overwrite the snapshot
    pub fn save_snapshot(&mut self, roster: &Roster) {
        let key = self.snapshot_key.clone();
        self.write(&key, roster);
        log::info!("Board state saved ({} names)", roster.total());
    }

    /// Saved snapshot, if present and well-formed
    pub fn load_snapshot(&self) -> Option<Roster> {
        self.read_or_absent(&self.snapshot_key)
    }

    /// Whether the snapshot slot holds anything
    pub fn has_snapshot(&self) -> bool {
        self.storage
            .get(&self.snapshot_key)
            .is_some_and(|s| !s.is_empty())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
