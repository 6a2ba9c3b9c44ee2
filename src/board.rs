//! Board: the roster plus its persistence
//!
//! This is the API the UI layer drives. Every mutation is applied to the
//! in-memory roster, auto-saved to the current-state slot, and returns the
//! updated roster for re-rendering.

use crate::config::{BoardConfig, InitialRoster};
use crate::csv_codec;
use crate::error::{ExportError, ImportError, RosterResult};
use crate::metrics::Metrics;
use crate::persistence::{Slots, StoragePort};
use crate::roster::{ConflictPolicy, Roster, Status};

/// A parsed CSV import waiting for the user to confirm.
///
/// Pass it to [`Board::commit_import`] to apply; drop it to cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an import is only applied by Board::commit_import"]
pub struct PendingImport {
    roster: Roster,
}

impl PendingImport {
    /// The roster that would replace the board
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Counts for the confirmation prompt
    pub fn metrics(&self) -> Metrics {
        Metrics::from_roster(&self.roster)
    }
}

/// An RSVP board bound to a storage backend
#[derive(Debug)]
pub struct Board<S: StoragePort> {
    roster: Roster,
    slots: Slots<S>,
    config: BoardConfig,
    has_snapshot: bool,
}

impl<S: StoragePort> Board<S> {
    /// Open a board, restoring the auto-saved roster if it is usable
    pub fn open(storage: S, config: BoardConfig) -> Self {
        let slots = Slots::new(storage, &config);
        let roster = match slots.load_current() {
            Some(roster) => {
                log::info!("Restored board ({} names)", roster.total());
                roster
            }
            None => {
                log::info!("No saved board, starting {}", config.initial.as_str());
                match config.initial {
                    InitialRoster::Empty => Roster::new(),
                    InitialRoster::Example => Roster::example(),
                }
            }
        };
        let has_snapshot = slots.has_snapshot();

        let mut board = Self {
            roster,
            slots,
            config,
            has_snapshot,
        };
        board.persist();
        board
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::from_roster(&self.roster)
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        self.slots.storage()
    }

    pub fn into_storage(self) -> S {
        self.slots.into_storage()
    }

    fn persist(&mut self) {
        self.slots.store_current(&self.roster);
    }

    /// Drag-and-drop: move `name` between columns
    pub fn move_name(&mut self, name: &str, from: Status, to: Status) -> &Roster {
        if self.roster.move_name(name, from, to) {
            log::debug!("Moved {:?} {} -> {}", name, from, to);
            self.persist();
        }
        &self.roster
    }

    /// Add a name to "No Response"
    pub fn add(&mut self, name: &str) -> RosterResult<&Roster> {
        match self.roster.add(name) {
            Ok(true) => {
                log::debug!("Added {:?}", name.trim());
                self.persist();
            }
            Ok(false) => {}
            Err(e) => {
                log::warn!("Add rejected: {}", e);
                return Err(e);
            }
        }
        Ok(&self.roster)
    }

    /// Edit a name in place
    pub fn rename(&mut self, old: &str, status: Status, new: &str) -> RosterResult<&Roster> {
        match self.roster.rename(old, status, new) {
            Ok(true) => {
                log::debug!("Renamed {:?} -> {:?}", old, new.trim());
                self.persist();
            }
            Ok(false) => {}
            Err(e) => {
                log::warn!("Rename rejected: {}", e);
                return Err(e);
            }
        }
        Ok(&self.roster)
    }

    /// Delete a name (already confirmed by the caller)
    pub fn remove(&mut self, name: &str, status: Status) -> &Roster {
        if self.roster.remove(name, status) {
            log::debug!("Removed {:?} from {}", name, status);
            self.persist();
        }
        &self.roster
    }

    /// Replace the whole board, duplicates resolved last-seen-wins
    pub fn replace_all(&mut self, roster: Roster) -> &Roster {
        self.replace_all_with(roster, ConflictPolicy::LastSeenWins)
    }

    pub fn replace_all_with(&mut self, roster: Roster, policy: ConflictPolicy) -> &Roster {
        self.roster.replace_all_with(roster, policy);
        self.persist();
        &self.roster
    }

    /// Back to the bundled example list
    pub fn reset(&mut self) -> &Roster {
        self.roster.reset();
        log::info!("Board reset to example list");
        self.persist();
        &self.roster
    }

    /// Remove every name
    pub fn clear(&mut self) -> &Roster {
        self.roster.clear();
        log::info!("Board cleared");
        self.persist();
        &self.roster
    }

    /// Current board as CSV text
    pub fn export_csv(&self) -> Result<String, ExportError> {
        csv_codec::export_csv(&self.roster)
    }

    /// Download file name for an ISO `YYYY-MM-DD` date
    pub fn export_file_name(&self, date: &str) -> String {
        self.config.export_file_name(date)
    }

    /// Parse an import without touching the board
    pub fn stage_import(&self, text: &str) -> Result<PendingImport, ImportError> {
        let roster = csv_codec::import_csv(text)?;
        Ok(PendingImport { roster })
    }

    /// Stage raw file contents; non-UTF-8 files are rejected whole
    pub fn stage_import_bytes(&self, bytes: &[u8]) -> Result<PendingImport, ImportError> {
        let roster = csv_codec::import_csv_bytes(bytes)?;
        Ok(PendingImport { roster })
    }

    /// Apply a confirmed import
    pub fn commit_import(&mut self, pending: PendingImport) -> &Roster {
        log::info!("Imported {} names from CSV", pending.roster.total());
        self.replace_all(pending.roster)
    }

    /// Parse and apply in one step
    pub fn import_csv(&mut self, text: &str) -> Result<&Roster, ImportError> {
        let pending = self.stage_import(text)?;
        Ok(self.commit_import(pending))
    }

    /// Overwrite the snapshot with the current board
    pub fn save_snapshot(&mut self) {
        self.slots.save_snapshot(&self.roster);
        self.has_snapshot = true;
    }

    /// Replace the board with the snapshot, or the example list if there
    /// is no usable snapshot
    pub fn load_snapshot(&mut self) -> &Roster {
        let roster = match self.slots.load_snapshot() {
            Some(roster) => {
                log::info!("Loaded saved board ({} names)", roster.total());
                roster
            }
            None => {
                log::info!("No saved board, loading example list");
                Roster::example()
            }
        };
        self.replace_all(roster)
    }

    pub fn has_snapshot(&self) -> bool {
        self.has_snapshot
    }
}
