//! Board configuration
//!
//! Storage keys, the starting roster for a fresh board, and export naming.

use serde::{Deserialize, Serialize};

/// What a board starts with when nothing usable is in storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InitialRoster {
    #[default]
    Empty,
    /// The bundled example guest list
    Example,
}

impl InitialRoster {
    pub fn as_str(&self) -> &'static str {
        match self {
            InitialRoster::Empty => "empty",
            InitialRoster::Example => "example",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "empty" => Some(InitialRoster::Empty),
            "example" => Some(InitialRoster::Example),
            _ => None,
        }
    }
}

/// Board settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Auto-save slot key
    pub state_key: String,
    /// Manual snapshot slot key
    pub snapshot_key: String,
    /// Starting roster when the auto-save slot is absent or malformed
    pub initial: InitialRoster,
    /// CSV download file name prefix
    pub export_prefix: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            state_key: "rsvp-board-state-v3".to_string(),
            snapshot_key: "rsvp-board-saved-snapshot".to_string(),
            initial: InitialRoster::Empty,
            export_prefix: "rsvp_board".to_string(),
        }
    }
}

impl BoardConfig {
    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// CSV download name for an ISO `YYYY-MM-DD` date
    pub fn export_file_name(&self, date: &str) -> String {
        format!("{}_{}.csv", self.export_prefix, date)
    }
}
