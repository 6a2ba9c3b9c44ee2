//! RSVP Board - drag-and-drop attendee tracker core
//!
//! Core modules:
//! - `roster`: The four status lists and their mutation rules
//! - `metrics`: Live per-column counts
//! - `persistence`: Auto-save and snapshot slots over a key-value port
//! - `csv_codec`: CSV export/import
//! - `board`: UI-facing API tying the above together
//! - `web`: wasm-bindgen bindings over LocalStorage

pub mod board;
pub mod config;
pub mod csv_codec;
pub mod error;
pub mod metrics;
pub mod persistence;
pub mod roster;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use board::{Board, PendingImport};
pub use config::{BoardConfig, InitialRoster};
pub use error::{ExportError, ImportError, RosterError, RosterResult, StorageError};
pub use metrics::Metrics;
pub use roster::{ConflictPolicy, Roster, Status};
