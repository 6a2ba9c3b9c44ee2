//! Error types for roster, storage and CSV operations

use thiserror::Error;

/// Result type for roster mutations
pub type RosterResult<T> = Result<T, RosterError>;

/// Errors surfaced to the user when a mutation is rejected.
///
/// A rejected mutation leaves the roster untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("\"{name}\" is already on the board!")]
    DuplicateName { name: String },
}

/// Errors reading a durable slot.
///
/// The persistence adapter treats these as an absent slot; they are logged
/// and never reach the caller of [`crate::Board`].
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Malformed data in storage slot {key}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that abort a whole CSV import.
///
/// Individual bad rows are dropped during parsing and never produce one
/// of these.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to import CSV: file is not valid UTF-8 ({0})")]
    NotUtf8(#[from] std::str::Utf8Error),
}

/// Errors writing CSV text
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush CSV: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),
}
