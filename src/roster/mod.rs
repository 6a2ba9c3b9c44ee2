//! Roster model
//!
//! The canonical board state. Names are partitioned across the four status
//! columns: a name is in at most one column, at most once.
//! - `status`: the closed set of columns
//! - `state`: the [`Roster`] value and duplicate resolution
//! - `ops`: move/add/rename/remove/replace mutations

pub mod ops;
pub mod state;
pub mod status;

pub use state::{ConflictPolicy, Roster};
pub use status::Status;
