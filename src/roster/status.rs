//! RSVP status columns

use serde::{Deserialize, Serialize};

/// One of the four board columns a name can sit in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Status {
    Yes,
    Maybe,
    No,
    #[serde(rename = "No Response")]
    NoResponse,
}

impl Status {
    /// All statuses in board (and export) order
    pub const ALL: [Status; 4] = [Status::Yes, Status::Maybe, Status::No, Status::NoResponse];

    /// Label used for storage keys, CSV cells and column titles
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Yes => "Yes",
            Status::Maybe => "Maybe",
            Status::No => "No",
            Status::NoResponse => "No Response",
        }
    }

    /// Parse an exact status label. Anything else is not a status.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Yes" => Some(Status::Yes),
            "Maybe" => Some(Status::Maybe),
            "No" => Some(Status::No),
            "No Response" => Some(Status::NoResponse),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
