//! Roster state: the four status lists and their merge policy
//!
//! Everything that is persisted (auto-save slot, snapshot slot) is a
//! serialized [`Roster`].

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Deserializer, Serialize};

use super::status::Status;

/// How to resolve a name that appears more than once when a whole roster
/// is replaced (snapshot load, CSV import, restored storage)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// The occurrence latest in iteration order (Yes, Maybe, No,
    /// No Response; then list order) is kept, earlier ones are dropped
    #[default]
    LastSeenWins,
    /// The first occurrence is kept, later ones are dropped
    FirstSeenWins,
}

/// Status → ordered list of names.
///
/// All four lists always exist. Once normalized, every name is trimmed,
/// non-empty, and present in exactly one list at most once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Roster {
    #[serde(rename = "Yes", default, deserialize_with = "nullable_list")]
    yes: Vec<String>,
    #[serde(rename = "Maybe", default, deserialize_with = "nullable_list")]
    maybe: Vec<String>,
    #[serde(rename = "No", default, deserialize_with = "nullable_list")]
    no: Vec<String>,
    #[serde(rename = "No Response", default, deserialize_with = "nullable_list")]
    no_response: Vec<String>,
}

/// A stored `null` list reads as empty
fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Roster {
    /// Board with every list empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundled example guest list (Mexican Independence cookout)
    pub fn example() -> Self {
        fn names(list: &[&str]) -> Vec<String> {
            list.iter().map(|n| n.to_string()).collect()
        }

        Self {
            yes: names(&[
                "Kasey", "Abby", "Joe", "Izzy", "Addi", "Dylan", "Paige", "Jonah", "Liv", "Sua",
                "Alyssa", "Emma", "Lexi", "Cate", "Kaylee", "Rayyan", "Henry", "Grace", "Ashley",
                "Annika", "Jenna", "Leah", "John", "Connor", "Marie", "Mary", "Brayde", "Taylor",
                "Julia",
            ]),
            maybe: names(&["Sloan", "Megan", "Keziah"]),
            no: names(&["Ruthie", "Lucy", "Tessa", "Maria", "Julia Mercer"]),
            no_response: names(&[
                "Ashlyn", "Bri", "Syd", "Maggie", "Ellen", "Ella", "Laurel", "Sarah", "Hana",
                "Anna", "Brett", "Ben", "Sriya", "Liron", "Cole", "Jessie",
            ]),
        }
    }

    /// Build a roster from `(status, names)` pairs without normalizing.
    /// Statuses not mentioned get an empty list.
    pub fn from_lists<I, N>(lists: I) -> Self
    where
        I: IntoIterator<Item = (Status, N)>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let mut roster = Self::new();
        for (status, names) in lists {
            roster
                .list_mut(status)
                .extend(names.into_iter().map(Into::into));
        }
        roster
    }

    /// Names in a status column, in display order
    pub fn list(&self, status: Status) -> &[String] {
        match status {
            Status::Yes => &self.yes,
            Status::Maybe => &self.maybe,
            Status::No => &self.no,
            Status::NoResponse => &self.no_response,
        }
    }

    pub(crate) fn list_mut(&mut self, status: Status) -> &mut Vec<String> {
        match status {
            Status::Yes => &mut self.yes,
            Status::Maybe => &mut self.maybe,
            Status::No => &mut self.no,
            Status::NoResponse => &mut self.no_response,
        }
    }

    /// Every `(status, name)` pair in export order
    pub fn entries(&self) -> impl Iterator<Item = (Status, &str)> + '_ {
        Status::ALL
            .into_iter()
            .flat_map(move |status| self.list(status).iter().map(move |n| (status, n.as_str())))
    }

    /// Which list holds `name` (exact match), if any
    pub fn status_of(&self, name: &str) -> Option<Status> {
        Status::ALL
            .into_iter()
            .find(|&status| self.list(status).iter().any(|n| n == name))
    }

    /// Whether `name` sits in any list
    pub fn contains(&self, name: &str) -> bool {
        self.status_of(name).is_some()
    }

    /// Sum of all list lengths
    pub fn total(&self) -> usize {
        Status::ALL.iter().map(|&s| self.list(s).len()).sum()
    }

    /// Check if every list is empty
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Enforce the roster invariants: names trimmed, empty names dropped,
    /// each name kept exactly once according to `policy`
    pub fn normalized(self, policy: ConflictPolicy) -> Self {
        let flat: Vec<(Status, String)> = Status::ALL
            .into_iter()
            .zip([self.yes, self.maybe, self.no, self.no_response])
            .flat_map(|(status, names)| names.into_iter().map(move |n| (status, n)))
            .filter_map(|(status, name)| {
                let trimmed = name.trim();
                (!trimmed.is_empty()).then(|| (status, trimmed.to_string()))
            })
            .collect();

        let keep: Vec<bool> = match policy {
            ConflictPolicy::LastSeenWins => {
                let last: HashMap<&str, usize> = flat
                    .iter()
                    .enumerate()
                    .map(|(i, (_, name))| (name.as_str(), i))
                    .collect();
                flat.iter()
                    .enumerate()
                    .map(|(i, (_, name))| last.get(name.as_str()) == Some(&i))
                    .collect()
            }
            ConflictPolicy::FirstSeenWins => {
                let mut seen = HashSet::new();
                flat.iter().map(|(_, name)| seen.insert(name.as_str())).collect()
            }
        };

        let dropped = keep.iter().filter(|k| !**k).count();
        if dropped > 0 {
            log::debug!("Dropped {} duplicate name(s) ({:?})", dropped, policy);
        }

        let mut roster = Self::new();
        for ((status, name), keep) in flat.into_iter().zip(keep) {
            if keep {
                roster.list_mut(status).push(name);
            }
        }
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_shape() {
        let roster = Roster::example();
        assert_eq!(roster.list(Status::Yes).len(), 29);
        assert_eq!(roster.list(Status::Maybe).len(), 3);
        assert_eq!(roster.list(Status::No).len(), 5);
        assert_eq!(roster.list(Status::NoResponse).len(), 16);
        assert_eq!(roster.clone().normalized(ConflictPolicy::LastSeenWins), roster);
    }

    #[test]
    fn test_json_shape_uses_labels() {
        let roster = Roster::from_lists([(Status::NoResponse, ["Bob"])]);
        let json = serde_json::to_string(&roster).unwrap();
        assert_eq!(json, r#"{"Yes":[],"Maybe":[],"No":[],"No Response":["Bob"]}"#);
    }

    #[test]
    fn test_missing_and_null_keys_default_to_empty() {
        let roster: Roster = serde_json::from_str(r#"{"Yes":["Ann"],"No":null}"#).unwrap();
        assert_eq!(roster.list(Status::Yes), ["Ann"]);
        assert!(roster.list(Status::Maybe).is_empty());
        assert!(roster.list(Status::No).is_empty());
        assert!(roster.list(Status::NoResponse).is_empty());
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        assert!(serde_json::from_str::<Roster>(r#"{"Yes":"Ann"}"#).is_err());
        assert!(serde_json::from_str::<Roster>("42").is_err());
    }

    #[test]
    fn test_empty_array_reads_as_empty_board() {
        let roster: Roster = serde_json::from_str("[]").unwrap();
        assert_eq!(roster, Roster::new());
    }

    #[test]
    fn test_normalize_last_seen_wins_across_lists() {
        let roster = Roster::from_lists([
            (Status::Yes, vec!["Ann", "Bob"]),
            (Status::No, vec!["Ann"]),
        ])
        .normalized(ConflictPolicy::LastSeenWins);
        assert_eq!(roster.list(Status::Yes), ["Bob"]);
        assert_eq!(roster.list(Status::No), ["Ann"]);
    }

    #[test]
    fn test_normalize_first_seen_wins_across_lists() {
        let roster = Roster::from_lists([
            (Status::Yes, vec!["Ann", "Bob"]),
            (Status::No, vec!["Ann"]),
        ])
        .normalized(ConflictPolicy::FirstSeenWins);
        assert_eq!(roster.list(Status::Yes), ["Ann", "Bob"]);
        assert!(roster.list(Status::No).is_empty());
    }

    #[test]
    fn test_normalize_within_one_list() {
        let roster = Roster::from_lists([(Status::Maybe, vec!["Ann", "Bob", "Ann"])])
            .normalized(ConflictPolicy::LastSeenWins);
        assert_eq!(roster.list(Status::Maybe), ["Bob", "Ann"]);
    }

    #[test]
    fn test_normalize_trims_and_drops_empty() {
        let roster = Roster::from_lists([(Status::Yes, vec!["  Ann ", "   ", "", "Ann"])])
            .normalized(ConflictPolicy::LastSeenWins);
        assert_eq!(roster.list(Status::Yes), ["Ann"]);
    }

    #[test]
    fn test_status_of() {
        let roster = Roster::example();
        assert_eq!(roster.status_of("Sloan"), Some(Status::Maybe));
        assert_eq!(roster.status_of("sloan"), None);
        assert!(roster.contains("Julia Mercer"));
    }

    #[test]
    fn test_entries_in_export_order() {
        let roster = Roster::from_lists([
            (Status::NoResponse, vec!["D"]),
            (Status::Yes, vec!["A", "B"]),
            (Status::No, vec!["C"]),
        ]);
        let entries: Vec<_> = roster.entries().collect();
        assert_eq!(
            entries,
            vec![
                (Status::Yes, "A"),
                (Status::Yes, "B"),
                (Status::No, "C"),
                (Status::NoResponse, "D"),
            ]
        );
    }
}
