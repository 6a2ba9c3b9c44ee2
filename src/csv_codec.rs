//! CSV export/import
//!
//! Export writes `Name,Status` followed by one row per name in board order,
//! joined with `\n` (no trailing newline). Fields containing a comma, quote
//! or line break are quoted with embedded quotes doubled.
//!
//! Import reads the same dialect with a full RFC-4180 reader, so quoted
//! names (commas, doubled quotes, line breaks) come back intact. The first
//! record is always discarded as the header. Rows with fewer than two
//! fields, an empty name, or an unknown status are dropped.

use csv::StringRecord;

use crate::error::{ExportError, ImportError};
use crate::roster::{ConflictPolicy, Roster, Status};

/// Header row written on export
pub const HEADER: [&str; 2] = ["Name", "Status"];

/// Serialize the board to CSV text
pub fn export_csv(roster: &Roster) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for (status, name) in roster.entries() {
        writer.write_record([name, status.as_str()])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

fn reader(text: &str, has_headers: bool) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes())
}

/// `(name, status)` if the record is an acceptable row
fn row(record: &StringRecord) -> Option<(&str, Status)> {
    match (record.get(0), record.get(1)) {
        (Some(name), Some(status)) if !name.is_empty() => {
            Status::from_label(status).map(|status| (name, status))
        }
        _ => None,
    }
}

/// An unterminated quote swallows the rest of the file into one field.
/// Recover the rows by parsing each swallowed line on its own.
fn swallowed_rows(record: &StringRecord) -> Vec<(String, Status)> {
    let Some(field) = record.get(0) else {
        return Vec::new();
    };
    if record.len() >= 2 || !field.contains('\n') {
        return Vec::new();
    }

    field
        .lines()
        .filter_map(|line| reader(line, false).records().next()?.ok())
        .filter_map(|record| row(&record).map(|(name, status)| (name.to_string(), status)))
        .collect()
}

/// Parse CSV text into a fresh roster (duplicates: last seen wins)
pub fn import_csv(text: &str) -> Result<Roster, ImportError> {
    let mut roster = Roster::new();
    let mut accepted = 0usize;
    let mut dropped = 0usize;

    for result in reader(text, true).records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                log::debug!("Dropping unreadable CSV row: {}", e);
                dropped += 1;
                continue;
            }
        };

        if let Some((name, status)) = row(&record) {
            roster.list_mut(status).push(name.to_string());
            accepted += 1;
            continue;
        }

        let recovered = swallowed_rows(&record);
        if recovered.is_empty() {
            log::debug!("Dropping CSV row {:?}", record);
            dropped += 1;
        } else {
            log::debug!("Recovered {} rows after an unterminated quote", recovered.len());
            accepted += recovered.len();
            for (name, status) in recovered {
                roster.list_mut(status).push(name);
            }
        }
    }

    log::debug!("CSV parsed: {} rows accepted, {} dropped", accepted, dropped);
    Ok(roster.normalized(ConflictPolicy::LastSeenWins))
}

/// Parse raw file bytes; non-UTF-8 content fails the whole import
pub fn import_csv_bytes(bytes: &[u8]) -> Result<Roster, ImportError> {
    import_csv(std::str::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_export_layout() {
        let roster = Roster::from_lists([
            (Status::NoResponse, vec!["Dee"]),
            (Status::Yes, vec!["Ann", "Bob"]),
            (Status::No, vec!["Cal"]),
        ]);
        assert_eq!(
            export_csv(&roster).unwrap(),
            "Name,Status\nAnn,Yes\nBob,Yes\nCal,No\nDee,No Response"
        );
    }

    #[test]
    fn test_export_empty_is_header_only() {
        assert_eq!(export_csv(&Roster::new()).unwrap(), "Name,Status");
    }

    #[test]
    fn test_export_quotes_only_when_needed() {
        let roster = Roster::from_lists([(
            Status::Maybe,
            vec!["Ann", "A,B", "Jo \"JJ\" Lee", "two\nlines", "x\ry"],
        )]);
        assert_eq!(
            export_csv(&roster).unwrap(),
            "Name,Status\n\
             Ann,Maybe\n\
             \"A,B\",Maybe\n\
             \"Jo \"\"JJ\"\" Lee\",Maybe\n\
             \"two\nlines\",Maybe\n\
             \"x\ry\",Maybe"
        );
    }

    #[test]
    fn test_import_recovers_rows_after_unterminated_quote() {
        let roster = import_csv("Name,Status\n\"Ann,Yes\nBob,No\nCal,Maybe").unwrap();
        assert_eq!(roster.list(Status::Yes), ["Ann"]);
        assert_eq!(roster.list(Status::No), ["Bob"]);
        assert_eq!(roster.list(Status::Maybe), ["Cal"]);
    }

    #[test]
    fn test_import_keeps_rows_before_unterminated_quote() {
        let roster = import_csv("Name,Status\nZed,Yes\n\"Ann\nBob,No").unwrap();
        assert_eq!(roster.list(Status::Yes), ["Zed"]);
        assert_eq!(roster.list(Status::No), ["Bob"]);
        assert!(!roster.contains("Ann"));
    }

    #[test]
    fn test_quoted_comma_round_trip() {
        let roster = Roster::from_lists([(Status::Yes, vec!["A,B"])]);
        let text = export_csv(&roster).unwrap();
        assert_eq!(text, "Name,Status\n\"A,B\",Yes");
        assert_eq!(import_csv(&text).unwrap(), roster);
    }

    #[test]
    fn test_import_drops_bad_rows() {
        let text = "Name,Status\n\
                    Ann,Yes\n\
                    Bob,Attending\n\
                    ,Maybe\n\
                    JustAName\n\
                    \n\
                    \"Cal\",\"No Response\"\n\
                    Dee , Maybe ,extra\n";
        let roster = import_csv(text).unwrap();
        assert_eq!(roster.list(Status::Yes), ["Ann"]);
        assert_eq!(roster.list(Status::Maybe), ["Dee"]);
        assert!(roster.list(Status::No).is_empty());
        assert_eq!(roster.list(Status::NoResponse), ["Cal"]);
    }

    #[test]
    fn test_import_always_skips_first_row() {
        let roster = import_csv("Ann,Yes\nBob,No").unwrap();
        assert!(!roster.contains("Ann"));
        assert_eq!(roster.list(Status::No), ["Bob"]);
    }

    #[test]
    fn test_import_duplicates_last_seen_wins() {
        let roster = import_csv("Name,Status\nAnn,Yes\nBob,No\nAnn,Maybe\nBob,No").unwrap();
        assert!(roster.list(Status::Yes).is_empty());
        assert_eq!(roster.list(Status::Maybe), ["Ann"]);
        assert_eq!(roster.list(Status::No), ["Bob"]);
    }

    #[test]
    fn test_import_crlf_and_empty() {
        let roster = import_csv("Name,Status\r\nAnn,Yes\r\n").unwrap();
        assert_eq!(roster.list(Status::Yes), ["Ann"]);
        assert!(import_csv("").unwrap().is_empty());
    }

    #[test]
    fn test_import_bytes_rejects_non_utf8() {
        assert!(matches!(
            import_csv_bytes(b"Name,Status\n\xff\xfe,Yes"),
            Err(ImportError::NotUtf8(_))
        ));
        assert_eq!(
            import_csv_bytes(b"Name,Status\nAnn,No").unwrap().list(Status::No),
            ["Ann"]
        );
    }

    #[test]
    fn test_example_round_trip() {
        let roster = Roster::example();
        assert_eq!(import_csv(&export_csv(&roster).unwrap()).unwrap(), roster);
    }

    fn roster_strategy() -> impl Strategy<Value = Roster> {
        let status = prop_oneof![
            Just(Status::Yes),
            Just(Status::Maybe),
            Just(Status::No),
            Just(Status::NoResponse),
        ];
        prop::collection::vec((status, "[A-Za-z][A-Za-z ,\"\n]{0,10}[A-Za-z]"), 0..25).prop_map(
            |pairs| {
                Roster::from_lists(pairs.into_iter().map(|(s, n)| (s, [n])))
                    .normalized(ConflictPolicy::LastSeenWins)
            },
        )
    }

    proptest! {
        #[test]
        fn prop_export_import_round_trip(roster in roster_strategy()) {
            let text = export_csv(&roster).unwrap();
            prop_assert_eq!(import_csv(&text).unwrap(), roster);
        }
    }
}
