//! Tab-delimited notes format
//!
//! One note per line:
//!
//! ```text
//! <memo>\t\t['tag1', 'tag2']\t\t<creation date>
//! ```
//!
//! The format has no escaping. A memo or tag containing a double tab, a
//! `, ` sequence or a single quote does not survive a save/load cycle.

use super::{NoteCodec, NoteRecord, StorageError};
use crate::notebook::{format_timestamp, parse_timestamp, Note};

const FIELD_SEPARATOR: &str = "\t\t";
const TAG_SEPARATOR: &str = ", ";

/// Codec for the tab-delimited line format
#[derive(Debug, Clone, Copy, Default)]
pub struct TabCodec;

impl NoteCodec for TabCodec {
    fn name(&self) -> &'static str {
        "tab"
    }

    fn encode(&self, notes: &[Note]) -> Result<String, StorageError> {
        let mut out = String::new();
        for note in notes {
            out.push_str(&note.memo);
            out.push_str(FIELD_SEPARATOR);
            out.push_str(&tags_repr(&note.tags));
            out.push_str(FIELD_SEPARATOR);
            out.push_str(&format_timestamp(&note.creation_date()));
            out.push('\n');
        }
        Ok(out)
    }

    fn decode(&self, text: &str) -> Result<Vec<NoteRecord>, StorageError> {
        text.lines()
            .enumerate()
            .map(|(idx, line)| decode_line(idx + 1, line))
            .collect()
    }
}

/// Render tags as a bracketed list of single-quoted strings
fn tags_repr(tags: &[String]) -> String {
    let quoted: Vec<String> = tags.iter().map(|t| format!("'{}'", t)).collect();
    format!("[{}]", quoted.join(TAG_SEPARATOR))
}

fn parse_tags(line: usize, field: &str) -> Result<Vec<String>, StorageError> {
    let inner = field
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| StorageError::MalformedLine {
            line,
            reason: format!("tag list is not bracketed: {:?}", field),
        })?;

    let unquoted = inner.replace('\'', "");
    if unquoted.is_empty() {
        return Ok(Vec::new());
    }
    Ok(unquoted.split(TAG_SEPARATOR).map(str::to_string).collect())
}

fn decode_line(line: usize, text: &str) -> Result<NoteRecord, StorageError> {
    let mut fields = text.split(FIELD_SEPARATOR);
    let (Some(memo), Some(tags), Some(date)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(StorageError::MalformedLine {
            line,
            reason: "expected three tab-separated fields".to_string(),
        });
    };

    let creation_date = parse_timestamp(date).map_err(|_| StorageError::InvalidDate {
        line,
        value: date.to_string(),
    })?;

    Ok(NoteRecord {
        memo: memo.to_string(),
        tags: parse_tags(line, tags)?,
        creation_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notebook::Notebook;

    fn date(s: &str) -> chrono::NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    #[test]
    fn test_encode_exact_bytes() {
        let mut book = Notebook::new();
        book.restore(
            "Call mom",
            vec!["family".to_string(), "phone".to_string()],
            date("2024-05-01 09:30:00.123456"),
        );
        book.restore("Pay rent", Vec::new(), date("2024-05-02 10:00:00"));

        let text = TabCodec.encode(book.notes()).unwrap();
        assert_eq!(
            text,
            "Call mom\t\t['family', 'phone']\t\t2024-05-01 09:30:00.123456\n\
             Pay rent\t\t[]\t\t2024-05-02 10:00:00\n"
        );
    }

    #[test]
    fn test_decode_lines() {
        let text = "Call mom\t\t['family']\t\t2024-05-01 09:30:00.123456\n\
                    Pay rent\t\t[]\t\t2024-05-02 10:00:00\n";
        let records = TabCodec.decode(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].memo, "Call mom");
        assert_eq!(records[0].tags, vec!["family".to_string()]);
        assert_eq!(records[0].creation_date, date("2024-05-01 09:30:00.123456"));
        assert_eq!(records[1].memo, "Pay rent");
        assert!(records[1].tags.is_empty());
    }

    #[test]
    fn test_decode_keeps_whitespace_in_tags() {
        let records = TabCodec
            .decode("m\t\t['a', ' b']\t\t2024-01-01 00:00:00\n")
            .unwrap();
        assert_eq!(records[0].tags, vec!["a".to_string(), " b".to_string()]);
    }

    #[test]
    fn test_decode_last_line_without_newline() {
        let records = TabCodec.decode("m\t\t[]\t\t2024-01-01 00:00:00").unwrap();
        assert_eq!(records[0].creation_date, date("2024-01-01 00:00:00"));
    }

    #[test]
    fn test_decode_empty_file() {
        assert!(TabCodec.decode("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_reports_line_number() {
        let text = "ok\t\t[]\t\t2024-01-01 00:00:00\nbroken line\n";
        let err = TabCodec.decode(text).unwrap_err();
        assert!(matches!(err, StorageError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_decode_invalid_date() {
        let err = TabCodec.decode("m\t\t[]\t\tlast tuesday\n").unwrap_err();
        assert!(matches!(err, StorageError::InvalidDate { line: 1, .. }));
    }

    #[test]
    fn test_decode_unbracketed_tags() {
        let err = TabCodec
            .decode("m\t\tfamily\t\t2024-01-01 00:00:00\n")
            .unwrap_err();
        assert!(matches!(err, StorageError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_reserved_sequences_are_lossy() {
        // A tag containing the list separator splits in two on reload
        let mut book = Notebook::new();
        book.restore("m", vec!["a, b".to_string()], date("2024-01-01 00:00:00"));
        let text = TabCodec.encode(book.notes()).unwrap();
        let records = TabCodec.decode(&text).unwrap();
        assert_eq!(records[0].tags, vec!["a".to_string(), "b".to_string()]);
    }
}
