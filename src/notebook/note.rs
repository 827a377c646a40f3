//! A single tagged note and its search predicate

use chrono::{Local, NaiveDateTime, Timelike};
use regex::Regex;
use std::fmt;

/// Identifier assigned by the owning notebook, starting at 1
pub type NoteId = u32;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const TIMESTAMP_FORMAT_MICROS: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// One memo with its tags and creation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id: NoteId,
    /// Note text
    pub memo: String,
    /// Tags in insertion order, duplicates allowed
    pub tags: Vec<String>,
    creation_date: NaiveDateTime,
}

impl Note {
    /// Create a note stamped with the current local time
    pub(crate) fn new(id: NoteId, memo: String, tags: Vec<String>) -> Self {
        Self::with_date(id, memo, tags, now())
    }

    /// Create a note with a known creation time (used when loading from disk)
    pub(crate) fn with_date(
        id: NoteId,
        memo: String,
        tags: Vec<String>,
        creation_date: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            memo,
            tags,
            creation_date,
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn creation_date(&self) -> NaiveDateTime {
        self.creation_date
    }

    /// Check whether this note matches a search query
    ///
    /// A note matches when `query` occurs anywhere in the memo, or when one
    /// of the note's tags occurs in `query` as a whole word: preceded by a
    /// non-word character or the start of the query, and followed by a
    /// non-word character or the end of it. `_` counts as a word character.
    /// Matching is case-sensitive.
    ///
    /// # Example
    /// ```
    /// use notebook_cli::Notebook;
    ///
    /// let mut book = Notebook::new();
    /// let note = book.create("Pack boxes", vec!["moving".to_string()]);
    /// assert!(note.matches("boxes"));
    /// assert!(note.matches("moving day"));
    /// assert!(!note.matches("moving_day"));
    /// ```
    pub fn matches(&self, query: &str) -> bool {
        self.memo.contains(query) || self.tags.iter().any(|tag| tag_in_query(tag, query))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] - {}: {}",
            format_timestamp(&self.creation_date),
            self.id,
            self.memo
        )?;
        if !self.tags.is_empty() {
            write!(f, "  (+{})", self.tags.join(", +"))?;
        }
        Ok(())
    }
}

/// Whole-word search for `tag` inside `query`
fn tag_in_query(tag: &str, query: &str) -> bool {
    let pattern = format!(r"(?:\W|^){}(?:\W|$)", regex::escape(tag));
    Regex::new(&pattern)
        .map(|re| re.is_match(query))
        .unwrap_or(false)
}

/// Current local time truncated to microseconds, the precision we persist
fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(now.nanosecond() / 1_000 * 1_000)
        .unwrap_or(now)
}

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS[.ffffff]`
///
/// The fractional part is omitted when it is zero.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    if ts.nanosecond() / 1_000 == 0 {
        ts.format(TIMESTAMP_FORMAT).to_string()
    } else {
        ts.format(TIMESTAMP_FORMAT_MICROS).to_string()
    }
}

/// Parse a timestamp produced by [`format_timestamp`]
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
}
