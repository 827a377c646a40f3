//! Notebook persistence
//!
//! Notes are written to a flat file through a [`NoteCodec`]. The default
//! codec is the tab-delimited line format; a JSON-lines codec can be
//! selected instead without touching [`Notebook`] logic.

pub mod json_lines;
pub mod tab;

use chrono::NaiveDateTime;
use log::info;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::notebook::{Note, NoteId, Notebook};

pub use json_lines::JsonLinesCodec;
pub use tab::TabCodec;

/// Errors raised while reading or writing the notes file
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed note on line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("invalid creation date on line {line}: {value:?}")]
    InvalidDate { line: usize, value: String },

    #[error("failed to encode note {id}: {source}")]
    Encode {
        id: NoteId,
        #[source]
        source: serde_json::Error,
    },
}

/// A note as stored on disk, without its runtime id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRecord {
    pub memo: String,
    pub tags: Vec<String>,
    pub creation_date: NaiveDateTime,
}

/// Serialization interface for the notes file
pub trait NoteCodec {
    /// Short format name used in logs
    fn name(&self) -> &'static str;

    /// Encode all notes into the full file contents
    fn encode(&self, notes: &[Note]) -> Result<String, StorageError>;

    /// Decode full file contents into records, in file order
    fn decode(&self, text: &str) -> Result<Vec<NoteRecord>, StorageError>;
}

/// On-disk format selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageFormat {
    /// `<memo>\t\t<tags>\t\t<date>` lines
    #[default]
    Tab,
    /// One JSON object per line
    JsonLines,
}

impl StorageFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tab" | "txt" | "text" => Some(Self::Tab),
            "json" | "jsonl" => Some(Self::JsonLines),
            _ => None,
        }
    }

    /// Codec implementing this format
    pub fn codec(self) -> Box<dyn NoteCodec> {
        match self {
            Self::Tab => Box::new(TabCodec),
            Self::JsonLines => Box::new(JsonLinesCodec),
        }
    }
}

/// Append every note stored in `path` to `notebook`
///
/// Loaded notes keep their recorded creation dates and receive fresh ids
/// from the notebook. Returns the number of notes added.
pub fn load(
    path: &Path,
    codec: &dyn NoteCodec,
    notebook: &mut Notebook,
) -> Result<usize, StorageError> {
    let text = fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let records = codec.decode(&text)?;
    let count = records.len();
    for record in records {
        notebook.restore(record.memo, record.tags, record.creation_date);
    }

    info!(
        "loaded {} note(s) from {} ({})",
        count,
        path.display(),
        codec.name()
    );
    Ok(count)
}

/// Overwrite `path` with every note in `notebook`
pub fn save(path: &Path, codec: &dyn NoteCodec, notebook: &Notebook) -> Result<(), StorageError> {
    let text = codec.encode(notebook.notes())?;
    fs::write(path, text).map_err(|source| StorageError::Io {
        path: path.display().to_string(),
        source,
    })?;

    info!(
        "saved {} note(s) to {} ({})",
        notebook.len(),
        path.display(),
        codec.name()
    );
    Ok(())
}

/// Load `path` only if it exists; returns `None` when there was no file
pub fn load_if_exists(
    path: &Path,
    codec: &dyn NoteCodec,
    notebook: &mut Notebook,
) -> Result<Option<usize>, StorageError> {
    if !path.is_file() {
        return Ok(None);
    }
    load(path, codec, notebook).map(Some)
}
