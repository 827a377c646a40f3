//! JSON-lines notes format
//!
//! Each line holds one record: `{"memo": ..., "tags": [...], "creation_date": ...}`.
//! Unlike the tab format, any memo or tag text survives a round trip.

use serde::{Deserialize, Serialize};

use super::{NoteCodec, NoteRecord, StorageError};
use crate::notebook::{format_timestamp, parse_timestamp, Note};

/// Codec for the JSON-lines format
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLinesCodec;

#[derive(Debug, Serialize, Deserialize)]
struct JsonRecord {
    memo: String,
    #[serde(default)]
    tags: Vec<String>,
    creation_date: String,
}

impl NoteCodec for JsonLinesCodec {
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode(&self, notes: &[Note]) -> Result<String, StorageError> {
        let mut out = String::new();
        for note in notes {
            let record = JsonRecord {
                memo: note.memo.clone(),
                tags: note.tags.clone(),
                creation_date: format_timestamp(&note.creation_date()),
            };
            let line = serde_json::to_string(&record).map_err(|source| StorageError::Encode {
                id: note.id(),
                source,
            })?;
            out.push_str(&line);
            out.push('\n');
        }
        Ok(out)
    }

    fn decode(&self, text: &str) -> Result<Vec<NoteRecord>, StorageError> {
        let mut records = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let record: JsonRecord =
                serde_json::from_str(line).map_err(|e| StorageError::MalformedLine {
                    line: line_no,
                    reason: e.to_string(),
                })?;
            let creation_date =
                parse_timestamp(&record.creation_date).map_err(|_| StorageError::InvalidDate {
                    line: line_no,
                    value: record.creation_date.clone(),
                })?;

            records.push(NoteRecord {
                memo: record.memo,
                tags: record.tags,
                creation_date,
            });
        }
        Ok(records)
    }
}
