//! Runtime configuration: where notes live and how they are encoded

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::storage::{NoteCodec, StorageFormat};

/// Default notes file, relative to the working directory
pub const DEFAULT_NOTES_FILE: &str = "notes.txt";

/// Resolved settings shared by every command
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the notes file
    pub notes_file: PathBuf,
    /// Encoding used for the notes file
    pub format: StorageFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_file: PathBuf::from(DEFAULT_NOTES_FILE),
            format: StorageFormat::default(),
        }
    }
}

impl Config {
    /// Build a config from CLI/environment values
    pub fn resolve(notes_file: Option<PathBuf>, format: Option<&str>) -> Result<Self> {
        let format = match format {
            Some(name) => StorageFormat::from_str(name)
                .with_context(|| format!("Invalid format '{}'. Use 'tab' or 'json'", name))?,
            None => StorageFormat::default(),
        };

        Ok(Self {
            notes_file: notes_file.unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_FILE)),
            format,
        })
    }

    pub fn codec(&self) -> Box<dyn NoteCodec> {
        self.format.codec()
    }
}
