//! Modify command - Update or delete a note by id

use anyhow::Result;
use notebook_cli::config::Config;
use notebook_cli::notebook::{ModifyOutcome, NoteChange, NoteId};
use owo_colors::OwoColorize;

use super::utils;

/// Options for the modify command
#[derive(Debug, Clone, Default)]
pub struct ModifyOptions {
    /// Replacement memo
    pub memo: Option<String>,
    /// Replacement tags, comma-separated
    pub tags: Option<String>,
    /// Delete the note instead of editing it
    pub delete: bool,
}

/// Execute the modify command and return a status line
///
/// An unknown id is reported in the returned text, not as an error. The
/// notes file is only rewritten when the note exists.
pub fn execute(config: &Config, id: NoteId, options: ModifyOptions) -> Result<String> {
    let (mut notebook, _) = utils::open_notebook(config)?;

    let change = if options.delete {
        NoteChange::delete()
    } else {
        NoteChange::default()
            .memo(options.memo.unwrap_or_default())
            .tags(options.tags.as_deref().map(utils::parse_tags).unwrap_or_default())
    };

    let outcome = notebook.modify(id, change);
    if outcome.is_found() {
        utils::save_notebook(config, &notebook)?;
    }

    Ok(match outcome {
        ModifyOutcome::Deleted => format!("{} note {}", "Deleted:".green(), id),
        ModifyOutcome::Updated => match notebook.get(id) {
            Some(note) => format!("{} {}", "Updated:".green(), note),
            None => format!("{} note {}", "Updated:".green(), id),
        },
        ModifyOutcome::NotFound => format!("{} note {} does not exist", "Not found:".yellow(), id),
    })
}
