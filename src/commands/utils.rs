//! Shared utilities for commands

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use notebook_cli::config::Config;
use notebook_cli::notebook::{format_timestamp, Note, Notebook};
use notebook_cli::storage;

/// Split comma-separated tag input, trimming each tag and dropping empties
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Interpret a yes/no answer; `None` when the answer is unclear
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" | "1" | "true" => Some(true),
        "n" | "no" | "0" | "false" => Some(false),
        _ => None,
    }
}

/// Load the configured notes file into a fresh notebook
///
/// Returns the notebook and how many notes were loaded (`None` if the file
/// does not exist yet).
pub fn open_notebook(config: &Config) -> Result<(Notebook, Option<usize>)> {
    let mut notebook = Notebook::new();
    let codec = config.codec();
    let loaded = storage::load_if_exists(&config.notes_file, codec.as_ref(), &mut notebook)
        .with_context(|| format!("Failed to load notes from {}", config.notes_file.display()))?;
    Ok((notebook, loaded))
}

/// Write the notebook to the configured notes file
pub fn save_notebook(config: &Config, notebook: &Notebook) -> Result<()> {
    let codec = config.codec();
    storage::save(&config.notes_file, codec.as_ref(), notebook)
        .with_context(|| format!("Failed to save notes to {}", config.notes_file.display()))
}

/// Render notes one per line
pub fn format_notes<'a>(notes: impl IntoIterator<Item = &'a Note>) -> String {
    notes
        .into_iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render notes as a table
pub fn notes_table<'a>(notes: impl IntoIterator<Item = &'a Note>) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("ID"),
        Cell::new("Created"),
        Cell::new("Memo"),
        Cell::new("Tags"),
    ]);

    for note in notes {
        let tags = if note.tags.is_empty() {
            "-".to_string()
        } else {
            note.tags.join(", ")
        };
        table.add_row(vec![
            Cell::new(note.id()),
            Cell::new(format_timestamp(&note.creation_date())),
            Cell::new(&note.memo),
            Cell::new(tags),
        ]);
    }

    table.to_string()
}
