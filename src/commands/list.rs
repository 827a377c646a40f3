//! List command - Show every stored note

use anyhow::Result;
use notebook_cli::config::Config;

use super::utils;

/// Execute the list command and return formatted output
pub fn execute(config: &Config, table: bool) -> Result<String> {
    let (notebook, _) = utils::open_notebook(config)?;

    if notebook.is_empty() {
        return Ok("Notebook is empty.".to_string());
    }

    let mut output = if table {
        utils::notes_table(&notebook)
    } else {
        utils::format_notes(&notebook)
    };
    output.push_str(&format!("\n\n{} note(s)", notebook.len()));
    Ok(output)
}
