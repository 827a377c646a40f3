//! Search command - Show notes matching a query

use anyhow::Result;
use notebook_cli::config::Config;

use super::utils;

/// Execute the search command and return formatted output
pub fn execute(config: &Config, query: &str, table: bool) -> Result<String> {
    let (notebook, _) = utils::open_notebook(config)?;
    let found = notebook.search(query);

    if found.is_empty() {
        return Ok("Search didn't return anything.".to_string());
    }

    let count = found.len();
    let mut output = if table {
        utils::notes_table(found)
    } else {
        utils::format_notes(found)
    };
    output.push_str(&format!("\n\n{} of {} note(s) matched", count, notebook.len()));
    Ok(output)
}
