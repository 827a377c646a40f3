//! Add command - Create a note and save the notebook

use anyhow::Result;
use notebook_cli::config::Config;
use owo_colors::OwoColorize;

use super::utils;

/// Execute the add command and return a status line
pub fn execute(config: &Config, memo: &str, tags: Option<&str>) -> Result<String> {
    let (mut notebook, _) = utils::open_notebook(config)?;

    let tags = tags.map(utils::parse_tags).unwrap_or_default();
    let note = notebook.create(memo, tags).to_string();
    utils::save_notebook(config, &notebook)?;

    Ok(format!("{} {}", "Added:".green(), note))
}
