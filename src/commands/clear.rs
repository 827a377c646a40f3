//! Clear command - Delete every note

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

use notebook_cli::config::Config;

use super::utils;

/// Execute the clear command, asking for confirmation on stdin unless `yes`
pub fn execute(config: &Config, yes: bool) -> Result<()> {
    let stdin = io::stdin();
    let output = execute_with(config, yes, stdin.lock(), io::stdout())?;
    println!("{}", output);
    Ok(())
}

/// Clear the notebook, reading the confirmation from `input`
pub fn execute_with<R: BufRead, W: Write>(
    config: &Config,
    yes: bool,
    mut input: R,
    mut prompt_out: W,
) -> Result<String> {
    let (mut notebook, _) = utils::open_notebook(config)?;

    if notebook.is_empty() {
        return Ok("Notebook is already empty.".to_string());
    }

    if !yes {
        write!(
            prompt_out,
            "Delete all {} note(s)? This cannot be undone. (y/N) ",
            notebook.len()
        )?;
        prompt_out.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if utils::parse_yes_no(&answer) != Some(true) {
            return Ok("Aborted.".to_string());
        }
    }

    let count = notebook.len();
    notebook.clear();
    utils::save_notebook(config, &notebook)?;

    Ok(format!("{} {} note(s)", "Cleared:".green(), count))
}
