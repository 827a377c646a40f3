//! Interactive menu - the default command
//!
//! Displays numbered choices, reads one line per answer and dispatches to
//! the notebook. Input and output are generic so the loop can be driven
//! from any reader/writer.

use anyhow::Result;
use log::debug;
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};

use notebook_cli::config::Config;
use notebook_cli::notebook::{ModifyOutcome, NoteChange, NoteId, Notebook};

use super::utils;

/// Menu entries in display order; the key is the 1-based position
const CHOICES: [Choice; 7] = [
    Choice::ShowNotes,
    Choice::SearchNotes,
    Choice::AddNote,
    Choice::ModifyNote,
    Choice::Clear,
    Choice::Save,
    Choice::Quit,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    ShowNotes,
    SearchNotes,
    AddNote,
    ModifyNote,
    Clear,
    Save,
    Quit,
}

impl Choice {
    fn label(self) -> &'static str {
        match self {
            Self::ShowNotes => "Show Notes",
            Self::SearchNotes => "Search Notes",
            Self::AddNote => "Add Note",
            Self::ModifyNote => "Modify Note",
            Self::Clear => "Clear",
            Self::Save => "Save",
            Self::Quit => "Quit",
        }
    }

    fn from_input(input: &str) -> Option<Self> {
        let index: usize = input.trim().parse().ok()?;
        CHOICES.get(index.checked_sub(1)?).copied()
    }
}

/// Whether the loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive notebook session
pub struct Menu<R, W> {
    notebook: Notebook,
    config: Config,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(config: Config, input: R, output: W) -> Self {
        Self {
            notebook: Notebook::new(),
            config,
            input,
            output,
        }
    }

    /// Load saved notes if present, then serve choices until Quit or end of input
    pub fn run(&mut self) -> Result<()> {
        let (notebook, loaded) = utils::open_notebook(&self.config)?;
        self.notebook = notebook;
        if loaded.is_some() {
            writeln!(self.output, "Added saved notes.")?;
            self.show_notes()?;
        }

        loop {
            self.display_menu()?;
            let prompt = format!("Enter a valid option(1-{}): ", CHOICES.len());
            let Some(answer) = self.prompt(&prompt)? else {
                return self.quit();
            };

            let flow = match Choice::from_input(&answer) {
                Some(choice) => {
                    debug!("menu choice: {:?}", choice);
                    self.dispatch(choice)?
                }
                None => {
                    writeln!(self.output, "'{}' is invalid, try again...", answer)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// The notebook as currently held by the session
    #[allow(dead_code)]
    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    fn dispatch(&mut self, choice: Choice) -> Result<Flow> {
        match choice {
            Choice::ShowNotes => self.show_notes().map(|_| Flow::Continue),
            Choice::SearchNotes => self.search_notes(),
            Choice::AddNote => self.add_note(),
            Choice::ModifyNote => self.modify_note(),
            Choice::Clear => self.clear(),
            Choice::Save => self.save().map(|_| Flow::Continue),
            Choice::Quit => self.quit().map(|_| Flow::Quit),
        }
    }

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output, "Menu Choices:")?;
        for (i, choice) in CHOICES.iter().enumerate() {
            writeln!(self.output, "{}: {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    /// Print `text`, then read one line without its line ending
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Ask a yes/no question until the answer is understood
    fn confirm(&mut self, question: &str) -> Result<Option<bool>> {
        loop {
            let Some(answer) = self.prompt(question)? else {
                return Ok(None);
            };
            match utils::parse_yes_no(&answer) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(self.output, "Response unclear, try again...")?,
            }
        }
    }

    fn show_notes(&mut self) -> Result<()> {
        if self.notebook.is_empty() {
            writeln!(self.output, "Notebook is empty.")?;
            return Ok(());
        }
        writeln!(self.output, "{}", utils::format_notes(&self.notebook))?;
        Ok(())
    }

    fn search_notes(&mut self) -> Result<Flow> {
        let Some(query) = self.prompt("Search for (enter separated tags or memo fragment): ")?
        else {
            return self.quit().map(|_| Flow::Quit);
        };

        let found = self.notebook.search(&query);
        if found.is_empty() {
            writeln!(self.output, "Search didn't return anything.")?;
        } else {
            writeln!(self.output, "{}", utils::format_notes(found))?;
        }
        Ok(Flow::Continue)
    }

    fn add_note(&mut self) -> Result<Flow> {
        let Some(memo) = self.prompt("Enter a memo: ")? else {
            return self.quit().map(|_| Flow::Quit);
        };
        let Some(tags) = self.prompt("Enter comma-separated tags or press Enter to skip: ")?
        else {
            return self.quit().map(|_| Flow::Quit);
        };

        self.notebook.create(memo, utils::parse_tags(&tags));
        writeln!(self.output, "Your note has been added.")?;
        Ok(Flow::Continue)
    }

    fn modify_note(&mut self) -> Result<Flow> {
        let Some(raw_id) = self.prompt("Enter a note id: ")? else {
            return self.quit().map(|_| Flow::Quit);
        };
        let Ok(id) = raw_id.trim().parse::<NoteId>() else {
            writeln!(self.output, "{}", "Operation has failed.".red())?;
            return Ok(Flow::Continue);
        };

        let Some(delete) = self.confirm("Enter whether to delete a note(y/n): ")? else {
            return self.quit().map(|_| Flow::Quit);
        };
        if delete {
            match self.notebook.modify(id, NoteChange::delete()) {
                ModifyOutcome::NotFound => {
                    writeln!(self.output, "Note with this id doesn't exist.")?
                }
                _ => writeln!(self.output, "{}", "Operation successful.".green())?,
            }
            return Ok(Flow::Continue);
        }

        let Some(memo) = self.prompt("Enter a memo (press Enter to skip): ")? else {
            return self.quit().map(|_| Flow::Quit);
        };
        let Some(tags) = self.prompt("Enter tags (press Enter to skip): ")? else {
            return self.quit().map(|_| Flow::Quit);
        };

        let change = NoteChange::default()
            .memo(memo)
            .tags(utils::parse_tags(&tags));
        let requested = !change.memo.is_empty() || !change.tags.is_empty();

        match self.notebook.modify(id, change) {
            ModifyOutcome::Updated if requested => {
                writeln!(self.output, "{}", "Operation successful.".green())?
            }
            _ => writeln!(
                self.output,
                "Note with this id not found or not modified."
            )?,
        }
        Ok(Flow::Continue)
    }

    fn clear(&mut self) -> Result<Flow> {
        match self.confirm("Are you sure you want to clear all notes(y/n): ")? {
            Some(true) => {
                self.notebook.clear();
                writeln!(self.output, "All notes cleared.")?;
                Ok(Flow::Continue)
            }
            Some(false) => Ok(Flow::Continue),
            None => self.quit().map(|_| Flow::Quit),
        }
    }

    fn save(&mut self) -> Result<()> {
        utils::save_notebook(&self.config, &self.notebook)?;
        writeln!(
            self.output,
            "Notes saved in {}.",
            self.config.notes_file.display()
        )?;
        Ok(())
    }

    fn quit(&mut self) -> Result<()> {
        writeln!(self.output, "Thank you for using your notebook today.")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::tempdir;

    fn config_in(dir: &Path) -> Config {
        Config {
            notes_file: dir.join("notes.txt"),
            ..Config::default()
        }
    }

    /// Run a session with scripted input, returning the final notebook and transcript
    fn run_script(config: Config, script: &str) -> (Notebook, String) {
        let mut output = Vec::new();
        let mut menu = Menu::new(config, Cursor::new(script.as_bytes()), &mut output);
        menu.run().unwrap();
        let notebook = menu.notebook().clone();
        drop(menu);
        (notebook, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_choice_from_input() {
        assert_eq!(Choice::from_input("1"), Some(Choice::ShowNotes));
        assert_eq!(Choice::from_input(" 7 "), Some(Choice::Quit));
        assert_eq!(Choice::from_input("0"), None);
        assert_eq!(Choice::from_input("8"), None);
        assert_eq!(Choice::from_input("quit"), None);
    }

    #[test]
    fn test_menu_lists_choices_and_quits() {
        let dir = tempdir().unwrap();
        let (_, out) = run_script(config_in(dir.path()), "7\n");
        assert!(out.contains("Menu Choices:"));
        assert!(out.contains("1: Show Notes"));
        assert!(out.contains("4: Modify Note"));
        assert!(out.contains("7: Quit"));
        assert!(out.contains("Enter a valid option(1-7): "));
        assert!(out.contains("Thank you for using your notebook today."));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let dir = tempdir().unwrap();
        let (_, out) = run_script(config_in(dir.path()), "9\n7\n");
        assert!(out.contains("'9' is invalid, try again..."));
        assert_eq!(out.matches("Menu Choices:").count(), 2);
    }

    #[test]
    fn test_end_of_input_quits() {
        let dir = tempdir().unwrap();
        let (_, out) = run_script(config_in(dir.path()), "");
        assert!(out.contains("Thank you for using your notebook today."));
    }

    #[test]
    fn test_add_and_search() {
        let dir = tempdir().unwrap();
        let script = "3\nCall mom\nfamily, phone\n3\nPay rent\n\n2\nfamily\n2\nnothing here\n7\n";
        let (book, out) = run_script(config_in(dir.path()), script);

        assert_eq!(book.len(), 2);
        assert_eq!(book.get(1).unwrap().tags, vec!["family", "phone"]);
        assert!(book.get(2).unwrap().tags.is_empty());
        assert_eq!(out.matches("Your note has been added.").count(), 2);
        assert!(out.contains("- 1: Call mom  (+family, +phone)"));
        assert!(!out.contains("- 2: Pay rent"));
        assert!(out.contains("Search didn't return anything."));
    }

    #[test]
    fn test_modify_with_non_numeric_id_fails_softly() {
        let dir = tempdir().unwrap();
        let (_, out) = run_script(config_in(dir.path()), "4\nabc\n7\n");
        assert!(out.contains("Operation has failed."));
        assert!(out.contains("Thank you"));
    }

    #[test]
    fn test_modify_delete_flow() {
        let dir = tempdir().unwrap();
        let script = "3\nCall mom\nfamily\n4\n1\nmaybe\ny\n4\n1\nyes\n7\n";
        let (book, out) = run_script(config_in(dir.path()), script);

        assert!(book.is_empty());
        assert!(out.contains("Response unclear, try again..."));
        assert!(out.contains("Operation successful."));
        assert!(out.contains("Note with this id doesn't exist."));
    }

    #[test]
    fn test_modify_update_flow() {
        let dir = tempdir().unwrap();
        let script = "3\nold memo\n\n4\n1\nn\nnew memo\nwork\n4\n1\nn\n\n\n4\n5\nno\nx\n\n7\n";
        let (book, out) = run_script(config_in(dir.path()), script);

        let note = book.get(1).unwrap();
        assert_eq!(note.memo, "new memo");
        assert_eq!(note.tags, vec!["work"]);
        assert_eq!(out.matches("Operation successful.").count(), 1);
        assert_eq!(
            out.matches("Note with this id not found or not modified.")
                .count(),
            2
        );
    }

    #[test]
    fn test_clear_flow_resets_ids() {
        let dir = tempdir().unwrap();
        let script = "3\na\n\n3\nb\n\n5\nn\n5\ny\n3\nc\n\n7\n";
        let (book, out) = run_script(config_in(dir.path()), script);

        assert_eq!(book.len(), 1);
        assert_eq!(book.get(1).unwrap().memo, "c");
        assert_eq!(out.matches("All notes cleared.").count(), 1);
    }

    #[test]
    fn test_save_then_reload_in_new_session() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());

        let (_, out) = run_script(config.clone(), "3\nCall mom\nfamily\n6\n7\n");
        assert!(out.contains("Notes saved in"));
        let content = fs::read_to_string(&config.notes_file).unwrap();
        assert!(content.starts_with("Call mom\t\t['family']\t\t"));

        let (book, out) = run_script(config, "7\n");
        assert!(out.starts_with("Added saved notes.\n"));
        assert!(out.contains("- 1: Call mom  (+family)"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_unsaved_changes_are_not_written() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        run_script(config.clone(), "3\ndraft\n\n7\n");
        assert!(!config.notes_file.exists());
    }

    #[test]
    fn test_malformed_saved_file_is_fatal() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.notes_file, "garbage\n").unwrap();

        let mut output = Vec::new();
        let mut menu = Menu::new(config, Cursor::new(&b"7\n"[..]), &mut output);
        let err = menu.run().unwrap_err();
        assert!(format!("{:#}", err).contains("malformed note on line 1"));
    }
}
