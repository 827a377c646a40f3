//! notebook: personal command-line notebook for short tagged notes
//!
//! Without a subcommand an interactive menu is started. The subcommands run
//! a single operation against the notes file and exit.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use notebook_cli::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "notebook")]
#[command(about = "Keep short tagged notes in a flat file", long_about = None)]
#[command(version)]
struct Cli {
    /// Notes file (default: notes.txt in the current directory)
    #[arg(long, short, global = true, env = "NOTEBOOK_FILE")]
    file: Option<PathBuf>,

    /// Storage format: tab or json (default: tab)
    #[arg(long, global = true, env = "NOTEBOOK_FORMAT")]
    format: Option<String>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// List all notes
    List {
        /// Render as a table
        #[arg(long, short)]
        table: bool,
    },

    /// Show notes whose memo contains the query or whose tags appear in it
    Search {
        /// Memo fragment or text containing tags
        query: String,

        /// Render as a table
        #[arg(long, short)]
        table: bool,
    },

    /// Add a note
    Add {
        /// Note text
        memo: String,

        /// Comma-separated tags
        #[arg(long, short)]
        tags: Option<String>,
    },

    /// Change or delete a note by id
    Modify {
        /// Note id as shown by list
        id: u32,

        /// Replacement memo
        #[arg(long, short)]
        memo: Option<String>,

        /// Replacement tags, comma-separated (replaces all existing tags)
        #[arg(long, short)]
        tags: Option<String>,

        /// Delete the note
        #[arg(short, long, conflicts_with_all = ["memo", "tags"])]
        delete: bool,
    },

    /// Delete every note
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::resolve(cli.file, cli.format.as_deref())?;
    log::debug!(
        "using {} ({:?} format)",
        config.notes_file.display(),
        config.format
    );

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let mut menu = commands::menu::Menu::new(config, stdin.lock(), io::stdout());
            menu.run()?;
        }

        Commands::List { table } => {
            println!("{}", commands::list::execute(&config, table)?);
        }

        Commands::Search { query, table } => {
            println!("{}", commands::search::execute(&config, &query, table)?);
        }

        Commands::Add { memo, tags } => {
            println!("{}", commands::add::execute(&config, &memo, tags.as_deref())?);
        }

        Commands::Modify {
            id,
            memo,
            tags,
            delete,
        } => {
            let options = commands::modify::ModifyOptions { memo, tags, delete };
            println!("{}", commands::modify::execute(&config, id, options)?);
        }

        Commands::Clear { yes } => {
            commands::clear::execute(&config, yes)?;
        }
    }

    Ok(())
}
