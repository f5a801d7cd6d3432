//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for tsundoku using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **list**: Show the reading list (default)
//! - **search**: Query the catalog and optionally add a result
//! - **memo**: Edit the memo of a tracked book
//! - **remove**: Delete a book from the list
//! - **config**: Inspect the configuration
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Command aliases (e.g. `ls` for `list`, `rm` for `remove`)
//! - Non-interactive adds via `search --pick N`

use clap::{Args, Parser, Subcommand};

/// Track the books you want to read
#[derive(Debug, Parser)]
#[command(name = "tsundoku", version, about)]
pub struct Cli {
    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run, defaulting to `list`
    #[must_use]
    pub fn get_command(self) -> Commands {
        self.command.unwrap_or(Commands::List)
    }
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the reading list (default command)
    #[command(visible_alias = "ls")]
    List,

    /// Search the catalog and optionally add a result to the list
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// Edit the memo of a tracked book
    #[command(visible_alias = "m")]
    Memo(MemoArgs),

    /// Remove a book from the list
    #[command(visible_alias = "rm")]
    Remove(RemoveArgs),

    /// Show or locate the configuration
    Config(ConfigCommand),
}

/// Arguments for the search command
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Match against book titles
    #[arg(short, long)]
    pub title: Option<String>,

    /// Match against author names
    #[arg(short, long)]
    pub author: Option<String>,

    /// Cap on the number of results (defaults to the configured value)
    #[arg(short, long)]
    pub max: Option<u32>,

    /// Add result number N without prompting (1-based)
    #[arg(short, long, value_name = "N")]
    pub pick: Option<usize>,

    /// Print results without offering to add one
    #[arg(long)]
    pub no_add: bool,
}

/// Arguments for the memo command
#[derive(Debug, Clone, Args)]
pub struct MemoArgs {
    /// Id of the tracked book
    pub id: u64,

    /// New memo text; prompts interactively when omitted
    pub text: Option<String>,
}

/// Arguments for the remove command
#[derive(Debug, Clone, Args)]
pub struct RemoveArgs {
    /// Id of the tracked book
    pub id: u64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Configuration operations
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub subcommand: ConfigSubcommand,
}

/// Configuration subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigSubcommand {
    /// Print the active configuration
    Show,
    /// Print the path of the configuration file
    Path,
}
