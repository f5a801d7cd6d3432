//! Command handlers
//!
//! One handler per CLI command, wiring configuration, the library store,
//! the search session, and output together. Handlers validate user input
//! and report results; the state transitions themselves live in
//! [`store`](crate::store) and [`catalog`](crate::catalog).

pub mod memo;
pub mod remove;
pub mod search;

pub use memo::run_memo;
pub use remove::run_remove;
pub use search::run_search;

use std::io::{self, Write};

use crate::TsundokuError;
use crate::cli::{ConfigCommand, ConfigSubcommand};
use crate::config::TsundokuConfig;
use crate::output;
use crate::store::Library;

/// Show the reading list
pub fn run_list(library: &Library, quiet: bool) {
    if library.count() == 0 {
        if !quiet {
            println!("The reading list is empty. Add to it with `tsundoku search`.");
        }
        return;
    }

    for book in library.books() {
        println!("{}", output::book_row(book, quiet));
    }
}

/// Show or locate the configuration
///
/// # Errors
/// Returns `TsundokuError` if the configuration cannot be rendered or the
/// config path cannot be determined.
pub fn run_config(command: &ConfigCommand, config: &TsundokuConfig) -> Result<(), TsundokuError> {
    match command.subcommand {
        ConfigSubcommand::Show => {
            let toml_string = toml::to_string_pretty(config)
                .map_err(|e| TsundokuError::InvalidInput(format!("Cannot render config: {e}")))?;
            print!("{toml_string}");
        }
        ConfigSubcommand::Path => {
            println!("{}", TsundokuConfig::config_path()?.display());
        }
    }

    Ok(())
}

/// Prompt user for yes/no confirmation
///
/// # Arguments
/// * `prompt` - Question to ask the user
/// * `assume_yes` - If true, auto-confirms without prompting
fn confirm(prompt: &str, assume_yes: bool) -> Result<bool, TsundokuError> {
    if assume_yes {
        return Ok(true);
    }

    print!("{prompt} [y/n]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let response = input.trim().to_lowercase();

    Ok(matches!(response.as_str(), "y" | "yes"))
}

/// Map a dialoguer prompt error into the crate error type
fn prompt_error(err: dialoguer::Error) -> TsundokuError {
    TsundokuError::IoError(io::Error::other(err))
}
