//! Catalog search and add command

use dialoguer::Select;

use super::prompt_error;
use crate::BookDescription;
use crate::TsundokuError;
use crate::catalog::{CatalogLookup, SearchOutcome, SearchSession};
use crate::cli::SearchArgs;
use crate::output;
use crate::store::Library;

/// Run one catalog search and optionally adopt a result into the list
///
/// The filters come from the CLI arguments. An explicit `--pick N` adds
/// that result directly; otherwise an interactive picker is offered
/// unless suppressed by `--no-add` or quiet mode.
///
/// # Errors
/// Returns `TsundokuError` on empty criteria, a failed lookup, an
/// out-of-range pick, a failed prompt, or a failed commit.
pub async fn run_search<C: CatalogLookup>(
    library: &mut Library,
    session: &mut SearchSession<C>,
    args: &SearchArgs,
    quiet: bool,
) -> Result<(), TsundokuError> {
    session.set_title_filter(args.title.clone().unwrap_or_default());
    session.set_author_filter(args.author.clone().unwrap_or_default());

    match session.trigger_search().await? {
        SearchOutcome::Completed => {}
        SearchOutcome::Failed => {
            return Err(TsundokuError::InvalidInput(
                "The catalog could not be reached; see the log for details".to_string(),
            ));
        }
        SearchOutcome::InFlight => return Ok(()),
    }

    if session.results().is_empty() {
        if !quiet {
            println!("No results.");
        }
        return Ok(());
    }

    for (index, description) in session.results().iter().enumerate() {
        println!("{}", output::search_result_row(index + 1, description, quiet));
    }

    let picked = match args.pick {
        Some(number) => {
            let description = number
                .checked_sub(1)
                .and_then(|index| session.select_result(index));
            let Some(description) = description else {
                return Err(TsundokuError::InvalidInput(format!(
                    "No result number {number} ({} results)",
                    session.results().len()
                )));
            };
            Some(description.clone())
        }
        None if args.no_add || quiet => None,
        None => pick_interactively(session)?,
    };

    if let Some(description) = picked {
        let id = library.add(&description)?;
        if !quiet {
            println!("Added \"{}\" as #{id}.", description.title);
        }
    }

    Ok(())
}

/// Offer the results in a selector; Esc skips adding
fn pick_interactively<C: CatalogLookup>(
    session: &SearchSession<C>,
) -> Result<Option<BookDescription>, TsundokuError> {
    let labels: Vec<String> = session.results().iter().map(output::picker_label).collect();

    let choice = Select::new()
        .with_prompt("Add a book to the list (Esc to skip)")
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(prompt_error)?;

    Ok(choice.and_then(|index| session.select_result(index).cloned()))
}
