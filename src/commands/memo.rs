//! Memo editing command

use dialoguer::Input;

use super::prompt_error;
use crate::TsundokuError;
use crate::cli::MemoArgs;
use crate::store::Library;

/// Set the memo of a tracked book
///
/// With no text argument the current memo is offered for in-place editing.
///
/// # Errors
/// Returns `TsundokuError` if the id is unknown, the prompt fails, or the
/// commit to the durable slot fails.
pub fn run_memo(library: &mut Library, args: &MemoArgs, quiet: bool) -> Result<(), TsundokuError> {
    let Some(book) = library.get(args.id) else {
        return Err(TsundokuError::InvalidInput(format!(
            "No tracked book with id {}",
            args.id
        )));
    };

    let memo = match &args.text {
        Some(text) => text.clone(),
        None => Input::<String>::new()
            .with_prompt(format!("Memo for \"{}\"", book.title))
            .with_initial_text(book.memo.clone())
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?,
    };

    library.update_memo(args.id, &memo)?;

    if !quiet {
        println!("Updated memo for #{}.", args.id);
    }

    Ok(())
}
