//! Remove command

use super::confirm;
use crate::TsundokuError;
use crate::cli::RemoveArgs;
use crate::store::Library;

/// Remove a book from the list, with confirmation
///
/// # Errors
/// Returns `TsundokuError` if the id is unknown, reading the confirmation
/// fails, or the commit to the durable slot fails.
pub fn run_remove(
    library: &mut Library,
    args: &RemoveArgs,
    quiet: bool,
) -> Result<(), TsundokuError> {
    let Some(book) = library.get(args.id) else {
        return Err(TsundokuError::InvalidInput(format!(
            "No tracked book with id {}",
            args.id
        )));
    };
    let title = book.title.clone();

    if !confirm(
        &format!("Remove \"{title}\" from the list?"),
        args.yes || quiet,
    )? {
        if !quiet {
            println!("Kept \"{title}\".");
        }
        return Ok(());
    }

    library.delete(args.id)?;

    if !quiet {
        println!("Removed \"{title}\".");
    }

    Ok(())
}
