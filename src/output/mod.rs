//! Output formatting for CLI display
//!
//! This module provides utilities for formatting tracked books and
//! catalog search results for the terminal.

use colored::Colorize;

use crate::{BookDescription, BookToRead};

/// Format a tracked book for display
#[must_use]
pub fn book_row(book: &BookToRead, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", book.id, book.title);
    }

    let id = format!("#{}", book.id);
    let mut row = format!("  {} {}", id.dimmed(), book.title.bold());

    if !book.authors.is_empty() {
        row.push_str(&format!(" [{}]", book.authors));
    }
    if !book.memo.is_empty() {
        row.push_str(&format!("\n      {}", book.memo.yellow()));
    }

    row
}

/// Format a catalog search result with its display number (1-based)
#[must_use]
pub fn search_result_row(number: usize, description: &BookDescription, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", number, description.title);
    }

    let mut row = format!("  {} {}", format!("[{number}]").cyan(), description.title);

    if !description.authors.is_empty() {
        row.push_str(&format!(" [{}]", description.authors));
    }

    row
}

/// One-line label for the interactive result picker
#[must_use]
pub fn picker_label(description: &BookDescription) -> String {
    if description.authors.is_empty() {
        description.title.clone()
    } else {
        format!("{} [{}]", description.title, description.authors)
    }
}
