//! Library store for tsundoku
//!
//! The single source of truth for the tracked-books list. All mutations
//! go through this module, and every mutation commits the full list to
//! the durable slot as its last step, so the in-memory list and the slot
//! converge after every call.

pub mod error;
mod slot;

pub use error::StoreError;
pub use slot::Slot;

use std::path::Path;

use crate::{BookDescription, BookToRead};

/// The authoritative owner of the tracked-books list
///
/// Insertion order is display order. Consumers receive a read view via
/// [`books`](Library::books); every mutator takes `&mut self`, which
/// serializes mutations and makes each call a complete transition from
/// one list snapshot to the next.
///
/// Ids come from a strictly increasing counter owned by the store and
/// seeded at open time, so no two live entries ever share an id, even
/// across rapid successive adds.
pub struct Library {
    slot: Slot,
    books: Vec<BookToRead>,
    next_id: u64,
}

impl Library {
    /// Open the library, loading the list from the durable slot
    ///
    /// An absent record yields an empty list. An unparseable record is
    /// preserved under a backup key and also yields an empty list (see
    /// [`Slot::read`]). The id counter resumes above the highest id
    /// found in the loaded list.
    ///
    /// # Arguments
    /// * `path` - Path to the slot database directory
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the slot cannot be opened or read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let slot = Slot::open(path)?;
        let books = slot.read()?;
        let next_id = books.iter().map(|b| b.id).max().map_or(1, |id| id + 1);

        Ok(Self {
            slot,
            books,
            next_id,
        })
    }

    /// Read view of the tracked list, in insertion order
    #[must_use]
    pub fn books(&self) -> &[BookToRead] {
        &self.books
    }

    /// Number of tracked books
    #[must_use]
    pub fn count(&self) -> usize {
        self.books.len()
    }

    /// Look up a tracked book by id
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&BookToRead> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Adopt a catalog search result into the list
    ///
    /// Builds a `BookToRead` from the description with a fresh id and an
    /// empty memo, appends it at the end of the list, and commits. The
    /// thumbnail is not carried over; only title and authors survive
    /// adoption.
    ///
    /// # Returns
    /// The id assigned to the new entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if committing to the slot fails. The new
    /// entry is kept in memory even then.
    pub fn add(&mut self, description: &BookDescription) -> Result<u64, StoreError> {
        let id = self.next_id;
        self.next_id += 1;

        self.books.push(BookToRead {
            id,
            title: description.title.clone(),
            authors: description.authors.clone(),
            memo: String::new(),
        });

        self.commit()?;
        Ok(id)
    }

    /// Replace the memo of the entry with the matching id
    ///
    /// All other fields and the list order are preserved. A missing id is
    /// a no-op, but the list is still committed, keeping the slot and the
    /// in-memory state convergent after every mutating call.
    ///
    /// # Returns
    /// `true` if an entry matched the id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if committing to the slot fails.
    pub fn update_memo(&mut self, id: u64, memo: &str) -> Result<bool, StoreError> {
        let mut found = false;
        if let Some(book) = self.books.iter_mut().find(|b| b.id == id) {
            book.memo = memo.to_string();
            found = true;
        }

        self.commit()?;
        Ok(found)
    }

    /// Remove the entry with the matching id
    ///
    /// The relative order of the remaining entries is preserved. A
    /// missing id is a no-op, but the list is still committed.
    ///
    /// # Returns
    /// `true` if an entry was removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if committing to the slot fails.
    pub fn delete(&mut self, id: u64) -> Result<bool, StoreError> {
        let before = self.books.len();
        self.books.retain(|b| b.id != id);
        let removed = self.books.len() != before;

        self.commit()?;
        Ok(removed)
    }

    /// Commit the full list to the durable slot
    ///
    /// The list is serialized in full on every call, not append-only. On
    /// failure the in-memory list still reflects the mutation: the slot
    /// is a cache of the list, not the other way around, so momentary
    /// divergence is tolerated. The failure is logged and returned so
    /// callers can report it.
    fn commit(&self) -> Result<(), StoreError> {
        if let Err(err) = self.slot.write(&self.books) {
            tracing::warn!(
                error = %err,
                "failed to persist the reading list; the in-memory state is kept"
            );
            return Err(err);
        }

        tracing::debug!(count = self.books.len(), "reading list committed");
        Ok(())
    }
}
