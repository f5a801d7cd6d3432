//! Durable slot for the reading list
//!
//! A single named record in an embedded sled database: the key is a
//! constant string and the value is the JSON-serialized array of tracked
//! books. The record is read whole at store initialization and rewritten
//! whole on every mutation; there is no incremental persistence.

use std::path::Path;

use sled::{Db, Tree};

use super::error::StoreError;
use crate::BookToRead;

/// Key of the record holding the serialized reading list
const SLOT_KEY: &str = "books";

/// Key an unparseable payload is moved to before the store starts empty
const BACKUP_KEY: &str = "books.corrupt";

/// Sled-backed single-record slot
///
/// The slot is written only by [`Library`](super::Library) and read only
/// at initialization.
pub struct Slot {
    db: Db,
    library: Tree,
}

impl Slot {
    /// Opens or creates the slot database at the specified path
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or if the
    /// internal tree cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let library = db.open_tree("library")?;
        Ok(Self { db, library })
    }

    /// Read the full list from the slot
    ///
    /// An absent record yields an empty list. A present but unparseable
    /// record is moved to a backup key and also yields an empty list, so
    /// a later commit cannot destroy the only copy of the previous data.
    /// The recovery is logged, never silent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the underlying database read fails.
    pub fn read(&self) -> Result<Vec<BookToRead>, StoreError> {
        let Some(value) = self.library.get(SLOT_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_slice(&value) {
            Ok(books) => Ok(books),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    backup_key = BACKUP_KEY,
                    "reading list record is unparseable; preserving it and starting empty"
                );
                self.library.insert(BACKUP_KEY, value)?;
                self.library.remove(SLOT_KEY)?;
                self.db.flush()?;
                Ok(Vec::new())
            }
        }
    }

    /// Write the full list to the slot and flush it to disk
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization, the database write, or the
    /// flush fails.
    pub fn write(&self, books: &[BookToRead]) -> Result<(), StoreError> {
        let value = serde_json::to_vec(books)?;
        self.library.insert(SLOT_KEY, value)?;
        self.db.flush()?;
        Ok(())
    }

    /// Raw payload preserved from an unparseable record, if any
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the underlying database read fails.
    pub fn corrupt_backup(&self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.library.get(BACKUP_KEY)?.map(|value| value.to_vec()))
    }
}

impl Drop for Slot {
    fn drop(&mut self) {
        // Best-effort flush on drop. Errors are ignored since we can't
        // propagate them from Drop. Every write already flushes.
        let _ = self.db.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn book(id: u64, title: &str) -> BookToRead {
        BookToRead {
            id,
            title: title.to_string(),
            authors: String::new(),
            memo: String::new(),
        }
    }

    #[test]
    fn test_read_absent_record_is_empty() {
        let dir = TempDir::new().unwrap();
        let slot = Slot::open(dir.path().join("books")).unwrap();

        assert_eq!(slot.read().unwrap(), Vec::new());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let slot = Slot::open(dir.path().join("books")).unwrap();

        let books = vec![book(1, "A"), book(2, "B")];
        slot.write(&books).unwrap();

        assert_eq!(slot.read().unwrap(), books);
    }

    #[test]
    fn test_write_replaces_whole_record() {
        let dir = TempDir::new().unwrap();
        let slot = Slot::open(dir.path().join("books")).unwrap();

        slot.write(&[book(1, "A"), book(2, "B")]).unwrap();
        slot.write(&[book(2, "B")]).unwrap();

        assert_eq!(slot.read().unwrap(), vec![book(2, "B")]);
    }

    #[test]
    fn test_record_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books");

        {
            let slot = Slot::open(&path).unwrap();
            slot.write(&[book(7, "Persisted")]).unwrap();
        }

        let slot = Slot::open(&path).unwrap();
        assert_eq!(slot.read().unwrap(), vec![book(7, "Persisted")]);
    }

    #[test]
    fn test_unparseable_record_is_backed_up() {
        let dir = TempDir::new().unwrap();
        let slot = Slot::open(dir.path().join("books")).unwrap();

        slot.library.insert(SLOT_KEY, &b"not json"[..]).unwrap();

        assert_eq!(slot.read().unwrap(), Vec::new());
        assert_eq!(slot.corrupt_backup().unwrap(), Some(b"not json".to_vec()));

        // The primary record is clear again, so writes start fresh.
        slot.write(&[book(1, "A")]).unwrap();
        assert_eq!(slot.read().unwrap(), vec![book(1, "A")]);
        assert_eq!(slot.corrupt_backup().unwrap(), Some(b"not json".to_vec()));
    }
}
