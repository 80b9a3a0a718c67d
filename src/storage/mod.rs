//! Backing store for the address book.
//!
//! The store is a seam: `Directory` talks to a [`ContactStore`], so tests
//! can substitute an in-memory implementation. The production store is
//! [`JsonFileStore`], a single versioned JSON document on disk.

use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Current on-disk format version.
const STORE_VERSION: u32 = 1;

/// Abstraction over address-book persistence.
///
/// `load` distinguishes "no store yet" (`Ok(None)`) from a store that
/// exists but cannot be read, which is an error: silently reinitializing
/// would overwrite the user's data on the next save.
pub trait ContactStore {
    /// Read the full collection, or `None` if no store exists yet.
    fn load(&self) -> StorageResult<Option<BTreeMap<String, Record>>>;

    /// Write the full collection, replacing any previous contents.
    fn save(&self, contacts: &BTreeMap<String, Record>) -> StorageResult<()>;
}

/// On-disk JSON document wrapping the contact mapping.
#[derive(Debug, Serialize, Deserialize)]
struct StoredBook {
    version: u32,
    contacts: BTreeMap<String, Record>,
}

/// Stores the address book as one JSON file.
///
/// Saves are a direct overwrite of the file, with no temp-file or fsync
/// discipline; a crash mid-write can truncate the book.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`. The file is not
    /// touched until the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactStore for JsonFileStore {
    fn load(&self) -> StorageResult<Option<BTreeMap<String, Record>>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no store file, starting empty");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let book: StoredBook =
            serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt(e.to_string()))?;

        if book.version != STORE_VERSION {
            return Err(StorageError::UnsupportedVersion(book.version));
        }

        debug!(
            path = %self.path.display(),
            contacts = book.contacts.len(),
            "loaded address book"
        );
        Ok(Some(book.contacts))
    }

    fn save(&self, contacts: &BTreeMap<String, Record>) -> StorageResult<()> {
        let book = StoredBook {
            version: STORE_VERSION,
            contacts: contacts.clone(),
        };
        let raw = serde_json::to_string_pretty(&book)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;

        std::fs::write(&self.path, raw)?;
        debug!(
            path = %self.path.display(),
            contacts = contacts.len(),
            "saved address book"
        );
        Ok(())
    }
}
