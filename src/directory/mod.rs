//! The directory: the keyed collection of records plus its persistence
//! behavior.
//!
//! The mapping itself is a plain `BTreeMap` with no I/O; the `Directory`
//! wraps it together with a [`ContactStore`] and persists after every
//! collection-level mutation. Record-level edits go through [`get_mut`]
//! followed by an explicit [`save`] at the call site.
//!
//! [`get_mut`]: Directory::get_mut
//! [`save`]: Directory::save

use crate::error::StorageResult;
use crate::models::Record;
use crate::storage::ContactStore;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use tracing::info;

/// The address book: records keyed by their exact name string.
///
/// Invariant: every value's `name()` equals its key. Keys are
/// case-sensitive; iteration order is the key order, which is stable
/// across calls for an unchanged collection.
pub struct Directory {
    contacts: BTreeMap<String, Record>,
    store: Box<dyn ContactStore>,
}

impl Directory {
    /// Load the directory from `store`, starting empty when no store
    /// file exists yet.
    ///
    /// # Errors
    ///
    /// A store that is present but unreadable fails the load; see
    /// [`ContactStore::load`].
    pub fn load(store: Box<dyn ContactStore>) -> StorageResult<Self> {
        let contacts = store.load()?.unwrap_or_default();
        Ok(Self { contacts, store })
    }

    /// Persist the full collection through the store.
    pub fn save(&self) -> StorageResult<()> {
        self.store.save(&self.contacts)
    }

    /// Insert `record` under its name, replacing any previous entry, and
    /// persist.
    pub fn add_record(&mut self, record: Record) -> StorageResult<()> {
        let key = record.name().as_str().to_string();
        info!(name = %key, "adding record");
        self.contacts.insert(key, record);
        self.save()
    }

    /// Remove the entry under `name` if present, persisting only when a
    /// removal occurred. Returns whether it did.
    pub fn delete(&mut self, name: &str) -> StorageResult<bool> {
        if self.contacts.remove(name).is_some() {
            info!(name = %name, "deleted record");
            self.save()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Exact key lookup.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.contacts.get(name)
    }

    /// Exact key lookup for in-place mutation. Callers that change the
    /// record are responsible for calling [`save`](Self::save) afterwards.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.contacts.get_mut(name)
    }

    /// Search records whose name contains `query` case-insensitively, or
    /// any of whose phones contains `query` as an exact substring.
    ///
    /// Each record appears at most once, in collection order, even when
    /// several of its phones match.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query_lower = query.to_lowercase();
        self.contacts
            .values()
            .filter(|record| {
                record.name().as_str().to_lowercase().contains(&query_lower)
                    || record.phones().iter().any(|p| p.as_str().contains(query))
            })
            .collect()
    }

    /// Iterate the collection in fixed-size batches.
    ///
    /// Batches follow collection order; the final batch may be shorter.
    /// Each call snapshots the current records, so the iterator is
    /// restartable and unaffected by later mutation.
    pub fn iterate(&self, chunk_size: NonZeroUsize) -> Chunks<'_> {
        Chunks {
            records: self.contacts.values().collect(),
            chunk_size: chunk_size.get(),
            pos: 0,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the directory has no records.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// Lazy batch iterator over a snapshot of the directory's records.
pub struct Chunks<'a> {
    records: Vec<&'a Record>,
    chunk_size: usize,
    pos: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.records.len() {
            return None;
        }
        let end = (self.pos + self.chunk_size).min(self.records.len());
        let chunk = self.records[self.pos..end].to_vec();
        self.pos = end;
        Some(chunk)
    }
}
