//! Generic Record Store
//!
//! An insertion-ordered, identifier-addressed store shared across threads
//! behind a reader-writer lock. The catalog and member stores are both
//! instances of this type. Insertion order is part of the contract: search
//! ranking ties and listing order are defined over it.

use parking_lot::RwLock;

/// Record types addressable by a numeric identifier.
pub trait Keyed {
    fn key(&self) -> i64;
}

/// Thread-safe store keeping records in insertion order with unique keys.
///
/// Enumeration hands out a cloned snapshot, so readers never hold the lock
/// while they work and never observe a half-applied mutation.
#[derive(Debug)]
pub struct RecordStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Keyed + Clone> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Inserts a record unless its key is already taken. Returns whether
    /// the record was stored.
    pub fn try_insert(&self, record: T) -> bool {
        let mut records = self.records.write();
        if records.iter().any(|existing| existing.key() == record.key()) {
            return false;
        }
        records.push(record);
        true
    }

    /// Looks up a record by key.
    pub fn get(&self, key: i64) -> Option<T> {
        self.records
            .read()
            .iter()
            .find(|record| record.key() == key)
            .cloned()
    }

    pub fn contains(&self, key: i64) -> bool {
        self.records.read().iter().any(|record| record.key() == key)
    }

    /// Snapshot of every record in insertion order.
    pub fn snapshot(&self) -> Vec<T> {
        self.records.read().clone()
    }

    /// Mutates the record with the given key in place and returns the
    /// updated copy, or `None` if no such record exists.
    pub fn update<F>(&self, key: i64, mutate: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.records.write();
        let record = records.iter_mut().find(|record| record.key() == key)?;
        mutate(record);
        Some(record.clone())
    }

    /// Removes the record with the given key. Returns whether one existed.
    pub fn remove(&self, key: i64) -> bool {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|record| record.key() != key);
        records.len() < before
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
