//! Catalog Service
//!
//! Book lifecycle operations. Removal is a read-then-write on the book
//! (guard check, then delete), so it runs under the book's lock like every
//! other mutation of that book.

use super::types::{Book, NewBook};
use crate::error::{LibraryError, Result};
use crate::store::{BookLockRegistry, CatalogStore, LedgerStore};
use std::sync::Arc;

/// Book CRUD over the shared catalog store.
pub struct CatalogService {
    catalog: Arc<CatalogStore>,
    ledger: Arc<LedgerStore>,
    locks: Arc<BookLockRegistry>,
}

impl CatalogService {
    pub fn new(
        catalog: Arc<CatalogStore>,
        ledger: Arc<LedgerStore>,
        locks: Arc<BookLockRegistry>,
    ) -> Self {
        Self {
            catalog,
            ledger,
            locks,
        }
    }

    /// Adds a book, filling in the catalog defaults for absent fields, and
    /// returns the stored record.
    pub fn add(&self, draft: NewBook) -> Result<Book> {
        let book: Book = draft.into();
        let book_id = book.book_id;

        if !self.catalog.try_insert(book.clone()) {
            return Err(LibraryError::BookExists(book_id));
        }

        tracing::info!("Added book {} ({:?})", book_id, book.title);
        Ok(book)
    }

    /// Looks up a single book.
    pub fn book(&self, book_id: i64) -> Result<Book> {
        self.catalog
            .get(book_id)
            .ok_or(LibraryError::BookNotFound(book_id))
    }

    /// Every book, in catalog order.
    pub fn books(&self) -> Vec<Book> {
        self.catalog.snapshot()
    }

    /// Removes a book, refusing while any active borrow references it.
    pub fn remove(&self, book_id: i64) -> Result<()> {
        let lock = self.locks.lock_for(book_id);
        let _guard = lock.lock();

        if !self.catalog.contains(book_id) {
            return Err(LibraryError::BookNotFound(book_id));
        }

        let has_active_borrows = self
            .ledger
            .borrows()
            .iter()
            .any(|record| record.book_id == book_id && record.is_active());
        if has_active_borrows {
            tracing::warn!("Refused to remove book {}: active borrows exist", book_id);
            return Err(LibraryError::BookHasActiveBorrows(book_id));
        }

        if !self.catalog.remove(book_id) {
            return Err(LibraryError::BookNotFound(book_id));
        }

        tracing::info!("Removed book {}", book_id);
        Ok(())
    }
}
