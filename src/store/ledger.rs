//! Borrow & Reservation Ledger
//!
//! Append-mostly store for the two history collections. The ledger owns
//! the `borrow_id` and `reservation_id` counters: identifiers are handed
//! out atomically inside the append, so ids are strictly increasing, never
//! reused, and appear in the ledger in id order. Borrow records are
//! mutated exactly once (on return) and never removed; the permanent
//! history is what popularity scoring and priority scoring read.

use crate::lending::types::BorrowRecord;
use crate::reservations::types::Reservation;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Thread-safe ledger of borrows and reservations.
#[derive(Debug)]
pub struct LedgerStore {
    borrows: RwLock<Vec<BorrowRecord>>,
    reservations: RwLock<Vec<Reservation>>,
    next_borrow_id: AtomicI64,
    next_reservation_id: AtomicI64,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self {
            borrows: RwLock::new(Vec::new()),
            reservations: RwLock::new(Vec::new()),
            next_borrow_id: AtomicI64::new(1),
            next_reservation_id: AtomicI64::new(1),
        }
    }

    /// Appends a borrow built by `make` from a freshly assigned id, and
    /// returns the stored record. Id assignment and append happen under
    /// one write lock so ledger order matches id order.
    pub fn append_borrow<F>(&self, make: F) -> BorrowRecord
    where
        F: FnOnce(i64) -> BorrowRecord,
    {
        let mut borrows = self.borrows.write();
        let borrow_id = self.next_borrow_id.fetch_add(1, Ordering::Relaxed);
        let record = make(borrow_id);
        borrows.push(record.clone());
        record
    }

    /// Appends a reservation built by `make` from a freshly assigned id,
    /// and returns the stored record.
    pub fn append_reservation<F>(&self, make: F) -> Reservation
    where
        F: FnOnce(i64) -> Reservation,
    {
        let mut reservations = self.reservations.write();
        let reservation_id = self.next_reservation_id.fetch_add(1, Ordering::Relaxed);
        let record = make(reservation_id);
        reservations.push(record.clone());
        record
    }

    /// Snapshot of every borrow in ledger (id) order.
    pub fn borrows(&self) -> Vec<BorrowRecord> {
        self.borrows.read().clone()
    }

    /// Snapshot of every reservation in ledger (id) order.
    pub fn reservations(&self) -> Vec<Reservation> {
        self.reservations.read().clone()
    }

    /// Mutates one borrow in place and returns the updated copy, or `None`
    /// if the id is unknown.
    pub fn update_borrow<F>(&self, borrow_id: i64, mutate: F) -> Option<BorrowRecord>
    where
        F: FnOnce(&mut BorrowRecord),
    {
        let mut borrows = self.borrows.write();
        let record = borrows
            .iter_mut()
            .find(|record| record.borrow_id == borrow_id)?;
        mutate(record);
        Some(record.clone())
    }

    pub fn borrow_count(&self) -> usize {
        self.borrows.read().len()
    }

    pub fn reservation_count(&self) -> usize {
        self.reservations.read().len()
    }
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}
