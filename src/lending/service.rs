//! Lending Service
//!
//! Borrow/return bookkeeping and the derived lending views. Both mutations
//! are read-then-write operations on a single book and run under its lock;
//! writes are ordered so a concurrent snapshot reader only ever sees
//! states the system can legitimately be in (a book goes unavailable
//! before its borrow record lands, and a return is recorded before the
//! book turns available again).

use super::types::{BookSummary, BorrowRecord, BorrowView, HistoryEntry, MemberSummary};
use crate::catalog::types::Book;
use crate::error::{LibraryError, Result};
use crate::members::types::Member;
use crate::store::{BookLockRegistry, CatalogStore, LedgerStore, MemberStore};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

/// Borrow/return operations over the shared stores.
pub struct LendingService {
    members: Arc<MemberStore>,
    catalog: Arc<CatalogStore>,
    ledger: Arc<LedgerStore>,
    locks: Arc<BookLockRegistry>,
}

impl LendingService {
    pub fn new(
        members: Arc<MemberStore>,
        catalog: Arc<CatalogStore>,
        ledger: Arc<LedgerStore>,
        locks: Arc<BookLockRegistry>,
    ) -> Self {
        Self {
            members,
            catalog,
            ledger,
            locks,
        }
    }

    /// Checks a book out to a member until the given due date.
    ///
    /// Guard order matches lookup precedence: member, then book, then
    /// availability, then the one-active-borrow-per-pair rule.
    pub fn borrow(
        &self,
        member_id: i64,
        book_id: i64,
        borrow_date: NaiveDate,
        return_date: NaiveDate,
    ) -> Result<BorrowRecord> {
        if !self.members.contains(member_id) {
            return Err(LibraryError::MemberNotFound(member_id));
        }

        let lock = self.locks.lock_for(book_id);
        let _guard = lock.lock();

        let book = self
            .catalog
            .get(book_id)
            .ok_or(LibraryError::BookNotFound(book_id))?;
        if !book.available {
            tracing::warn!("Book {} requested by member {} is not available", book_id, member_id);
            return Err(LibraryError::BookUnavailable(book_id));
        }

        let already_borrowed = self.ledger.borrows().iter().any(|record| {
            record.member_id == member_id && record.book_id == book_id && record.is_active()
        });
        if already_borrowed {
            return Err(LibraryError::BorrowAlreadyActive { member_id, book_id });
        }

        self.catalog.update(book_id, |book| book.available = false);
        let record = self.ledger.append_borrow(|borrow_id| BorrowRecord {
            borrow_id,
            member_id,
            book_id,
            borrow_date,
            return_date,
            returned: false,
            actual_return_date: None,
        });

        tracing::info!(
            "Member {} borrowed book {} until {}",
            member_id,
            book_id,
            return_date
        );
        Ok(record)
    }

    /// Closes the active borrow for the member/book pair and restores the
    /// book's availability. The due date on the record stays as agreed;
    /// only `actual_return_date` records when the book came back.
    pub fn return_book(
        &self,
        member_id: i64,
        book_id: i64,
        returned_on: NaiveDate,
    ) -> Result<BorrowRecord> {
        let lock = self.locks.lock_for(book_id);
        let _guard = lock.lock();

        let active = self
            .ledger
            .borrows()
            .into_iter()
            .find(|record| {
                record.member_id == member_id && record.book_id == book_id && record.is_active()
            })
            .ok_or(LibraryError::NoActiveBorrow { member_id, book_id })?;

        let record = self
            .ledger
            .update_borrow(active.borrow_id, |record| {
                record.returned = true;
                record.actual_return_date = Some(returned_on);
            })
            .ok_or(LibraryError::NoActiveBorrow { member_id, book_id })?;

        // The book may have been deleted after a past return; restoring
        // availability is then a no-op.
        self.catalog.update(book_id, |book| book.available = true);

        tracing::info!("Member {} returned book {} on {}", member_id, book_id, returned_on);
        Ok(record)
    }

    /// Every active borrow, enriched with member and book summaries.
    pub fn borrowed(&self) -> Vec<BorrowView> {
        let members = self.members.snapshot();
        let books = self.catalog.snapshot();

        self.ledger
            .borrows()
            .into_iter()
            .filter(BorrowRecord::is_active)
            .map(|record| join_view(record, &members, &books))
            .collect()
    }

    /// A member's full borrowing history (active and returned), in ledger
    /// order, with book summaries attached.
    pub fn history(&self, member_id: i64) -> Result<Vec<HistoryEntry>> {
        if !self.members.contains(member_id) {
            return Err(LibraryError::MemberNotFound(member_id));
        }

        let books = self.catalog.snapshot();
        let entries = self
            .ledger
            .borrows()
            .into_iter()
            .filter(|record| record.member_id == member_id)
            .map(|record| {
                let book = book_summary(&books, record.book_id);
                HistoryEntry { record, book }
            })
            .collect();
        Ok(entries)
    }

    /// Active borrows whose due date has passed, judged against the wall
    /// clock.
    pub fn overdue(&self) -> Vec<BorrowView> {
        self.overdue_at(Utc::now().date_naive())
    }

    /// Clock-independent variant of [`overdue`](Self::overdue): a borrow is
    /// overdue when it is active and its due date is strictly before
    /// `today`.
    pub fn overdue_at(&self, today: NaiveDate) -> Vec<BorrowView> {
        let members = self.members.snapshot();
        let books = self.catalog.snapshot();

        self.ledger
            .borrows()
            .into_iter()
            .filter(|record| record.is_active() && record.return_date < today)
            .map(|record| join_view(record, &members, &books))
            .collect()
    }
}

fn join_view(record: BorrowRecord, members: &[Member], books: &[Book]) -> BorrowView {
    let member = member_summary(members, record.member_id);
    let book = book_summary(books, record.book_id);
    BorrowView {
        record,
        member,
        book,
    }
}

fn member_summary(members: &[Member], member_id: i64) -> Option<MemberSummary> {
    members
        .iter()
        .find(|member| member.member_id == member_id)
        .map(|member| MemberSummary {
            member_id: member.member_id,
            name: member.name.clone(),
        })
}

fn book_summary(books: &[Book], book_id: i64) -> Option<BookSummary> {
    books
        .iter()
        .find(|book| book.book_id == book_id)
        .map(|book| BookSummary {
            book_id: book.book_id,
            title: book.title.clone(),
            author: book.author.clone(),
        })
}
