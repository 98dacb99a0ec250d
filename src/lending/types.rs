//! Lending Data Types
//!
//! The BorrowRecord kept in the ledger plus the enriched read-side views
//! the listing operations return. Views join a record with lightweight
//! member/book summaries so callers never re-query the stores.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One borrow in the ledger. Created when a book is checked out, mutated
/// exactly once when it comes back, and never deleted: the full history
/// feeds popularity scoring and reservation priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowRecord {
    /// Strictly increasing, assigned by the ledger. Never reused.
    pub borrow_id: i64,
    pub member_id: i64,
    pub book_id: i64,
    pub borrow_date: NaiveDate,
    /// Due date agreed at checkout. Never modified by a return.
    pub return_date: NaiveDate,
    pub returned: bool,
    pub actual_return_date: Option<NaiveDate>,
}

impl BorrowRecord {
    /// An active borrow is one that has not been returned yet.
    pub fn is_active(&self) -> bool {
        !self.returned
    }

    /// Whether the book came back after its due date.
    pub fn was_late(&self) -> bool {
        self.returned && self.actual_return_date.is_some_and(|date| date > self.return_date)
    }
}

/// Member fields exposed on lending views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub member_id: i64,
    pub name: String,
}

/// Book fields exposed on lending views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub book_id: i64,
    pub title: String,
    pub author: String,
}

/// A borrow joined with both party summaries, as returned by the
/// borrowed-books and overdue listings. Summaries are `None` only when the
/// referenced record has since left its store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowView {
    #[serde(flatten)]
    pub record: BorrowRecord,
    pub member: Option<MemberSummary>,
    pub book: Option<BookSummary>,
}

/// One row of a member's borrowing history: the record plus the book it
/// refers to. The book summary is `None` when the book was deleted after
/// the borrow was returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub record: BorrowRecord,
    pub book: Option<BookSummary>,
}
