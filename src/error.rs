//! Library Error Types
//!
//! The single error enum raised by the core services and engines. Anything
//! not listed here is a valid outcome, not a fault: empty search pages,
//! out-of-range page indices, and empty analytics sets all return normally.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Failures raised by the library core.
///
/// The search engine never fails; the reservation engine raises only the
/// two `NotFound` variants. The remaining variants come from the CRUD and
/// lending guards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("member {0} not found")]
    MemberNotFound(i64),

    #[error("book {0} not found")]
    BookNotFound(i64),

    #[error("member {0} is already registered")]
    MemberExists(i64),

    #[error("book {0} is already in the catalog")]
    BookExists(i64),

    #[error("members must be at least {minimum} years old (got {age})")]
    UnderMinimumAge { age: u32, minimum: u32 },

    #[error("book {0} is not available for borrowing")]
    BookUnavailable(i64),

    #[error("member {member_id} already has book {book_id} borrowed")]
    BorrowAlreadyActive { member_id: i64, book_id: i64 },

    #[error("no active borrow found for member {member_id} and book {book_id}")]
    NoActiveBorrow { member_id: i64, book_id: i64 },

    #[error("cannot delete member {0} with active borrows")]
    MemberHasActiveBorrows(i64),

    #[error("cannot delete book {0} with active borrows")]
    BookHasActiveBorrows(i64),
}
