//! Lending Module
//!
//! Borrow/return bookkeeping and the derived lending views.
//!
//! ## Overview
//! A borrow checks a book out to a member until a due date and flips the
//! book unavailable; a return closes the record with the actual return
//! date and restores availability. Records are never deleted; the
//! permanent history drives search popularity and reservation priority.
//! The read side joins records with member and book summaries for the
//! borrowed, per-member history, and overdue listings.
//!
//! ## Responsibilities
//! - **Guards**: availability and one active borrow per member/book pair.
//! - **Locking**: each mutation runs under the book's lock, with writes
//!   ordered for snapshot readers.
//! - **Views**: enriched listings that never require follow-up lookups.
//!
//! ## Submodules
//! - **`service`**: borrow, return, and the listing operations.
//! - **`types`**: the borrow record and the view shapes.

pub mod service;
pub mod types;
