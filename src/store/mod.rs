//! Store Module
//!
//! In-memory state shared by every service and engine in the crate.
//!
//! ## Overview
//! Three stores hold all library state: the catalog (books), the member
//! register, and the ledger (borrow and reservation history). Each store
//! guards its own interior with a reader-writer lock and enumerates via
//! cloned snapshots, so engines read without blocking writers and never
//! see a half-applied mutation. Cross-store operations that read and then
//! write the same book serialize through the per-book lock registry.
//!
//! ## Responsibilities
//! - **Identity**: keys are unique within a store; ledger ids come from
//!   store-owned strictly increasing counters.
//! - **Ordering**: catalog and member stores preserve insertion order,
//!   which downstream ranking and tie-breaking rely on.
//! - **Isolation**: snapshots give lock-free readers a consistent view.
//!
//! ## Submodules
//! - **`records`**: the generic insertion-ordered store behind the catalog
//!   and member aliases.
//! - **`ledger`**: borrow/reservation history with owned id counters.
//! - **`locks`**: the per-book mutex registry.

pub mod ledger;
pub mod locks;
pub mod records;

#[cfg(test)]
mod tests;

use crate::catalog::types::Book;
use crate::members::types::Member;

/// The collection of Book records.
pub type CatalogStore = records::RecordStore<Book>;

/// The collection of Member records.
pub type MemberStore = records::RecordStore<Member>;

pub use ledger::LedgerStore;
pub use locks::BookLockRegistry;
