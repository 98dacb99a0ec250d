//! Lending Library Core
//!
//! This library crate implements the in-memory core of a lending library:
//! catalog and member management, borrow/return bookkeeping, ranked
//! catalog search, and priority-queued reservations. It performs no I/O
//! and exposes no transport; an embedding application maps its plain data
//! types onto whatever wire format it serves.
//!
//! ## Architecture Modules
//! The system is composed of loosely coupled subsystems over shared
//! in-memory stores:
//!
//! - **`store`**: The state layer. Insertion-ordered record stores for the
//!   catalog and member register, the append-mostly borrow/reservation
//!   ledger with its id counters, and the per-book lock registry.
//! - **`members`** / **`catalog`**: CRUD services with the registration
//!   and deletion guards (age floor, key uniqueness, active-borrow
//!   checks).
//! - **`lending`**: Borrow/return bookkeeping plus the enriched listing
//!   views (borrowed, history, overdue).
//! - **`search`**: The search & ranking engine: multi-predicate
//!   filtering, popularity scoring from lending history, stable
//!   multi-key sorting, pagination, and windowed analytics.
//! - **`reservations`**: The reservation priority engine: history-based
//!   priority scoring and the per-book demand queue with stable
//!   tie-breaking.
//! - **`policy`**: The tunable constants (score weights, deadlines,
//!   windows) behind both engines.
//! - **`library`**: The facade that wires everything onto one shared
//!   state.

pub mod catalog;
pub mod error;
pub mod lending;
pub mod library;
pub mod members;
pub mod policy;
pub mod reservations;
pub mod search;
pub mod store;

pub use error::{LibraryError, Result};
pub use library::Library;
pub use policy::LendingPolicy;
