//! Catalog Module
//!
//! Book lifecycle management.
//!
//! ## Overview
//! Books enter the catalog with caller-chosen ids and sensible creation
//! defaults, and are enumerated in catalog order, which is the order
//! search results fall back to when no sort is requested. Removal is refused
//! while a book is out on an active borrow; since the check and the
//! delete are a read-then-write on the book, removal runs under the
//! book's lock.
//!
//! ## Submodules
//! - **`service`**: add, look up, list, and remove books.
//! - **`types`**: the book record and the creation draft.

pub mod service;
pub mod types;
