//! Search Module
//!
//! The ranked catalog search subsystem.
//!
//! ## Overview
//! This module implements the read-side query pipeline over the catalog
//! and the lending ledger. A request flows through optional AND-composed
//! filters, gets a popularity score from historical borrow counts, is
//! stably sorted on the requested key, and is sliced into a 1-based page.
//! Callers can additionally request aggregates over the filtered set and
//! a trailing-window borrowing trend.
//!
//! ## Responsibilities
//! - **Filtering**: text, category, author, date-range, rating-range, and
//!   availability predicates, each optional.
//! - **Ranking**: popularity from total historical borrows per book.
//! - **Ordering**: stable sorts on popularity, rating, title, author, or
//!   publication date, ascending or descending.
//! - **Analytics**: counts, mean rating, and month-bucketed borrow trends.
//!
//! ## Submodules
//! - **`engine`**: the filter/score/sort/paginate pipeline.
//! - **`types`**: request and response shapes.

pub mod engine;
pub mod types;
