//! Reservations Module
//!
//! The priority-queued reservation subsystem.
//!
//! ## Overview
//! A reservation either claims an available book immediately (`ready`) or
//! joins the book's demand queue (`queued`). Queue order is decided by a
//! priority score computed from the member's borrowing record and
//! membership tier at placement time; equal scores keep placement order.
//! Each placement also projects when the book should become available and
//! stamps a fixed pickup deadline.
//!
//! ## Responsibilities
//! - **Scoring**: borrow history minus late-return penalties, plus
//!   premium and stated-reason bonuses.
//! - **Status**: atomically claim an available book, else queue.
//! - **Ranking**: stable descending-score rank among the book's queued
//!   reservations.
//! - **Projection**: estimated availability and expiration dates.
//!
//! ## Submodules
//! - **`engine`**: placement, scoring, and queue ranking.
//! - **`types`**: the reservation records and request shape.

pub mod engine;
pub mod types;
