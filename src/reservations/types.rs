//! Reservation Data Types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// The book was available and is now being held for pickup.
    Ready,
    /// The book is held by someone else; the reservation waits in the
    /// per-book priority queue.
    Queued,
}

/// Input shape for placing a reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub member_id: i64,
    pub book_id: i64,
    pub reservation_date: NaiveDate,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub priority_reason: Option<String>,
}

/// A placed reservation.
///
/// `priority_score` and `queue_position` are computed once when the
/// reservation is placed and never revised afterwards, even as the
/// member's history or the queue around it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Strictly increasing, assigned by the ledger. Never reused.
    pub reservation_id: i64,
    pub member_id: i64,
    pub book_id: i64,
    pub reservation_date: NaiveDate,
    pub priority_score: i64,
    pub status: ReservationStatus,
    pub is_premium: bool,
    /// Free-form justification; empty when none was given.
    pub priority_reason: String,
    /// Pickup deadline, a fixed offset from the reservation date
    /// regardless of status.
    pub expiration_date: NaiveDate,
    /// 1-based rank in the book's queue. Present only while `queued`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_position: Option<u32>,
    /// When the member can expect the book: the reservation date itself if
    /// `ready`, otherwise a projection from today's queue rank.
    pub estimated_availability: NaiveDate,
}
