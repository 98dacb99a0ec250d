//! Reservation Priority Engine
//!
//! Places reservations against the catalog: scores the member from their
//! borrow history, claims the book immediately when it is available, and
//! otherwise ranks the reservation into the book's priority queue. The
//! whole decision runs inside the book's critical section, over one
//! consistent ledger snapshot.
//!
//! Two quirks are intentional and load-bearing: a reservation's
//! `priority_score` is frozen at creation, and earlier queued
//! reservations keep their stored `queue_position` even when a later,
//! higher-priority reservation effectively displaces them. Callers must
//! treat stored positions as the rank at placement time, not a live rank.

use super::types::{Reservation, ReservationRequest, ReservationStatus};
use crate::error::{LibraryError, Result};
use crate::policy::LendingPolicy;
use crate::store::{BookLockRegistry, CatalogStore, LedgerStore, MemberStore};
use chrono::{NaiveDate, Utc};
use std::cmp::Reverse;
use std::sync::Arc;

/// Reservation placement over the shared stores.
pub struct ReservationEngine {
    members: Arc<MemberStore>,
    catalog: Arc<CatalogStore>,
    ledger: Arc<LedgerStore>,
    locks: Arc<BookLockRegistry>,
    policy: Arc<LendingPolicy>,
}

impl ReservationEngine {
    pub fn new(
        members: Arc<MemberStore>,
        catalog: Arc<CatalogStore>,
        ledger: Arc<LedgerStore>,
        locks: Arc<BookLockRegistry>,
        policy: Arc<LendingPolicy>,
    ) -> Self {
        Self {
            members,
            catalog,
            ledger,
            locks,
            policy,
        }
    }

    /// Places a reservation, with queue projections anchored at the wall
    /// clock.
    pub fn reserve(&self, request: ReservationRequest) -> Result<Reservation> {
        self.reserve_at(request, Utc::now().date_naive())
    }

    /// Clock-independent variant of [`reserve`](Self::reserve).
    pub fn reserve_at(&self, request: ReservationRequest, today: NaiveDate) -> Result<Reservation> {
        let ReservationRequest {
            member_id,
            book_id,
            reservation_date,
            is_premium,
            priority_reason,
        } = request;

        if !self.members.contains(member_id) {
            return Err(LibraryError::MemberNotFound(member_id));
        }

        let lock = self.locks.lock_for(book_id);
        let _guard = lock.lock();

        let book = self
            .catalog
            .get(book_id)
            .ok_or(LibraryError::BookNotFound(book_id))?;

        let priority_reason = priority_reason.unwrap_or_default();
        let priority_score = self.score_member(member_id, is_premium, !priority_reason.is_empty());

        let status = if book.available {
            self.catalog.update(book_id, |book| book.available = false);
            ReservationStatus::Ready
        } else {
            ReservationStatus::Queued
        };

        let queue_position = match status {
            ReservationStatus::Ready => None,
            ReservationStatus::Queued => {
                let queued_scores: Vec<i64> = self
                    .ledger
                    .reservations()
                    .iter()
                    .filter(|reservation| {
                        reservation.book_id == book_id
                            && reservation.status == ReservationStatus::Queued
                    })
                    .map(|reservation| reservation.priority_score)
                    .collect();
                Some(queue_rank(&queued_scores, priority_score))
            }
        };

        let estimated_availability = match queue_position {
            Some(position) => self.policy.projected_availability(today, position),
            None => reservation_date,
        };

        let reservation = self.ledger.append_reservation(|reservation_id| Reservation {
            reservation_id,
            member_id,
            book_id,
            reservation_date,
            priority_score,
            status,
            is_premium,
            priority_reason: priority_reason.clone(),
            expiration_date: self.policy.pickup_deadline(reservation_date),
            queue_position,
            estimated_availability,
        });

        match queue_position {
            Some(position) => tracing::info!(
                "Queued reservation {} for book {} at position {} (score {})",
                reservation.reservation_id,
                book_id,
                position,
                priority_score
            ),
            None => tracing::info!(
                "Reservation {} for book {} is ready for pickup (score {})",
                reservation.reservation_id,
                book_id,
                priority_score
            ),
        }
        Ok(reservation)
    }

    /// Priority score from one consistent snapshot of the member's borrow
    /// history. The snapshot is taken inside the caller's critical
    /// section, so a concurrent return cannot split the two counts.
    fn score_member(&self, member_id: i64, is_premium: bool, has_reason: bool) -> i64 {
        let borrows = self.ledger.borrows();
        let member_borrows = borrows
            .iter()
            .filter(|record| record.member_id == member_id);
        let borrow_count = member_borrows.clone().count();
        let late_return_count = member_borrows.filter(|record| record.was_late()).count();

        let score = self
            .policy
            .priority_score(borrow_count, late_return_count, is_premium, has_reason);
        tracing::debug!(
            "Member {} scores {} ({} borrows, {} late)",
            member_id,
            score,
            borrow_count,
            late_return_count
        );
        score
    }
}

/// 1-based rank the newcomer takes in a book's queue: existing queued
/// reservations (in ledger order) plus the newcomer last, stable-sorted by
/// descending score. Ties therefore keep their placement order, with the
/// newcomer after every equal-score peer.
pub(crate) fn queue_rank(queued_scores: &[i64], candidate_score: i64) -> u32 {
    let mut order: Vec<(usize, i64)> = queued_scores.iter().copied().enumerate().collect();
    let candidate_index = order.len();
    order.push((candidate_index, candidate_score));
    order.sort_by_key(|&(_, score)| Reverse(score));

    let rank = order
        .iter()
        .position(|&(index, _)| index == candidate_index)
        .unwrap_or(candidate_index);
    (rank + 1) as u32
}
