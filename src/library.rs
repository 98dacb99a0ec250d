//! Library Facade
//!
//! Single construction site for the whole system: builds the three stores
//! and the lock registry once, then wires every service and engine onto
//! the same shared state. Embedding applications hold one `Library` and
//! reach the full API surface through its accessors.

use crate::catalog::service::CatalogService;
use crate::lending::service::LendingService;
use crate::members::service::MemberService;
use crate::policy::LendingPolicy;
use crate::reservations::engine::ReservationEngine;
use crate::search::engine::SearchEngine;
use crate::store::{BookLockRegistry, CatalogStore, LedgerStore, MemberStore};
use std::sync::Arc;

/// The assembled lending library.
pub struct Library {
    members: MemberService,
    catalog: CatalogService,
    lending: LendingService,
    search: SearchEngine,
    reservations: ReservationEngine,
}

impl Library {
    /// A fresh, empty library under the default policy.
    pub fn new() -> Self {
        Self::with_policy(LendingPolicy::default())
    }

    /// A fresh, empty library under a custom policy.
    pub fn with_policy(policy: LendingPolicy) -> Self {
        let policy = Arc::new(policy);
        let members = Arc::new(MemberStore::new());
        let catalog = Arc::new(CatalogStore::new());
        let ledger = Arc::new(LedgerStore::new());
        let locks = Arc::new(BookLockRegistry::new());

        Self {
            members: MemberService::new(members.clone(), ledger.clone(), policy.clone()),
            catalog: CatalogService::new(catalog.clone(), ledger.clone(), locks.clone()),
            lending: LendingService::new(
                members.clone(),
                catalog.clone(),
                ledger.clone(),
                locks.clone(),
            ),
            search: SearchEngine::new(catalog.clone(), ledger.clone(), policy.clone()),
            reservations: ReservationEngine::new(members, catalog, ledger, locks, policy),
        }
    }

    /// Member lifecycle operations.
    pub fn members(&self) -> &MemberService {
        &self.members
    }

    /// Book lifecycle operations.
    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    /// Borrow/return bookkeeping and lending views.
    pub fn lending(&self) -> &LendingService {
        &self.lending
    }

    /// The search & ranking engine.
    pub fn search(&self) -> &SearchEngine {
        &self.search
    }

    /// The reservation priority engine.
    pub fn reservations(&self) -> &ReservationEngine {
        &self.reservations
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::NewBook;
    use crate::members::types::Member;
    use crate::reservations::types::{ReservationRequest, ReservationStatus};
    use crate::search::types::SearchRequest;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Every component must observe the same shared state.
    #[test]
    fn test_components_share_one_state() {
        let library = Library::new();
        library
            .members()
            .register(Member {
                member_id: 1,
                name: "Alice".to_string(),
                email: None,
                age: 30,
            })
            .unwrap();
        library
            .catalog()
            .add(NewBook {
                book_id: 7,
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                categories: Vec::new(),
                rating: 0.0,
                published_date: None,
                available: None,
            })
            .unwrap();

        library
            .lending()
            .borrow(1, 7, date(2024, 6, 1), date(2024, 6, 15))
            .unwrap();

        // Search sees both the availability flip and the borrow count.
        let response = library.search().search(&SearchRequest::default());
        assert!(!response.books[0].book.available);
        assert_eq!(response.books[0].popularity_score, 1);

        // The reservation engine sees the book as held and queues behind it.
        let reservation = library
            .reservations()
            .reserve(ReservationRequest {
                member_id: 1,
                book_id: 7,
                reservation_date: date(2024, 6, 2),
                is_premium: false,
                priority_reason: None,
            })
            .unwrap();
        assert_eq!(reservation.status, ReservationStatus::Queued);
        assert_eq!(reservation.priority_score, 1, "the borrow feeds the score");
    }
}
