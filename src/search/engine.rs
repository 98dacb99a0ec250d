//! Search & Ranking Engine
//!
//! Runs the full catalog search pipeline over store snapshots: filter,
//! score, sort, paginate, and optionally aggregate. The engine is a pure
//! reader. It takes no locks beyond the stores' own snapshot reads, never
//! mutates state, and never fails; an empty page is a normal result.

use super::types::{
    Analytics, BookFilters, Pagination, RankedBook, SearchRequest, SearchResponse, SortSpec,
};
use crate::catalog::types::Book;
use crate::lending::types::BorrowRecord;
use crate::policy::LendingPolicy;
use crate::store::{CatalogStore, LedgerStore};
use chrono::{NaiveDate, Utc};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Catalog search over the shared stores.
pub struct SearchEngine {
    catalog: Arc<CatalogStore>,
    ledger: Arc<LedgerStore>,
    policy: Arc<LendingPolicy>,
}

impl SearchEngine {
    pub fn new(
        catalog: Arc<CatalogStore>,
        ledger: Arc<LedgerStore>,
        policy: Arc<LendingPolicy>,
    ) -> Self {
        Self {
            catalog,
            ledger,
            policy,
        }
    }

    /// Executes a search anchored at the wall clock (the anchor only
    /// matters for the trend window).
    pub fn search(&self, request: &SearchRequest) -> SearchResponse {
        self.search_at(request, Utc::now().date_naive())
    }

    /// Clock-independent variant of [`search`](Self::search).
    pub fn search_at(&self, request: &SearchRequest, today: NaiveDate) -> SearchResponse {
        let borrows = self.ledger.borrows();
        let books = apply_filters(&request.filters, self.catalog.snapshot());

        let mut results: Vec<RankedBook> = books
            .into_iter()
            .map(|book| {
                let popularity_score = borrows
                    .iter()
                    .filter(|record| record.book_id == book.book_id)
                    .count() as u64;
                RankedBook {
                    book,
                    popularity_score,
                }
            })
            .collect();

        tracing::debug!(
            "Search matched {} of {} books",
            results.len(),
            self.catalog.len()
        );

        apply_sort(&mut results, &request.sort);

        let analytics = request
            .analytics
            .include
            .then(|| self.aggregate(&results, &borrows, request.analytics.trends, today));

        let page = request.page.unwrap_or(1).max(1);
        let limit = request
            .limit
            .unwrap_or(self.policy.default_page_limit)
            .max(1);
        let total = results.len();
        let pages = total.div_ceil(limit as usize);
        let start = (page as usize - 1) * limit as usize;
        let books_page: Vec<RankedBook> = results
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .collect();

        SearchResponse {
            books: books_page,
            analytics,
            pagination: Pagination {
                page,
                limit,
                total,
                pages,
            },
        }
    }

    /// Aggregates over the filtered, unpaginated result set. The trend
    /// window scans the whole borrow history, not just the filtered books.
    fn aggregate(
        &self,
        results: &[RankedBook],
        borrows: &[BorrowRecord],
        include_trends: bool,
        today: NaiveDate,
    ) -> Analytics {
        let total_count = results.len();
        let available_count = results.iter().filter(|entry| entry.book.available).count();
        let average_rating = if total_count == 0 {
            0.0
        } else {
            let sum: f64 = results.iter().map(|entry| entry.book.rating).sum();
            round_two_decimals(sum / total_count as f64)
        };

        let borrowing_trends = include_trends.then(|| {
            let window_start = self.policy.trend_window_start(today);
            let mut buckets: BTreeMap<String, u64> = BTreeMap::new();
            for record in borrows {
                if record.borrow_date >= window_start {
                    let month = record.borrow_date.format("%Y-%m").to_string();
                    *buckets.entry(month).or_insert(0) += 1;
                }
            }
            buckets
        });

        Analytics {
            total_count,
            available_count,
            borrowed_count: total_count - available_count,
            average_rating,
            borrowing_trends,
        }
    }
}

/// Applies each supplied predicate in turn. Needles are lowercased once
/// per stage, not once per book.
fn apply_filters(filters: &BookFilters, mut books: Vec<Book>) -> Vec<Book> {
    if let Some(q) = &filters.q {
        let needle = q.to_lowercase();
        books.retain(|book| {
            book.title.to_lowercase().contains(&needle)
                || book.author.to_lowercase().contains(&needle)
        });
    }
    if let Some(category) = &filters.category {
        books.retain(|book| book.categories.iter().any(|tag| tag == category));
    }
    if let Some(author) = &filters.author {
        let needle = author.to_lowercase();
        books.retain(|book| book.author.to_lowercase().contains(&needle));
    }
    if let Some(after) = filters.published_after {
        books.retain(|book| book.published_date.is_some_and(|date| date >= after));
    }
    if let Some(before) = filters.published_before {
        books.retain(|book| book.published_date.is_some_and(|date| date <= before));
    }
    if let Some(min_rating) = filters.min_rating {
        books.retain(|book| book.rating >= min_rating);
    }
    if let Some(max_rating) = filters.max_rating {
        books.retain(|book| book.rating <= max_rating);
    }
    if let Some(availability) = filters.availability {
        books.retain(|book| book.available == availability);
    }
    books
}

/// Stable sort dispatch. Descending order reverses the key, not the
/// slice, so equal-key items keep their filtered order either way.
fn apply_sort(results: &mut [RankedBook], sort: &SortSpec) {
    let Some(by) = &sort.by else {
        return;
    };
    let descending = sort
        .order
        .as_deref()
        .is_some_and(|order| order.eq_ignore_ascii_case("desc"));

    match by.to_lowercase().as_str() {
        "popularity" => sort_with(results, descending, |entry| entry.popularity_score),
        "rating" => sort_with(results, descending, |entry| OrderedFloat(entry.book.rating)),
        "title" => sort_with(results, descending, |entry| entry.book.title.to_lowercase()),
        "author" => sort_with(results, descending, |entry| {
            entry.book.author.to_lowercase()
        }),
        "published_date" => {
            // `None` sorts before every real date, i.e. as the earliest.
            sort_with(results, descending, |entry| entry.book.published_date)
        }
        other => tracing::debug!("Ignoring unrecognized sort key {:?}", other),
    }
}

fn sort_with<K, F>(results: &mut [RankedBook], descending: bool, mut key: F)
where
    K: Ord,
    F: FnMut(&RankedBook) -> K,
{
    if descending {
        results.sort_by_cached_key(|entry| Reverse(key(entry)));
    } else {
        results.sort_by_cached_key(key);
    }
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
