//! Search Data Types
//!
//! Request and response shapes for the catalog search pipeline. Every
//! request field is optional: an empty request returns the first page of
//! the whole catalog, unfiltered and unsorted.

use crate::catalog::types::Book;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A full search invocation: filters, ordering, paging, and analytics
/// switches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub filters: BookFilters,
    pub sort: SortSpec,
    /// 1-based page number; defaults to 1.
    pub page: Option<u32>,
    /// Page size; defaults to the policy page limit.
    pub limit: Option<u32>,
    pub analytics: AnalyticsOptions,
}

/// Optional predicates, AND-composed. Each one that is present must hold
/// for a book to survive filtering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookFilters {
    /// Case-insensitive substring matched against title OR author.
    pub q: Option<String>,
    /// Exact tag membership in `categories`.
    pub category: Option<String>,
    /// Case-insensitive substring matched against author only. Independent
    /// of `q`; both may be supplied together.
    pub author: Option<String>,
    /// Inclusive lower bound. Books without a publication date never match.
    pub published_after: Option<NaiveDate>,
    /// Inclusive upper bound. Books without a publication date never match.
    pub published_before: Option<NaiveDate>,
    /// Inclusive rating bounds. Callers must not pass NaN.
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub availability: Option<bool>,
}

/// Requested ordering. `by` is matched case-insensitively against the
/// recognized keys (`popularity`, `rating`, `title`, `author`,
/// `published_date`); anything else leaves the filtered order untouched.
/// Direction is descending only when `order` is exactly `desc` (any case).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSpec {
    pub by: Option<String>,
    pub order: Option<String>,
}

/// Switches for the aggregate section of the response. `trends` has no
/// effect unless `include` is set.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsOptions {
    pub include: bool,
    pub trends: bool,
}

/// A catalog book decorated with its popularity score for ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedBook {
    #[serde(flatten)]
    pub book: Book,
    /// Total historical borrow count for this book, across all time.
    pub popularity_score: u64,
}

/// One page of search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub books: Vec<RankedBook>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Analytics>,
    pub pagination: Pagination,
}

/// Paging metadata. `total` counts the filtered set before slicing;
/// `pages` is the ceiling of `total / limit` (0 when nothing matched).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub pages: usize,
}

/// Aggregates over the filtered (unpaginated) result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub total_count: usize,
    pub available_count: usize,
    pub borrowed_count: usize,
    /// Mean rating rounded to two decimals; exactly 0 for an empty set.
    pub average_rating: f64,
    /// Borrows per `YYYY-MM` bucket over the trailing trend window.
    /// Months with no borrows are absent rather than zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borrowing_trends: Option<BTreeMap<String, u64>>,
}
