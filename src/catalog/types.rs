//! Catalog Data Types
//!
//! The Book record stored in the catalog and the draft shape used to add
//! one. Drafts carry the creation defaults so callers only supply the
//! fields they care about.

use crate::store::records::Keyed;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A book held by the library.
///
/// `available` reflects physical state: it is flipped off by a borrow or a
/// `ready` reservation and restored by a return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    /// Tag set; membership is tested exactly (case-sensitive).
    pub categories: Vec<String>,
    /// Average reader rating, 0 when the book has none yet.
    pub rating: f64,
    pub published_date: Option<NaiveDate>,
    pub available: bool,
}

impl Keyed for Book {
    fn key(&self) -> i64 {
        self.book_id
    }
}

/// Input shape for adding a book to the catalog.
///
/// Missing optional fields take the catalog defaults: no categories, a zero
/// rating, no publication date, and `available = true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub published_date: Option<NaiveDate>,
    #[serde(default)]
    pub available: Option<bool>,
}

impl From<NewBook> for Book {
    fn from(draft: NewBook) -> Self {
        Self {
            book_id: draft.book_id,
            title: draft.title,
            author: draft.author,
            categories: draft.categories,
            rating: draft.rating,
            published_date: draft.published_date,
            available: draft.available.unwrap_or(true),
        }
    }
}
