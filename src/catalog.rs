//! Catalog / Review repository
//!
//! Filtered queries and mutation operations over books and reviews.
//!
//! ## Responsibilities
//! - Case-insensitive substring filtering over the catalog
//! - Stable listing orders (books by title, reviews newest first)
//! - Mutation pass-through to the document store
//!
//! Field validation belongs to the calling layer; the repository
//! persists whatever it is handed.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::error::Result;
use crate::model::{Book, Review};
use crate::store::DocumentStore;

/// Filters for [`Catalog::list_books`]
///
/// Each non-blank filter independently narrows the result by
/// case-insensitive substring containment; filters compose with AND.
/// `search` matches title or author; `author` and `category` match
/// their own field only.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub search: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

impl BookFilter {
    /// Set the title-or-author search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Set the author filter
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the category filter
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Query and mutation operations over books and reviews
pub struct Catalog {
    store: Arc<DocumentStore>,
}

impl Catalog {
    /// Create a catalog repository over the given store
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    // =========================================================================
    // Book Queries
    // =========================================================================

    /// List books matching the filter, sorted by title ascending
    pub fn list_books(&self, filter: &BookFilter) -> Result<Vec<Book>> {
        let mut books = self.store.books()?;

        if let Some(term) = active_filter(&filter.search) {
            books.retain(|b| contains_ci(&b.title, term) || contains_ci(&b.author, term));
        }
        if let Some(author) = active_filter(&filter.author) {
            books.retain(|b| contains_ci(&b.author, author));
        }
        if let Some(category) = active_filter(&filter.category) {
            books.retain(|b| contains_ci(&b.category, category));
        }

        books.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(books)
    }

    /// Get a book by id
    pub fn get_book(&self, id: u64) -> Result<Option<Book>> {
        Ok(self.store.books()?.into_iter().find(|b| b.id == id))
    }

    /// Distinct non-blank categories across all books, sorted ascending
    pub fn list_categories(&self) -> Result<Vec<String>> {
        let categories: BTreeSet<String> = self
            .store
            .books()?
            .into_iter()
            .map(|b| b.category)
            .filter(|c| !c.trim().is_empty())
            .collect();
        Ok(categories.into_iter().collect())
    }

    // =========================================================================
    // Book Mutations
    // =========================================================================

    /// Add a book; the store assigns its id
    pub fn add_book(&self, book: Book) -> Result<Book> {
        self.store.insert_book(book)
    }

    // =========================================================================
    // Review Queries
    // =========================================================================

    /// Reviews for one book, newest first
    pub fn list_reviews_for_book(&self, book_id: u64) -> Result<Vec<Review>> {
        let mut reviews = self.store.reviews()?;
        reviews.retain(|r| r.book_id == book_id);
        sort_newest_first(&mut reviews);
        Ok(reviews)
    }

    /// Reviews by one user (case-insensitive exact name), newest first
    pub fn list_reviews_by_user(&self, user_name: &str) -> Result<Vec<Review>> {
        let mut reviews = self.store.reviews()?;
        reviews.retain(|r| r.user_name.eq_ignore_ascii_case(user_name));
        sort_newest_first(&mut reviews);
        Ok(reviews)
    }

    /// Get a review by id
    pub fn get_review(&self, id: u64) -> Result<Option<Review>> {
        Ok(self.store.reviews()?.into_iter().find(|r| r.id == id))
    }

    // =========================================================================
    // Review Mutations
    // =========================================================================

    /// Add a review; the store assigns its id and creation time
    pub fn add_review(&self, review: Review) -> Result<Review> {
        self.store.insert_review(review)
    }

    /// Update an existing review's rating and comment
    pub fn update_review(&self, review: Review) -> Result<Review> {
        self.store.update_review(review)
    }

    /// Delete a review by id
    pub fn delete_review(&self, id: u64) -> Result<()> {
        self.store.delete_review(id)
    }
}

// =============================================================================
// Private Helpers
// =============================================================================

/// A filter counts only when present and non-blank
fn active_filter(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().filter(|f| !f.trim().is_empty())
}

/// Case-insensitive substring containment
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Newest first; ties keep insertion order
fn sort_newest_first(reviews: &mut [Review]) {
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
