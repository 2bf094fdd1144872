//! Document Store Module
//!
//! Persistence layer over three flat JSON collection documents.
//!
//! ## Responsibilities
//! - Seed missing collection files on open (two-book catalog, empty
//!   reviews, bootstrap administrator)
//! - Repair the administrator flag on every open
//! - Whole-collection reads with lenient per-field parsing
//! - Load–mutate–save mutations under a single write lock
//!
//! ## File Format
//! ```text
//! {data_dir}/
//!   ├── books.json     [ {id, title, author, category, summary}, ... ]
//!   ├── reviews.json   [ {id, bookId, userName, rating, comment,
//!   │                     createdAt}, ... ]
//!   └── users.json     [ {id, userName, passwordHash, isAdmin}, ... ]
//! ```

mod document;
mod manager;

pub use manager::DocumentStore;
