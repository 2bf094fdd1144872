//! # ShelfDB
//!
//! A file-backed library-catalog store with:
//! - Three flat JSON document collections (books, reviews, users)
//! - Whole-document rewrite on every mutation (atomic replace)
//! - A single store-wide write lock (no lost updates)
//! - Credential hashing and case-insensitive user lookup
//! - Filtered, stably-ordered catalog and review queries
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Presentation Layer                        │
//! │            (routing, sessions, authorization)                │
//! └───────────┬─────────────────────────────────┬───────────────┘
//!             │                                 │
//! ┌───────────▼───────────┐         ┌───────────▼───────────────┐
//! │        Catalog        │         │    CredentialService      │
//! │  (queries, mutations) │         │  (hash, validate, signup) │
//! └───────────┬───────────┘         └───────────┬───────────────┘
//!             │                                 │
//!             └───────────────┬─────────────────┘
//!                             ▼
//!                  ┌─────────────────────┐
//!                  │    DocumentStore    │
//!                  │   (seed, repair,    │
//!                  │  load-mutate-save)  │
//!                  └──────────┬──────────┘
//!                             ▼
//!          books.json    reviews.json    users.json
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod store;
pub mod catalog;
pub mod auth;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, ShelfError};
pub use config::Config;
pub use model::{Book, Review, User};
pub use store::DocumentStore;
pub use catalog::{BookFilter, Catalog};
pub use auth::CredentialService;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ShelfDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
