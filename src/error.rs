//! Error types for ShelfDB
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Unified error type for ShelfDB operations
#[derive(Debug, Error)]
pub enum ShelfError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    /// The root document of a collection is unparseable. Fatal to the
    /// triggering operation; per-record field damage is tolerated instead.
    #[error("malformed store document {path}: {reason}")]
    MalformedStore { path: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Registration Errors
    // -------------------------------------------------------------------------
    /// A user with this name (compared case-insensitively) already exists.
    #[error("user name already exists: {0}")]
    DuplicateUser(String),

    // -------------------------------------------------------------------------
    // Review Mutation Errors
    // -------------------------------------------------------------------------
    /// Update or delete of a review id that is not in the store.
    #[error("review not found: {0}")]
    ReviewNotFound(u64),
}
