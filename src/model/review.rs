//! Review entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de;

/// A user review of a catalog entry
///
/// `book_id` is an unenforced reference: the book may have been removed
/// externally, leaving the review dangling. `user_name` is free text and
/// is not required to match a registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique id, assigned sequentially by the store
    #[serde(default, deserialize_with = "de::id_or_zero")]
    pub id: u64,

    /// Id of the reviewed book
    #[serde(default, deserialize_with = "de::id_or_zero")]
    pub book_id: u64,

    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub user_name: String,

    #[serde(default, deserialize_with = "de::rating_or_zero")]
    pub rating: u32,

    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub comment: String,

    /// Assigned by the store at insert time, immutable thereafter.
    /// Persisted as an ISO-8601 string.
    #[serde(default = "Utc::now", deserialize_with = "de::timestamp_or_now")]
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Creates a review with an unassigned id and a placeholder
    /// timestamp. The store overwrites both at insert time.
    pub fn new(book_id: u64, user_name: impl Into<String>, rating: u32, comment: impl Into<String>) -> Self {
        Self {
            id: 0,
            book_id,
            user_name: user_name.into(),
            rating,
            comment: comment.into(),
            created_at: Utc::now(),
        }
    }
}
