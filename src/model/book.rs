//! Book entity definitions.

use serde::{Deserialize, Serialize};

use super::de;

/// A catalog entry
///
/// Immutable once created except via full-record replacement; never
/// deleted in the current scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique id, assigned sequentially by the store
    #[serde(default, deserialize_with = "de::id_or_zero")]
    pub id: u64,

    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub title: String,

    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub author: String,

    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub category: String,

    /// Free-text summary
    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub summary: String,
}

impl Book {
    /// Creates a book with an unassigned id. The store assigns the real
    /// id at insert time.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            author: author.into(),
            category: category.into(),
            summary: summary.into(),
        }
    }
}
