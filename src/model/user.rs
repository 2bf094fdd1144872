//! User entity definitions.

use serde::{Deserialize, Serialize};

use super::de;

/// A registered account
///
/// User names are unique case-insensitively. Only the password digest
/// is ever persisted, never the plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique id, assigned sequentially by the store
    #[serde(default, deserialize_with = "de::id_or_zero")]
    pub id: u64,

    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub user_name: String,

    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub password_hash: String,

    /// Repaired on every store open: true exactly when the user name is
    /// `admin` compared case-insensitively.
    #[serde(default, deserialize_with = "de::bool_or_false")]
    pub is_admin: bool,
}

impl User {
    /// Creates a user with an unassigned id. The store assigns the real
    /// id at insert time.
    pub fn new(user_name: impl Into<String>, password_hash: impl Into<String>, is_admin: bool) -> Self {
        Self {
            id: 0,
            user_name: user_name.into(),
            password_hash: password_hash.into(),
            is_admin,
        }
    }
}
