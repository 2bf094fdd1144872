//! Credential Service
//!
//! One-way password hashing, credential validation, and registration.
//!
//! ## Responsibilities
//! - Deterministic password digests (SHA-256, Base64-rendered)
//! - Validation that never reveals whether the user or the password
//!   was wrong
//! - Registration pass-through to the store's uniqueness-checked insert

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::Result;
use crate::model::User;
use crate::store::DocumentStore;

/// Validates and registers user credentials against the store
pub struct CredentialService {
    store: Arc<DocumentStore>,
}

impl CredentialService {
    /// Create a credential service over the given store
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// Digest a password: SHA-256 over the UTF-8 bytes, Base64-encoded
    ///
    /// Deterministic across runs; the digest is the only form in which
    /// passwords are ever persisted or compared.
    pub fn hash_password(password: &str) -> String {
        STANDARD.encode(Sha256::digest(password.as_bytes()))
    }

    /// Validate credentials, returning the user on success
    ///
    /// An unknown user and a wrong password both return `Ok(None)`; the
    /// two outcomes are indistinguishable to the caller.
    pub fn validate_user(&self, user_name: &str, password: &str) -> Result<Option<User>> {
        let user = match self.store.find_user(user_name)? {
            Some(user) => user,
            None => return Ok(None),
        };

        if user.password_hash == Self::hash_password(password) {
            debug!(user = %user.user_name, "credentials validated");
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// Register a non-administrator user with a hashed password
    ///
    /// Fails with `DuplicateUser` if the name already exists under
    /// case-insensitive comparison.
    pub fn register_user(&self, user_name: &str, password: &str) -> Result<User> {
        let user = User::new(user_name, Self::hash_password(password), false);
        self.store.insert_user(user)
    }
}
