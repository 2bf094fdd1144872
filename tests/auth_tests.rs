//! Tests for CredentialService
//!
//! These tests verify:
//! - Deterministic, collision-free password digests
//! - Validation that never reveals user-missing vs password-wrong
//! - Registration (non-admin, hashed) and duplicate rejection
//! - The bootstrap administrator account

use std::sync::Arc;

use shelfdb::store::DocumentStore;
use shelfdb::{CredentialService, ShelfError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_auth() -> (TempDir, Arc<DocumentStore>, CredentialService) {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(DocumentStore::open_path(temp_dir.path()).unwrap());
    let auth = CredentialService::new(Arc::clone(&store));
    (temp_dir, store, auth)
}

// =============================================================================
// Hashing Tests
// =============================================================================

#[test]
fn test_hash_password_is_deterministic() {
    assert_eq!(
        CredentialService::hash_password("s3cret"),
        CredentialService::hash_password("s3cret")
    );
}

#[test]
fn test_hash_password_distinct_inputs_distinct_digests() {
    assert_ne!(
        CredentialService::hash_password("s3cret"),
        CredentialService::hash_password("s3cret ")
    );
    assert_ne!(
        CredentialService::hash_password(""),
        CredentialService::hash_password("a")
    );
}

#[test]
fn test_hash_password_known_digests() {
    // SHA-256 then Base64; 32 digest bytes render as 44 characters
    assert_eq!(
        CredentialService::hash_password("admin"),
        "jGl25bVBBBW96Qi9Te4V37Fnqchz/Eu4qB9vKrRIqRg="
    );
    assert_eq!(
        CredentialService::hash_password("secret"),
        "K7gNU3sdo+OL0wNhqoVWhr3g6s1xYv72ol/pe/Unols="
    );
    assert_eq!(CredentialService::hash_password("x").len(), 44);
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_bootstrap_admin_validates() {
    let (_temp, _store, auth) = setup_temp_auth();

    let user = auth.validate_user("admin", "admin").unwrap().unwrap();
    assert!(user.is_admin);
    assert_eq!(user.id, 1);
}

#[test]
fn test_validate_is_case_insensitive_on_name() {
    let (_temp, _store, auth) = setup_temp_auth();

    let user = auth.validate_user("ADMIN", "admin").unwrap();
    assert!(user.is_some());
}

#[test]
fn test_unknown_user_and_wrong_password_are_indistinguishable() {
    let (_temp, _store, auth) = setup_temp_auth();

    let unknown = auth.validate_user("nobody", "whatever").unwrap();
    let wrong_password = auth.validate_user("admin", "whatever").unwrap();

    assert!(unknown.is_none());
    assert!(wrong_password.is_none());
}

// =============================================================================
// Registration Tests
// =============================================================================

#[test]
fn test_register_user_persists_hashed_non_admin() {
    let (_temp, store, auth) = setup_temp_auth();

    let ana = auth.register_user("ana", "s3cret").unwrap();

    assert_eq!(ana.id, 2); // bootstrap admin holds id 1
    assert!(!ana.is_admin);
    assert_eq!(ana.password_hash, CredentialService::hash_password("s3cret"));

    // Plaintext is never persisted
    let stored = store.find_user("ana").unwrap().unwrap();
    assert_ne!(stored.password_hash, "s3cret");
}

#[test]
fn test_register_then_validate_roundtrip() {
    let (_temp, _store, auth) = setup_temp_auth();
    auth.register_user("ana", "s3cret").unwrap();

    assert!(auth.validate_user("ana", "s3cret").unwrap().is_some());
    assert!(auth.validate_user("ana", "wrong").unwrap().is_none());
}

#[test]
fn test_register_duplicate_any_case_fails_and_preserves_existing() {
    let (_temp, store, auth) = setup_temp_auth();
    auth.register_user("Ana", "original").unwrap();

    let result = auth.register_user("ANA", "usurped");
    assert!(matches!(
        result.unwrap_err(),
        ShelfError::DuplicateUser(name) if name == "ANA"
    ));

    // The existing record is untouched
    let stored = store.find_user("ana").unwrap().unwrap();
    assert_eq!(stored.user_name, "Ana");
    assert_eq!(
        stored.password_hash,
        CredentialService::hash_password("original")
    );
    assert_eq!(store.users().unwrap().len(), 2);
}
