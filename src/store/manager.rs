//! Document Store manager
//!
//! Owns the on-disk collections and translates between persisted JSON
//! documents and in-memory entity sequences.
//!
//! ## Concurrency:
//! - `write_lock`: one store-wide mutex; every mutation holds it for
//!   its full load–mutate–save cycle, across all three collections
//! - Reads take no lock; the atomic replace in [`super::document`]
//!   keeps them from ever observing a partial file

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::auth::CredentialService;
use crate::config::Config;
use crate::error::{Result, ShelfError};
use crate::model::{Book, Review, User};

use super::document;

/// Manages the three collection documents
#[derive(Debug)]
pub struct DocumentStore {
    /// Directory holding the collection files
    data_dir: PathBuf,

    books_path: PathBuf,
    reviews_path: PathBuf,
    users_path: PathBuf,

    /// Serializes mutations across all collections
    write_lock: Mutex<()>,
}

impl DocumentStore {
    // =========================================================================
    // Internal Path Constants
    // =========================================================================
    const BOOKS_FILENAME: &'static str = "books.json";
    const REVIEWS_FILENAME: &'static str = "reviews.json";
    const USERS_FILENAME: &'static str = "users.json";

    /// The one structurally special user name: always an administrator.
    const ADMIN_USER_NAME: &'static str = "admin";

    /// Open or create a store with the given config
    ///
    /// On startup:
    /// 1. Create the data directory if it doesn't exist
    /// 2. Seed any missing collection file with default content
    /// 3. Repair the administrator flag on every existing user
    ///
    /// Idempotent: reopening never alters existing valid data beyond
    /// the repair pass.
    pub fn open(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;

        let store = Self {
            books_path: config.data_dir.join(Self::BOOKS_FILENAME),
            reviews_path: config.data_dir.join(Self::REVIEWS_FILENAME),
            users_path: config.data_dir.join(Self::USERS_FILENAME),
            data_dir: config.data_dir,
            write_lock: Mutex::new(()),
        };

        store.seed_missing_collections()?;
        store.repair_admin_flags()?;

        Ok(store)
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_dir(path).build())
    }

    // =========================================================================
    // Reads (no lock)
    // =========================================================================

    /// Load the full book collection
    pub fn books(&self) -> Result<Vec<Book>> {
        document::load(&self.books_path)
    }

    /// Load the full review collection
    pub fn reviews(&self) -> Result<Vec<Review>> {
        document::load(&self.reviews_path)
    }

    /// Load the full user collection
    pub fn users(&self) -> Result<Vec<User>> {
        document::load(&self.users_path)
    }

    /// Look up a user by case-insensitive exact name
    pub fn find_user(&self, user_name: &str) -> Result<Option<User>> {
        Ok(self
            .users()?
            .into_iter()
            .find(|u| u.user_name.eq_ignore_ascii_case(user_name)))
    }

    // =========================================================================
    // Mutations (write lock, load–mutate–save)
    // =========================================================================

    /// Insert a book, assigning the next id
    pub fn insert_book(&self, mut book: Book) -> Result<Book> {
        let _guard = self.write_lock.lock();

        let mut books = self.books()?;
        book.id = next_id(books.iter().map(|b| b.id));
        books.push(book.clone());
        document::save(&self.books_path, &books)?;

        debug!(id = book.id, title = %book.title, "book inserted");
        Ok(book)
    }

    /// Insert a review, assigning the next id and the creation time
    ///
    /// Caller-supplied id and timestamp are overwritten.
    pub fn insert_review(&self, mut review: Review) -> Result<Review> {
        let _guard = self.write_lock.lock();

        let mut reviews = self.reviews()?;
        review.id = next_id(reviews.iter().map(|r| r.id));
        review.created_at = Utc::now();
        reviews.push(review.clone());
        document::save(&self.reviews_path, &reviews)?;

        debug!(id = review.id, book_id = review.book_id, "review inserted");
        Ok(review)
    }

    /// Replace the rating and comment of an existing review
    ///
    /// Id, book id, user name, and the original timestamp are untouched.
    /// Fails with `ReviewNotFound` if the id is absent.
    pub fn update_review(&self, review: Review) -> Result<Review> {
        let _guard = self.write_lock.lock();

        let mut reviews = self.reviews()?;
        let existing = reviews
            .iter_mut()
            .find(|r| r.id == review.id)
            .ok_or(ShelfError::ReviewNotFound(review.id))?;

        existing.rating = review.rating;
        existing.comment = review.comment;
        let updated = existing.clone();
        document::save(&self.reviews_path, &reviews)?;

        debug!(id = updated.id, "review updated");
        Ok(updated)
    }

    /// Remove a review by id
    ///
    /// Fails with `ReviewNotFound` if the id is absent; deleting is
    /// never a silent no-op.
    pub fn delete_review(&self, id: u64) -> Result<()> {
        let _guard = self.write_lock.lock();

        let mut reviews = self.reviews()?;
        let len_before = reviews.len();
        reviews.retain(|r| r.id != id);
        if reviews.len() == len_before {
            return Err(ShelfError::ReviewNotFound(id));
        }
        document::save(&self.reviews_path, &reviews)?;

        debug!(id, "review deleted");
        Ok(())
    }

    /// Insert a user, assigning the next id
    ///
    /// Fails with `DuplicateUser` if the name already exists under
    /// case-insensitive comparison; the existing record is unchanged.
    pub fn insert_user(&self, mut user: User) -> Result<User> {
        let _guard = self.write_lock.lock();

        let mut users = self.users()?;
        if users
            .iter()
            .any(|u| u.user_name.eq_ignore_ascii_case(&user.user_name))
        {
            return Err(ShelfError::DuplicateUser(user.user_name));
        }

        user.id = next_id(users.iter().map(|u| u.id));
        users.push(user.clone());
        document::save(&self.users_path, &users)?;

        debug!(id = user.id, user = %user.user_name, "user inserted");
        Ok(user)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Create any missing collection file with its default content
    fn seed_missing_collections(&self) -> Result<()> {
        if !self.books_path.exists() {
            info!("seeding default catalog");
            let books = vec![
                Book {
                    id: 1,
                    title: "El Quijote".to_string(),
                    author: "Miguel de Cervantes".to_string(),
                    category: "Clásico".to_string(),
                    summary: "Las aventuras de Don Quijote y Sancho Panza.".to_string(),
                },
                Book {
                    id: 2,
                    title: "Cien años de soledad".to_string(),
                    author: "Gabriel García Márquez".to_string(),
                    category: "Realismo mágico".to_string(),
                    summary: "La historia de la familia Buendía en Macondo.".to_string(),
                },
            ];
            document::save(&self.books_path, &books)?;
        }

        if !self.reviews_path.exists() {
            document::save::<Review>(&self.reviews_path, &[])?;
        }

        if !self.users_path.exists() {
            info!("creating bootstrap administrator account");
            let admin = User {
                id: 1,
                user_name: Self::ADMIN_USER_NAME.to_string(),
                password_hash: CredentialService::hash_password(Self::ADMIN_USER_NAME),
                is_admin: true,
            };
            document::save(&self.users_path, &[admin])?;
        }

        Ok(())
    }

    /// Derive the administrator flag for every existing user
    ///
    /// `is_admin` must be true exactly when the name is `admin`,
    /// case-insensitively. Rewriting also materializes flags that were
    /// absent from older records. Skipped when no user record exists.
    fn repair_admin_flags(&self) -> Result<()> {
        let mut users = self.users()?;
        if users.is_empty() {
            return Ok(());
        }

        for user in &mut users {
            let should_be_admin = user.user_name.eq_ignore_ascii_case(Self::ADMIN_USER_NAME);
            if user.is_admin != should_be_admin {
                debug!(user = %user.user_name, admin = should_be_admin, "repairing administrator flag");
                user.is_admin = should_be_admin;
            }
        }

        document::save(&self.users_path, &users)
    }
}

/// Next id = max existing id + 1, or 1 for an empty collection.
/// Gaps left by deletions are never refilled.
fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max + 1)
}
