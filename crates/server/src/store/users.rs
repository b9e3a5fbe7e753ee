//! User repository for store operations.

use coursehub_core::{Email, UserId};

use super::{Store, StoreError, next_id};
use crate::models::User;

/// Repository for user store operations.
pub struct UserRepository<'a> {
    store: &'a Store,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Get a user by email, compared ignoring case.
    pub async fn get_by_email(&self, email: &Email) -> Option<User> {
        self.store
            .read(|d| {
                d.users
                    .iter()
                    .find(|u| u.email.eq_ignore_case(email))
                    .cloned()
            })
            .await
    }

    /// Get a user by ID.
    pub async fn get_by_id(&self, id: UserId) -> Option<User> {
        self.store
            .read(|d| d.users.iter().find(|u| u.id == id).cloned())
            .await
    }

    /// Create a new user.
    ///
    /// The email is stored exactly as provided; uniqueness is enforced
    /// ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if a user with the same email (ignoring
    /// case) already exists, or a persistence error from the store.
    pub async fn create(
        &self,
        name: &str,
        email: Email,
        password_hash: String,
        is_admin: bool,
    ) -> Result<User, StoreError> {
        let name = name.to_owned();
        self.store
            .update(move |d| {
                if d.users.iter().any(|u| u.email.eq_ignore_case(&email)) {
                    return Err(StoreError::Conflict("email already exists".to_owned()));
                }

                let user = User {
                    id: UserId::new(next_id(d.users.iter().map(|u| u.id.as_i32()))),
                    name,
                    email,
                    password_hash,
                    is_admin,
                };
                d.users.push(user.clone());
                Ok(user)
            })
            .await
    }
}
