//! User record.

use serde::{Deserialize, Serialize};

use coursehub_core::{Email, UserId};

/// A registered account.
///
/// Created at signup (never as admin) or by the CLI. Users are never
/// deleted and have no profile editing; the record is effectively
/// append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID, assigned `max(existing) + 1`.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, unique ignoring case but stored as provided.
    pub email: Email,
    /// Argon2id password hash.
    pub password_hash: String,
    /// Whether the account may manage the catalog.
    ///
    /// Authorization reads this field from the store on every request; it
    /// is never trusted from the session.
    pub is_admin: bool,
}
