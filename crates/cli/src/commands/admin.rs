//! Admin user management commands.
//!
//! # Usage
//!
//! ```bash
//! ch-cli admin create -e admin@example.com -n "Admin Name" -p "a long password"
//! ```
//!
//! Signup on the web surface always creates regular accounts; this command
//! is the only way to mint the admin bit.

use thiserror::Error;

use coursehub_server::services::{AuthError, AuthService};
use coursehub_server::store::{Store, StoreError};

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Store could not be opened or written.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Account creation failed (bad email, weak password, duplicate).
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Create a new admin user.
///
/// # Arguments
///
/// * `email` - Admin's email address
/// * `name` - Admin's display name
/// * `password` - Admin's password (min 8 characters)
///
/// # Returns
///
/// The ID of the created admin user.
///
/// # Errors
///
/// Returns `AdminError::Auth` if validation fails or the email is taken,
/// and `AdminError::Store` if the store cannot be opened or persisted.
pub async fn create_user(email: &str, name: &str, password: &str) -> Result<i32, AdminError> {
    dotenvy::dotenv().ok();

    let store_path = super::store_path_from_env();
    tracing::info!(path = %store_path.display(), "Opening store");
    let store = Store::open(store_path).await?;

    tracing::info!("Creating admin user: {email}");
    let user = AuthService::new(&store)
        .create_admin(name, email, password)
        .await?;

    Ok(user.id.as_i32())
}
