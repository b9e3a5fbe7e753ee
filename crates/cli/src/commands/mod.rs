//! CLI command implementations.

pub mod admin;
pub mod seed;

use std::path::PathBuf;

/// Store file path from the environment, matching the server's default.
pub(crate) fn store_path_from_env() -> PathBuf {
    PathBuf::from(
        std::env::var("COURSEHUB_STORE_PATH").unwrap_or_else(|_| "data/store.json".to_string()),
    )
}
