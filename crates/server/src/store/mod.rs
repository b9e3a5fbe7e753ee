//! Embedded single-file store.
//!
//! The entire dataset (users, courses, purchases) lives in one JSON
//! document. The document is loaded once at startup, held in memory behind
//! an async lock, and rewritten in full after every mutation. Mutations run
//! as atomic read-modify-write operations under the write lock, so two
//! concurrent requests can no longer lose each other's writes or collide on
//! id assignment; the write itself goes through a temp file and rename so a
//! crash mid-write cannot truncate the store.
//!
//! # On-disk format
//!
//! ```json
//! { "users": [...], "courses": [...], "purchases": [...] }
//! ```

pub mod courses;
pub mod purchases;
pub mod users;

pub use courses::CourseRepository;
pub use purchases::PurchaseRepository;
pub use users::UserRepository;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{Course, Purchase, User};

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the store file failed.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file does not parse, or the dataset failed to serialize.
    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A uniqueness rule was violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// No record matched.
    #[error("record not found")]
    NotFound,
}

/// The full persisted dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub courses: Vec<Course>,
    pub purchases: Vec<Purchase>,
}

/// Handle to the store.
///
/// Cheaply cloneable; all clones share the same in-memory dataset and lock.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    path: PathBuf,
    dataset: RwLock<Dataset>,
}

impl Store {
    /// Open the store at `path`, creating an empty dataset if the file does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be read or the parent
    /// directory cannot be created, and `StoreError::Serialization` if an
    /// existing file does not parse.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let dataset = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Some(parent) = path.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                Dataset::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            inner: Arc::new(StoreInner {
                path,
                dataset: RwLock::new(dataset),
            }),
        })
    }

    /// Run a read-only operation against the dataset.
    pub async fn read<T>(&self, f: impl FnOnce(&Dataset) -> T) -> T {
        let dataset = self.inner.dataset.read().await;
        f(&dataset)
    }

    /// Run a mutation as an atomic read-modify-write.
    ///
    /// The closure runs under the write lock; if it succeeds the full
    /// document is persisted before the lock is released, so mutations
    /// observe each other in order and the file always reflects the last
    /// completed one. If the closure fails nothing is written.
    ///
    /// # Errors
    ///
    /// Returns the closure's error, or `StoreError::Io`/`Serialization` if
    /// persisting fails.
    pub async fn update<T>(
        &self,
        f: impl FnOnce(&mut Dataset) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut dataset = self.inner.dataset.write().await;
        let value = f(&mut dataset)?;
        persist(&self.inner.path, &dataset).await?;
        Ok(value)
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.inner.path
    }
}

/// Write the dataset to disk via a temp file and rename.
async fn persist(path: &Path, dataset: &Dataset) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec_pretty(dataset)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, &bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

/// Next id for a collection: `max(existing) + 1`, or 1 when empty.
pub(crate) fn next_id(ids: impl Iterator<Item = i32>) -> i32 {
    ids.max().map_or(1, |max| max + 1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use coursehub_core::{CourseId, Price};
    use crate::models::NewCourse;

    fn temp_store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("store.json")
    }

    #[test]
    fn test_next_id_empty() {
        assert_eq!(next_id(std::iter::empty()), 1);
    }

    #[test]
    fn test_next_id_max_plus_one() {
        assert_eq!(next_id([3, 1, 7].into_iter()), 8);
    }

    #[tokio::test]
    async fn test_open_creates_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(temp_store_path(&dir)).await.unwrap();

        let counts = store
            .read(|d| (d.users.len(), d.courses.len(), d.purchases.len()))
            .await;
        assert_eq!(counts, (0, 0, 0));
    }

    #[tokio::test]
    async fn test_mutation_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);

        let store = Store::open(&path).await.unwrap();
        let course = CourseRepository::new(&store)
            .create(NewCourse {
                title: "Intro to Rust".to_string(),
                description: "Ownership without tears".to_string(),
                price: Price::new(500),
                thumbnail: "/static/rust.png".to_string(),
                video_url: "https://videos.example.com/rust".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(course.id, CourseId::new(1));

        // A fresh handle reading the same file sees the mutation.
        let reopened = Store::open(&path).await.unwrap();
        let titles = reopened
            .read(|d| d.courses.iter().map(|c| c.title.clone()).collect::<Vec<_>>())
            .await;
        assert_eq!(titles, vec!["Intro to Rust".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_mutation_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);

        let store = Store::open(&path).await.unwrap();
        let result: Result<(), StoreError> = store
            .update(|d| {
                d.courses.clear();
                Err(StoreError::NotFound)
            })
            .await;
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_open_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let result = Store::open(&path).await;
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_missing_arrays_default_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);
        tokio::fs::write(&path, br#"{"users": []}"#).await.unwrap();

        let store = Store::open(&path).await.unwrap();
        let counts = store
            .read(|d| (d.courses.len(), d.purchases.len()))
            .await;
        assert_eq!(counts, (0, 0));
    }
}
