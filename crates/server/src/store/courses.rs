//! Course repository for store operations.

use coursehub_core::CourseId;

use super::{Store, StoreError, next_id};
use crate::models::{Course, NewCourse};

/// Repository for catalog store operations.
pub struct CourseRepository<'a> {
    store: &'a Store,
}

impl<'a> CourseRepository<'a> {
    /// Create a new course repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// All courses in catalog order.
    pub async fn list(&self) -> Vec<Course> {
        self.store.read(|d| d.courses.clone()).await
    }

    /// Get a course by ID.
    pub async fn get(&self, id: CourseId) -> Option<Course> {
        self.store
            .read(|d| d.courses.iter().find(|c| c.id == id).cloned())
            .await
    }

    /// Append a new course.
    ///
    /// No validation beyond id assignment: price positivity, URL shape and
    /// duplicate titles are all accepted, matching the admin contract.
    ///
    /// # Errors
    ///
    /// Returns a persistence error from the store.
    pub async fn create(&self, new: NewCourse) -> Result<Course, StoreError> {
        self.store
            .update(move |d| {
                let course = Course {
                    id: CourseId::new(next_id(d.courses.iter().map(|c| c.id.as_i32()))),
                    title: new.title,
                    description: new.description,
                    price: new.price,
                    thumbnail: new.thumbnail,
                    video_url: new.video_url,
                };
                d.courses.push(course.clone());
                Ok(course)
            })
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use coursehub_core::Price;

    fn sample(title: &str) -> NewCourse {
        NewCourse {
            title: title.to_owned(),
            description: "desc".to_owned(),
            price: Price::new(500),
            thumbnail: "/static/thumb.png".to_owned(),
            video_url: "https://videos.example.com/1".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("store.json")).await.unwrap();
        let courses = CourseRepository::new(&store);

        let created = courses.create(sample("Intro to Rust")).await.unwrap();
        let fetched = courses.get(created.id).await.unwrap();
        assert_eq!(fetched.title, "Intro to Rust");
        assert_eq!(courses.get(CourseId::new(99)).await, None);
    }

    #[tokio::test]
    async fn test_duplicate_titles_are_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("store.json")).await.unwrap();
        let courses = CourseRepository::new(&store);

        courses.create(sample("Same")).await.unwrap();
        courses.create(sample("Same")).await.unwrap();
        assert_eq!(courses.list().await.len(), 2);
    }
}
