//! Seed the store with demo courses.
//!
//! Intended for local development: gives the catalog something to render
//! and the checkout flow something to sell.

use thiserror::Error;

use coursehub_core::Price;
use coursehub_server::models::NewCourse;
use coursehub_server::store::{CourseRepository, Store, StoreError};

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Store could not be opened or written.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Append demo courses to the catalog.
///
/// Appends unconditionally, like the admin form; running twice seeds twice.
///
/// # Returns
///
/// The number of courses created.
///
/// # Errors
///
/// Returns `SeedError::Store` if the store cannot be opened or persisted.
pub async fn demo_courses() -> Result<usize, SeedError> {
    dotenvy::dotenv().ok();

    let store_path = super::store_path_from_env();
    tracing::info!(path = %store_path.display(), "Opening store");
    let store = Store::open(store_path).await?;

    let courses = CourseRepository::new(&store);
    let samples = demo_catalog();
    let count = samples.len();

    for course in samples {
        let created = courses.create(course).await?;
        tracing::info!(course_id = %created.id, title = %created.title, "Seeded course");
    }

    Ok(count)
}

fn demo_catalog() -> Vec<NewCourse> {
    vec![
        NewCourse {
            title: "Rust for Web Developers".to_string(),
            description: "Build and ship a production web service.".to_string(),
            price: Price::new(500),
            thumbnail: "/static/thumbs/rust-web.svg".to_string(),
            video_url: "https://videos.example.com/rust-web".to_string(),
        },
        NewCourse {
            title: "Payments Engineering 101".to_string(),
            description: "Orders, callbacks, and signatures end to end.".to_string(),
            price: Price::new(750),
            thumbnail: "/static/thumbs/payments.svg".to_string(),
            video_url: "https://videos.example.com/payments-101".to_string(),
        },
        NewCourse {
            title: "Practical Observability".to_string(),
            description: "Structured logging that pays for itself.".to_string(),
            price: Price::new(400),
            thumbnail: "/static/thumbs/observability.svg".to_string(),
            video_url: "https://videos.example.com/observability".to_string(),
        },
    ]
}
