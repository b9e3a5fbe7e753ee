//! Course record.

use serde::{Deserialize, Serialize};

use coursehub_core::{CourseId, Price};

/// A course in the catalog.
///
/// Created by an admin; never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique course ID, assigned `max(existing) + 1`.
    pub id: CourseId,
    pub title: String,
    pub description: String,
    /// Price in whole currency units; the gateway receives `price * 100`.
    pub price: Price,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Video URL unlocked after purchase.
    pub video_url: String,
}

/// Fields for a course about to be created.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub price: Price,
    pub thumbnail: String,
    pub video_url: String,
}
