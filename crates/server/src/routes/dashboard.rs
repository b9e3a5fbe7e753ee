//! Dashboard: the caller's unlocked courses.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::middleware::RequireAuth;
use crate::models::{Course, CurrentUser};
use crate::state::AppState;
use crate::store::{CourseRepository, PurchaseRepository};

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub purchased_courses: Vec<Course>,
    pub current_user: Option<CurrentUser>,
}

/// Display the courses the user has paid for.
///
/// Pending purchases don't unlock anything; only `paid` rows count.
pub async fn dashboard(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> impl IntoResponse {
    let paid_ids = PurchaseRepository::new(state.store())
        .paid_course_ids(user.id)
        .await;

    let purchased_courses = CourseRepository::new(state.store())
        .list()
        .await
        .into_iter()
        .filter(|course| paid_ids.contains(&course.id))
        .collect();

    DashboardTemplate {
        purchased_courses,
        current_user: Some(user),
    }
}
