//! Catalog management routes.
//!
//! Admin-only. Every handler re-checks the admin capability against the
//! store record via `require_admin`; the session is only trusted to name
//! the user.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use coursehub_core::Price;

use crate::filters;
use crate::middleware::require_admin;
use crate::models::{Course, CurrentUser, NewCourse};
use crate::state::AppState;
use crate::store::CourseRepository;

/// Catalog management page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/index.html")]
pub struct AdminTemplate {
    pub courses: Vec<Course>,
    pub current_user: Option<CurrentUser>,
}

/// Course creation form data.
///
/// Field names match the admin form (`videoUrl`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseForm {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub thumbnail: String,
    pub video_url: String,
}

/// GET /admin - catalog management page.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Response {
    let admin = match require_admin(&state, &session).await {
        Ok(admin) => admin,
        Err(response) => return response,
    };

    let courses = CourseRepository::new(state.store()).list().await;

    AdminTemplate {
        courses,
        current_user: Some(CurrentUser::from(&admin)),
    }
    .into_response()
}

/// POST /admin/courses - append a course and return to the catalog page.
#[instrument(skip(state, session, form))]
pub async fn create_course(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CourseForm>,
) -> Response {
    if let Err(response) = require_admin(&state, &session).await {
        return response;
    }

    let new_course = NewCourse {
        title: form.title,
        description: form.description,
        price: Price::new(form.price),
        thumbnail: form.thumbnail,
        video_url: form.video_url,
    };

    match CourseRepository::new(state.store()).create(new_course).await {
        Ok(course) => {
            tracing::info!(course_id = %course.id, title = %course.title, "course created");
            Redirect::to("/admin").into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create course: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
