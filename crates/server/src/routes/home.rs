//! Home page: the public course catalog.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::{Course, CurrentUser};
use crate::state::AppState;
use crate::store::CourseRepository;

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub courses: Vec<Course>,
    pub current_user: Option<CurrentUser>,
    /// Gateway public key id embedded for the checkout script; empty when
    /// the gateway is not configured.
    pub gateway_key: String,
}

/// Display the course catalog.
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(current_user): OptionalAuth,
) -> impl IntoResponse {
    let courses = CourseRepository::new(state.store()).list().await;

    IndexTemplate {
        courses,
        current_user,
        gateway_key: state.gateway_key_id(),
    }
}
