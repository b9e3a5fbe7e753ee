//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Course catalog
//! GET  /health          - Health check
//!
//! # Auth
//! GET  /signup          - Signup page
//! POST /signup          - Create account
//! GET  /login           - Login page
//! POST /login           - Login action
//! POST /logout          - Logout action
//!
//! # Purchases (requires auth)
//! GET  /dashboard       - Purchased courses
//! POST /create-order    - JSON: open a gateway order for a course
//! POST /verify-payment  - JSON: verify gateway callback, unlock course
//!
//! # Admin (requires auth + admin)
//! GET  /admin           - Catalog management
//! POST /admin/courses   - Create a course
//! ```

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod home;
pub mod orders;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::middleware::OptionalAuth;
use crate::models::CurrentUser;
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the order lifecycle routes router (JSON endpoints).
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/create-order", post(orders::create_order))
        .route("/verify-payment", post(orders::verify_payment))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::index))
        .route("/courses", post(admin::create_course))
}

/// Create all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Dashboard
        .route("/dashboard", get(dashboard::dashboard))
        // Auth routes
        .merge(auth_routes())
        // Order lifecycle (JSON)
        .merge(order_routes())
        // Admin routes
        .nest("/admin", admin_routes())
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub current_user: Option<CurrentUser>,
}

/// Fallback handler rendering the not-found page.
pub async fn not_found(OptionalAuth(current_user): OptionalAuth) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate { current_user })
}
