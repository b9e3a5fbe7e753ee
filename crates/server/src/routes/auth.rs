//! Authentication route handlers.
//!
//! Form-based signup, login, and logout. Failures re-render the form with
//! an inline error and a 400 status; nothing here answers JSON.

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

use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::{AuthError, AuthService};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Signup form data.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signup.html")]
pub struct SignupTemplate {
    pub error: Option<String>,
    pub current_user: Option<CurrentUser>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub current_user: Option<CurrentUser>,
}

// =============================================================================
// Signup Routes
// =============================================================================

/// Display the signup page.
pub async fn signup_page() -> impl IntoResponse {
    SignupTemplate {
        error: None,
        current_user: None,
    }
}

/// Handle signup form submission.
///
/// Creates the account, logs the new user in, and redirects to the
/// dashboard.
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignupForm>,
) -> Response {
    let auth = AuthService::new(state.store());

    match auth.signup(&form.name, &form.email, &form.password).await {
        Ok(user) => {
            let current = CurrentUser::from(&user);
            if let Err(e) = set_current_user(&session, &current).await {
                tracing::error!("Failed to set session: {e}");
                return Redirect::to("/login").into_response();
            }

            Redirect::to("/dashboard").into_response()
        }
        Err(AuthError::EmailTaken) => signup_error("Email already exists."),
        Err(AuthError::InvalidEmail(e)) => signup_error(&e.to_string()),
        Err(AuthError::WeakPassword(msg)) => signup_error(&msg),
        Err(e) => {
            tracing::error!("Signup failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                SignupTemplate {
                    error: Some("Something went wrong. Please try again.".to_string()),
                    current_user: None,
                },
            )
                .into_response()
        }
    }
}

fn signup_error(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        SignupTemplate {
            error: Some(message.to_owned()),
            current_user: None,
        },
    )
        .into_response()
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate {
        error: None,
        current_user: None,
    }
}

/// Handle login form submission.
///
/// Admins land on the catalog management page, everyone else on the
/// dashboard.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let auth = AuthService::new(state.store());

    match auth.login(&form.email, &form.password).await {
        Ok(user) => {
            let current = CurrentUser::from(&user);
            if let Err(e) = set_current_user(&session, &current).await {
                tracing::error!("Failed to set session: {e}");
                return Redirect::to("/login").into_response();
            }

            let destination = if user.is_admin { "/admin" } else { "/dashboard" };
            Redirect::to(destination).into_response()
        }
        Err(AuthError::InvalidCredentials) => (
            StatusCode::BAD_REQUEST,
            LoginTemplate {
                error: Some("Invalid credentials.".to_string()),
                current_user: None,
            },
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Login failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                LoginTemplate {
                    error: Some("Something went wrong. Please try again.".to_string()),
                    current_user: None,
                },
            )
                .into_response()
        }
    }
}

// =============================================================================
// Logout Route
// =============================================================================

/// Handle logout.
///
/// Clears the stored identity and destroys the session.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear session: {e}");
    }

    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {e}");
    }

    Redirect::to("/").into_response()
}
