//! Authentication middleware and extractors.
//!
//! Provides extractors for requiring a logged-in user in route handlers,
//! and a helper for admin-only handlers that re-checks the admin bit
//! against the store record on every request (the session never carries
//! the capability).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentUser, User, session_keys};
use crate::state::AppState;
use crate::store::UserRepository;

/// Paths that answer JSON and should get a 401 instead of a login redirect.
const API_PATHS: &[&str] = &["/create-order", "/verify-payment"];

/// Extractor that requires a logged-in user.
///
/// If the user is not logged in, returns a redirect to the login page for
/// HTML requests, or 401 Unauthorized for the JSON endpoints.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.name)
/// }
/// ```
pub struct RequireAuth(pub CurrentUser);

/// Error returned when authentication is required but the user is not logged in.
pub enum AuthRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for JSON requests).
    Unauthorized,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AuthRejection::Unauthorized)?;

        // Get the current user from the session
        let user: CurrentUser = session
            .get(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten()
            .ok_or_else(|| {
                let is_api = API_PATHS.contains(&parts.uri.path());
                if is_api {
                    AuthRejection::Unauthorized
                } else {
                    AuthRejection::RedirectToLogin
                }
            })?;

        Ok(Self(user))
    }
}

/// Extractor that optionally gets the current user.
///
/// Unlike `RequireAuth`, this does not reject the request if the user is
/// not logged in.
pub struct OptionalAuth(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentUser>(session_keys::CURRENT_USER)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(user))
    }
}

/// Forbidden page rendered for non-admin access to admin routes.
#[derive(Template, WebTemplate)]
#[template(path = "forbidden.html")]
struct ForbiddenTemplate {
    current_user: Option<CurrentUser>,
}

/// Require an admin for the current request.
///
/// Resolves the capability server-side: the session only identifies the
/// user, and the authoritative `isAdmin` flag is read from the store record
/// here, on every request.
///
/// # Errors
///
/// Returns a ready-made response: a login redirect when unauthenticated,
/// or a rendered 403 page when the user is not an admin (or no longer
/// exists in the store).
pub async fn require_admin(state: &AppState, session: &Session) -> Result<User, Response> {
    let current: CurrentUser = session
        .get(session_keys::CURRENT_USER)
        .await
        .ok()
        .flatten()
        .ok_or_else(|| Redirect::to("/login").into_response())?;

    let user = UserRepository::new(state.store())
        .get_by_id(current.id)
        .await;

    match user {
        Some(user) if user.is_admin => Ok(user),
        _ => {
            tracing::warn!(user_id = %current.id, "non-admin denied admin route");
            Err((
                StatusCode::FORBIDDEN,
                ForbiddenTemplate {
                    current_user: Some(current),
                },
            )
                .into_response())
        }
    }
}

/// Helper to set the current user in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Helper to clear the current user from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentUser>(session_keys::CURRENT_USER)
        .await?;
    Ok(())
}
