//! Unified error handling for JSON endpoints.
//!
//! Provides a unified `AppError` type for the order/payment flows. Form
//! flows render their page with an inline error instead; everything that
//! answers JSON should return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::gateway::GatewayError;
use crate::services::PaymentError;
use crate::store::StoreError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Gateway call failed.
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Gateway credentials are absent.
    #[error("payment gateway is not configured")]
    GatewayNotConfigured,

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// User is not authenticated.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// User lacks the required capability.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Bad request from client.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Payment callback signature mismatch.
    #[error("payment verification failed")]
    VerificationFailed,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Store(_) | Self::Internal(_) | Self::GatewayNotConfigured => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Gateway(_) => StatusCode::BAD_GATEWAY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) | Self::VerificationFailed => StatusCode::BAD_REQUEST,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request error");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Store(_) | Self::Internal(_) => "Internal server error".to_string(),
            Self::Gateway(_) => "Unable to create order".to_string(),
            Self::GatewayNotConfigured => {
                "Payment gateway is not configured. Add API keys in .env".to_string()
            }
            Self::NotFound(what) => format!("{what} not found"),
            Self::Unauthorized(_) => "Authentication required".to_string(),
            Self::Forbidden(_) => "Forbidden".to_string(),
            Self::BadRequest(msg) => msg.clone(),
            Self::VerificationFailed => "Payment verification failed".to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<PaymentError> for AppError {
    fn from(e: PaymentError) -> Self {
        match e {
            PaymentError::CourseNotFound => Self::NotFound("Course".to_string()),
            PaymentError::PurchaseNotFound => Self::NotFound("Purchase record".to_string()),
            PaymentError::VerificationFailed => Self::VerificationFailed,
            PaymentError::Gateway(err) => Self::Gateway(err),
            PaymentError::Store(err) => Self::Store(err),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
