//! Order lifecycle JSON endpoints.
//!
//! The checkout script calls `/create-order` to open a gateway order, hands
//! the browser to the gateway's checkout, and posts the gateway's callback
//! fields to `/verify-payment`.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use coursehub_core::CourseId;

use crate::error::{AppError, Result};
use crate::gateway::GatewayOrder;
use crate::middleware::RequireAuth;
use crate::models::Course;
use crate::services::{PaymentError, PaymentService};
use crate::state::AppState;

// =============================================================================
// Request / Response Types
// =============================================================================

/// Body for `POST /create-order`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub course_id: CourseId,
}

/// Response for `POST /create-order`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    /// The remote order, passed through for the checkout script.
    pub order: GatewayOrder,
    /// The course being bought.
    pub course: Course,
    /// Gateway public key id for the checkout widget.
    pub key_id: String,
}

/// Body for `POST /verify-payment` (the gateway callback fields).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// Response for `POST /verify-payment`.
#[derive(Debug, Serialize)]
pub struct VerifyPaymentResponse {
    pub success: bool,
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Open a gateway order for a course and record a pending purchase.
#[instrument(skip(state, user, payload))]
pub async fn create_order(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>> {
    let gateway = state.gateway().ok_or(AppError::GatewayNotConfigured)?;

    let (order, course) = PaymentService::new(state.store(), gateway)
        .place_order(user.id, payload.course_id)
        .await?;

    Ok(Json(CreateOrderResponse {
        order,
        course,
        key_id: gateway.key_id().to_string(),
    }))
}

/// Verify the gateway callback and unlock the course.
#[instrument(skip(state, user, payload))]
pub async fn verify_payment(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(payload): Json<VerifyPaymentRequest>,
) -> Response {
    let Some(gateway) = state.gateway() else {
        return verification_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Payment gateway is not configured. Add API keys in .env",
        );
    };

    let result = PaymentService::new(state.store(), gateway)
        .confirm_payment(
            user.id,
            &payload.order_id,
            &payload.payment_id,
            &payload.signature,
        )
        .await;

    match result {
        Ok(_) => (
            StatusCode::OK,
            Json(VerifyPaymentResponse {
                success: true,
                message: "Payment verified. Course unlocked!".to_string(),
            }),
        )
            .into_response(),
        Err(PaymentError::VerificationFailed) => {
            verification_response(StatusCode::BAD_REQUEST, "Payment verification failed")
        }
        Err(PaymentError::PurchaseNotFound) => {
            verification_response(StatusCode::NOT_FOUND, "Purchase record not found")
        }
        Err(e) => {
            tracing::error!("Payment verification errored: {e}");
            verification_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

fn verification_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(VerifyPaymentResponse {
            success: false,
            message: message.to_owned(),
        }),
    )
        .into_response()
}
