//! Payment gateway client.
//!
//! The gateway is the external payment service: it issues remote orders
//! (one HTTP round trip per checkout) and signs the browser-delivered
//! payment callback with HMAC-SHA256 over `order_id|payment_id` using the
//! shared key secret.

pub mod client;
pub mod signature;

pub use client::{GatewayClient, GatewayOrder};
pub use signature::{payment_signature, verify_payment_signature};

use thiserror::Error;

/// Errors from gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The HTTP round trip itself failed (connect, timeout, decode).
    #[error("gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success status.
    #[error("gateway rejected the request ({status}): {message}")]
    Api { status: u16, message: String },
}
