//! HTTP client for the payment gateway's order API.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use coursehub_core::CurrencyCode;

use super::{GatewayError, signature};
use crate::config::GatewayConfig;

/// A remote order as returned by the gateway.
///
/// Passed through to the checkout page verbatim, so it keeps the gateway's
/// own field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayOrder {
    /// Gateway order identifier (e.g., `order_abc`).
    pub id: String,
    /// Amount in minor currency units.
    pub amount: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// The receipt string the order was created with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    /// Gateway-side order status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateOrderBody<'a> {
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
}

/// Error body shape used by the gateway API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    description: Option<String>,
}

/// Client for the payment gateway.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct GatewayClient {
    inner: Arc<GatewayClientInner>,
}

struct GatewayClientInner {
    client: reqwest::Client,
    api_base: String,
    key_id: String,
    key_secret: String,
    currency: CurrencyCode,
}

impl GatewayClient {
    /// Create a new gateway client from configuration.
    #[must_use]
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            inner: Arc::new(GatewayClientInner {
                client: reqwest::Client::new(),
                api_base: config.api_base.trim_end_matches('/').to_string(),
                key_id: config.key_id.clone(),
                key_secret: config.key_secret.expose_secret().to_string(),
                currency: config.currency,
            }),
        }
    }

    /// The public key id (safe to expose to the checkout page).
    #[must_use]
    pub fn key_id(&self) -> &str {
        &self.inner.key_id
    }

    /// The currency orders are created in.
    #[must_use]
    pub fn currency(&self) -> CurrencyCode {
        self.inner.currency
    }

    /// Create a remote order for `amount_minor` minor units.
    ///
    /// One blocking round trip, no retry: a gateway failure surfaces
    /// directly to the caller.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Http` if the request fails outright and
    /// `GatewayError::Api` if the gateway answers with a non-success status.
    pub async fn create_order(
        &self,
        amount_minor: i64,
        receipt: &str,
    ) -> Result<GatewayOrder, GatewayError> {
        let url = format!("{}/v1/orders", self.inner.api_base);
        let body = CreateOrderBody {
            amount: amount_minor,
            currency: self.inner.currency.as_str(),
            receipt,
        };

        let response = self
            .inner
            .client
            .post(&url)
            .basic_auth(&self.inner.key_id, Some(&self.inner.key_secret))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.description)
                .unwrap_or_else(|| "unknown gateway error".to_string());
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let order = response.json::<GatewayOrder>().await?;
        tracing::debug!(order_id = %order.id, amount = order.amount, "gateway order created");
        Ok(order)
    }

    /// Verify a payment callback signature against the key secret.
    #[must_use]
    pub fn verify_payment_signature(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> bool {
        signature::verify_payment_signature(
            &self.inner.key_secret,
            order_id,
            payment_id,
            signature,
        )
    }
}
