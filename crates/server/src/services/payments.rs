//! Order lifecycle service.
//!
//! The one real state machine in the system:
//!
//! ```text
//! [no record] --place order--> created --confirm (signature ok + match)--> paid
//! created --confirm (signature mismatch)--> created (unchanged, error reported)
//! ```
//!
//! Placing an order calls the gateway and appends a pending purchase;
//! confirming verifies the callback signature and flips the matching
//! purchase to paid.

use thiserror::Error;

use coursehub_core::{CourseId, UserId};

use crate::gateway::{GatewayClient, GatewayError, GatewayOrder};
use crate::models::{Course, Purchase};
use crate::store::{CourseRepository, PurchaseRepository, Store, StoreError};

/// Errors from the order lifecycle.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// No course with the requested id.
    #[error("course not found")]
    CourseNotFound,

    /// No purchase matches the callback's order id and the calling user.
    #[error("purchase record not found")]
    PurchaseNotFound,

    /// The callback signature does not match the shared secret.
    #[error("payment verification failed")]
    VerificationFailed,

    /// The gateway call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Order lifecycle service.
pub struct PaymentService<'a> {
    store: &'a Store,
    gateway: &'a GatewayClient,
}

impl<'a> PaymentService<'a> {
    /// Create a new payment service.
    #[must_use]
    pub const fn new(store: &'a Store, gateway: &'a GatewayClient) -> Self {
        Self { store, gateway }
    }

    /// Create a remote order for a course and record a pending purchase.
    ///
    /// The receipt is derived from the course and user ids; repeated calls
    /// for the same pair create further remote orders and further pending
    /// purchases, never touching existing rows.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::CourseNotFound` if the course doesn't exist,
    /// `PaymentError::Gateway` if the remote call fails, and a store error
    /// if the purchase cannot be persisted (the remote order is not
    /// compensated in that case).
    pub async fn place_order(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<(GatewayOrder, Course), PaymentError> {
        let course = CourseRepository::new(self.store)
            .get(course_id)
            .await
            .ok_or(PaymentError::CourseNotFound)?;

        let receipt = format!("course_{course_id}_user_{user_id}");
        let order = self
            .gateway
            .create_order(course.price.to_minor_units(), &receipt)
            .await?;

        PurchaseRepository::new(self.store)
            .record_created(user_id, course_id, &order.id)
            .await?;

        tracing::info!(
            %user_id,
            %course_id,
            order_id = %order.id,
            "order placed, purchase pending"
        );

        Ok((order, course))
    }

    /// Verify a gateway callback and mark the matching purchase as paid.
    ///
    /// The signature check happens before any store lookup; on mismatch the
    /// store is untouched. The purchase must match both the order id and
    /// the calling user.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::VerificationFailed` on signature mismatch and
    /// `PaymentError::PurchaseNotFound` if no purchase matches.
    pub async fn confirm_payment(
        &self,
        user_id: UserId,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<Purchase, PaymentError> {
        if !self
            .gateway
            .verify_payment_signature(order_id, payment_id, signature)
        {
            tracing::warn!(%user_id, order_id, "payment callback signature mismatch");
            return Err(PaymentError::VerificationFailed);
        }

        let purchase = PurchaseRepository::new(self.store)
            .mark_paid(order_id, user_id, payment_id)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => PaymentError::PurchaseNotFound,
                other => PaymentError::Store(other),
            })?;

        tracing::info!(%user_id, order_id, "payment verified, course unlocked");

        Ok(purchase)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use secrecy::SecretString;

    use coursehub_core::{CurrencyCode, PurchaseStatus};
    use crate::config::GatewayConfig;
    use crate::gateway::payment_signature;

    const SECRET: &str = "test_key_secret";

    fn test_gateway() -> GatewayClient {
        GatewayClient::new(&GatewayConfig {
            api_base: "https://api.razorpay.com".to_string(),
            key_id: "rzp_test_key".to_string(),
            key_secret: SecretString::from(SECRET),
            currency: CurrencyCode::Inr,
        })
    }

    async fn temp_store(dir: &tempfile::TempDir) -> Store {
        Store::open(dir.path().join("store.json")).await.unwrap()
    }

    #[tokio::test]
    async fn test_confirm_payment_flips_created_to_paid() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;
        let gateway = test_gateway();

        PurchaseRepository::new(&store)
            .record_created(UserId::new(7), CourseId::new(1), "order_abc")
            .await
            .unwrap();

        let signature = payment_signature(SECRET, "order_abc", "pay_xyz");
        let purchase = PaymentService::new(&store, &gateway)
            .confirm_payment(UserId::new(7), "order_abc", "pay_xyz", &signature)
            .await
            .unwrap();

        assert_eq!(purchase.status, PurchaseStatus::Paid);
        assert_eq!(purchase.payment_id, "pay_xyz");
    }

    #[tokio::test]
    async fn test_confirm_payment_bad_signature_leaves_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;
        let gateway = test_gateway();

        PurchaseRepository::new(&store)
            .record_created(UserId::new(7), CourseId::new(1), "order_abc")
            .await
            .unwrap();

        let result = PaymentService::new(&store, &gateway)
            .confirm_payment(UserId::new(7), "order_abc", "pay_xyz", "bad-signature")
            .await;
        assert!(matches!(result, Err(PaymentError::VerificationFailed)));

        let purchases = PurchaseRepository::new(&store).list().await;
        assert_eq!(purchases.len(), 1);
        assert_eq!(
            purchases.first().unwrap().status,
            PurchaseStatus::Created
        );
        assert_eq!(purchases.first().unwrap().payment_id, "");
    }

    #[tokio::test]
    async fn test_confirm_payment_no_matching_purchase() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;
        let gateway = test_gateway();

        // Valid signature but the order belongs to a different user.
        PurchaseRepository::new(&store)
            .record_created(UserId::new(7), CourseId::new(1), "order_abc")
            .await
            .unwrap();

        let signature = payment_signature(SECRET, "order_abc", "pay_xyz");
        let result = PaymentService::new(&store, &gateway)
            .confirm_payment(UserId::new(8), "order_abc", "pay_xyz", &signature)
            .await;
        assert!(matches!(result, Err(PaymentError::PurchaseNotFound)));

        let purchases = PurchaseRepository::new(&store).list().await;
        assert_eq!(
            purchases.first().unwrap().status,
            PurchaseStatus::Created
        );
    }

    #[tokio::test]
    async fn test_place_order_missing_course() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;
        let gateway = test_gateway();

        let result = PaymentService::new(&store, &gateway)
            .place_order(UserId::new(7), CourseId::new(42))
            .await;
        assert!(matches!(result, Err(PaymentError::CourseNotFound)));
    }
}
