//! Purchase repository for store operations.

use coursehub_core::{CourseId, PurchaseId, PurchaseStatus, UserId};

use super::{Store, StoreError, next_id};
use crate::models::Purchase;

/// Repository for purchase store operations.
pub struct PurchaseRepository<'a> {
    store: &'a Store,
}

impl<'a> PurchaseRepository<'a> {
    /// Create a new purchase repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Append a pending purchase for a freshly created gateway order.
    ///
    /// Always appends: repeated order creation for the same course/user
    /// yields repeated pending purchases, and existing rows are never
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns a persistence error from the store.
    pub async fn record_created(
        &self,
        user_id: UserId,
        course_id: CourseId,
        order_id: &str,
    ) -> Result<Purchase, StoreError> {
        let order_id = order_id.to_owned();
        self.store
            .update(move |d| {
                let purchase = Purchase {
                    id: PurchaseId::new(next_id(d.purchases.iter().map(|p| p.id.as_i32()))),
                    user_id,
                    course_id,
                    order_id,
                    payment_id: String::new(),
                    status: PurchaseStatus::Created,
                };
                d.purchases.push(purchase.clone());
                Ok(purchase)
            })
            .await
    }

    /// Mark the purchase matching `(order_id, user_id)` as paid.
    ///
    /// The match must agree on both the gateway order id and the buying
    /// user; a valid signature for someone else's order is still rejected.
    /// Re-applying the same payment rewrites the same fields.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no purchase matches, or a
    /// persistence error from the store.
    pub async fn mark_paid(
        &self,
        order_id: &str,
        user_id: UserId,
        payment_id: &str,
    ) -> Result<Purchase, StoreError> {
        let order_id = order_id.to_owned();
        let payment_id = payment_id.to_owned();
        self.store
            .update(move |d| {
                let purchase = d
                    .purchases
                    .iter_mut()
                    .find(|p| p.order_id == order_id && p.user_id == user_id)
                    .ok_or(StoreError::NotFound)?;

                purchase.payment_id = payment_id;
                purchase.status = PurchaseStatus::Paid;
                Ok(purchase.clone())
            })
            .await
    }

    /// Course ids the user has completed payment for.
    pub async fn paid_course_ids(&self, user_id: UserId) -> Vec<CourseId> {
        self.store
            .read(|d| {
                d.purchases
                    .iter()
                    .filter(|p| p.user_id == user_id && p.status.is_paid())
                    .map(|p| p.course_id)
                    .collect()
            })
            .await
    }

    /// All purchases, in insertion order.
    pub async fn list(&self) -> Vec<Purchase> {
        self.store.read(|d| d.purchases.clone()).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn temp_store(dir: &tempfile::TempDir) -> Store {
        Store::open(dir.path().join("store.json")).await.unwrap()
    }

    #[tokio::test]
    async fn test_record_created_appends_only() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;
        let purchases = PurchaseRepository::new(&store);

        let first = purchases
            .record_created(UserId::new(7), CourseId::new(1), "order_abc")
            .await
            .unwrap();
        assert_eq!(first.id, PurchaseId::new(1));
        assert_eq!(first.status, PurchaseStatus::Created);
        assert_eq!(first.payment_id, "");

        // A second order for the same course/user appends a second pending
        // row and leaves the first untouched.
        let second = purchases
            .record_created(UserId::new(7), CourseId::new(1), "order_def")
            .await
            .unwrap();
        assert_eq!(second.id, PurchaseId::new(2));

        let all = purchases.list().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all.first().unwrap(), &first);
    }

    #[tokio::test]
    async fn test_mark_paid_requires_matching_user() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;
        let purchases = PurchaseRepository::new(&store);

        purchases
            .record_created(UserId::new(7), CourseId::new(1), "order_abc")
            .await
            .unwrap();

        let wrong_user = purchases
            .mark_paid("order_abc", UserId::new(8), "pay_xyz")
            .await;
        assert!(matches!(wrong_user, Err(StoreError::NotFound)));

        let paid = purchases
            .mark_paid("order_abc", UserId::new(7), "pay_xyz")
            .await
            .unwrap();
        assert!(paid.status.is_paid());
        assert_eq!(paid.payment_id, "pay_xyz");
    }

    #[tokio::test]
    async fn test_mark_paid_is_idempotent_in_effect() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;
        let purchases = PurchaseRepository::new(&store);

        purchases
            .record_created(UserId::new(7), CourseId::new(1), "order_abc")
            .await
            .unwrap();

        let first = purchases
            .mark_paid("order_abc", UserId::new(7), "pay_xyz")
            .await
            .unwrap();
        let second = purchases
            .mark_paid("order_abc", UserId::new(7), "pay_xyz")
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_paid_course_ids_skips_pending() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;
        let purchases = PurchaseRepository::new(&store);

        purchases
            .record_created(UserId::new(7), CourseId::new(1), "order_a")
            .await
            .unwrap();
        purchases
            .record_created(UserId::new(7), CourseId::new(2), "order_b")
            .await
            .unwrap();
        purchases
            .mark_paid("order_b", UserId::new(7), "pay_1")
            .await
            .unwrap();

        assert_eq!(
            purchases.paid_course_ids(UserId::new(7)).await,
            vec![CourseId::new(2)]
        );
        assert!(purchases.paid_course_ids(UserId::new(8)).await.is_empty());
    }
}
