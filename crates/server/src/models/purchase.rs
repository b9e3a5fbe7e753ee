//! Purchase record.

use serde::{Deserialize, Serialize};

use coursehub_core::{CourseId, PurchaseId, PurchaseStatus, UserId};

/// A purchase linking a user, a course, and a remote gateway order.
///
/// Appended in `created` state when an order is opened; the same record is
/// mutated in place to `paid` once the gateway callback verifies. There is
/// no cancellation or expiry state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    /// Unique purchase ID, assigned `max(existing) + 1`.
    pub id: PurchaseId,
    /// The buying user.
    pub user_id: UserId,
    /// The purchased course.
    pub course_id: CourseId,
    /// Remote gateway order identifier.
    pub order_id: String,
    /// Gateway payment identifier; empty until verification succeeds.
    pub payment_id: String,
    /// Lifecycle status, `created` then `paid`.
    pub status: PurchaseStatus,
}
