//! Status enums for store entities.

use serde::{Deserialize, Serialize};

/// Purchase lifecycle status.
///
/// A purchase is appended as `Created` when a remote order is opened and
/// becomes `Paid` once the gateway callback signature verifies. There is no
/// backward transition and no cancellation or expiry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    #[default]
    Created,
    Paid,
}

impl PurchaseStatus {
    /// Whether the purchase has completed payment.
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        matches!(self, Self::Paid)
    }

    /// Whether a transition to `next` is allowed.
    ///
    /// The only legal transition is `Created -> Paid`.
    #[must_use]
    pub const fn can_transition_to(&self, next: Self) -> bool {
        matches!((self, next), (Self::Created, Self::Paid))
    }
}

impl std::fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::Paid => f.write_str("paid"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PurchaseStatus::Created).unwrap(),
            "\"created\""
        );
        assert_eq!(
            serde_json::to_string(&PurchaseStatus::Paid).unwrap(),
            "\"paid\""
        );
    }

    #[test]
    fn test_parses_store_values() {
        let status: PurchaseStatus = serde_json::from_str("\"paid\"").unwrap();
        assert!(status.is_paid());
    }

    #[test]
    fn test_only_forward_transition() {
        assert!(PurchaseStatus::Created.can_transition_to(PurchaseStatus::Paid));
        assert!(!PurchaseStatus::Paid.can_transition_to(PurchaseStatus::Created));
        assert!(!PurchaseStatus::Created.can_transition_to(PurchaseStatus::Created));
        assert!(!PurchaseStatus::Paid.can_transition_to(PurchaseStatus::Paid));
    }

    #[test]
    fn test_default_is_created() {
        assert_eq!(PurchaseStatus::default(), PurchaseStatus::Created);
    }
}
