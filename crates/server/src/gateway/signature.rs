//! Payment callback signature verification.
//!
//! The gateway signs `"{order_id}|{payment_id}"` with HMAC-SHA256 using the
//! key secret and sends the hex digest alongside the callback. Verification
//! recomputes the digest and requires an exact match.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the expected callback signature for an order/payment pair.
#[must_use]
pub fn payment_signature(secret: &str, order_id: &str, payment_id: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a callback signature byte-for-byte.
#[must_use]
pub fn verify_payment_signature(
    secret: &str,
    order_id: &str,
    payment_id: &str,
    signature: &str,
) -> bool {
    payment_signature(secret, order_id, payment_id) == signature
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SECRET: &str = "test_key_secret";

    #[test]
    fn test_signature_matches_manual_hmac() {
        // Independently computed over the concatenated message.
        let mut mac = HmacSha256::new_from_slice(SECRET.as_bytes()).unwrap();
        mac.update(b"order_abc|pay_xyz");
        let expected = hex::encode(mac.finalize().into_bytes());

        assert_eq!(payment_signature(SECRET, "order_abc", "pay_xyz"), expected);
    }

    #[test]
    fn test_verify_accepts_valid_signature() {
        let signature = payment_signature(SECRET, "order_abc", "pay_xyz");
        assert!(verify_payment_signature(
            SECRET,
            "order_abc",
            "pay_xyz",
            &signature
        ));
    }

    #[test]
    fn test_verify_rejects_tampered_fields() {
        let signature = payment_signature(SECRET, "order_abc", "pay_xyz");

        assert!(!verify_payment_signature(
            SECRET,
            "order_abc",
            "pay_other",
            &signature
        ));
        assert!(!verify_payment_signature(
            SECRET,
            "order_other",
            "pay_xyz",
            &signature
        ));
        assert!(!verify_payment_signature(
            "wrong_secret",
            "order_abc",
            "pay_xyz",
            &signature
        ));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(!verify_payment_signature(
            SECRET,
            "order_abc",
            "pay_xyz",
            "not-a-signature"
        ));
    }

    #[test]
    fn test_signature_is_hex_encoded_sha256() {
        let signature = payment_signature(SECRET, "order_abc", "pay_xyz");
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
