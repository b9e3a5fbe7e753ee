//! Integration tests for CourseHub.
//!
//! These tests exercise the store, services, and signature verification
//! across crate boundaries without a running server or network access: the
//! gateway client is constructed with test credentials and only its
//! signature-verification path is driven.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p coursehub-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use secrecy::SecretString;

use coursehub_core::CurrencyCode;
use coursehub_server::config::GatewayConfig;
use coursehub_server::gateway::GatewayClient;
use coursehub_server::store::Store;

/// Shared gateway key secret for the test fixtures.
pub const TEST_KEY_SECRET: &str = "integration_test_key_secret";

/// A store backed by a temp directory.
///
/// Keep the returned `TempDir` alive for as long as the store is used.
///
/// # Panics
///
/// Panics if the temp directory or store cannot be created.
pub async fn temp_store() -> (tempfile::TempDir, Store) {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = Store::open(dir.path().join("store.json"))
        .await
        .expect("open store");
    (dir, store)
}

/// A gateway client with test credentials (never talks to the network in
/// these tests).
#[must_use]
pub fn test_gateway() -> GatewayClient {
    GatewayClient::new(&GatewayConfig {
        api_base: "https://api.razorpay.com".to_string(),
        key_id: "rzp_test_key".to_string(),
        key_secret: SecretString::from(TEST_KEY_SECRET),
        currency: CurrencyCode::Inr,
    })
}
