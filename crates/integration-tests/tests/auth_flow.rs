//! Integration tests for signup and login against a real store file.

use coursehub_server::services::{AuthError, AuthService};
use coursehub_server::store::Store;

use coursehub_integration_tests::temp_store;

#[tokio::test]
async fn test_signup_login_roundtrip_survives_reload() {
    let (dir, store) = temp_store().await;

    let created = AuthService::new(&store)
        .signup("Ada", "ada@example.com", "correct horse battery")
        .await
        .expect("signup");
    assert!(!created.is_admin);

    // Login through a fresh handle over the same file.
    let reopened = Store::open(dir.path().join("store.json"))
        .await
        .expect("reopen store");
    let user = AuthService::new(&reopened)
        .login("ada@example.com", "correct horse battery")
        .await
        .expect("login");
    assert_eq!(user.id, created.id);
    assert_eq!(user.name, "Ada");
}

#[tokio::test]
async fn test_duplicate_email_ignoring_case_is_rejected() {
    let (_dir, store) = temp_store().await;
    let auth = AuthService::new(&store);

    auth.signup("Ada", "Ada@Example.com", "correct horse battery")
        .await
        .expect("first signup");

    let result = auth
        .signup("Imposter", "ada@example.COM", "another password")
        .await;
    assert!(matches!(result, Err(AuthError::EmailTaken)));

    // The stored account keeps the original casing.
    let user = auth
        .login("ada@example.com", "correct horse battery")
        .await
        .expect("login");
    assert_eq!(user.email.as_str(), "Ada@Example.com");
}

#[tokio::test]
async fn test_wrong_password_is_invalid_credentials() {
    let (_dir, store) = temp_store().await;
    let auth = AuthService::new(&store);

    auth.signup("Ada", "ada@example.com", "correct horse battery")
        .await
        .expect("signup");

    let result = auth.login("ada@example.com", "wrong password").await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn test_admin_flag_comes_from_cli_path_only() {
    let (_dir, store) = temp_store().await;
    let auth = AuthService::new(&store);

    let regular = auth
        .signup("Ada", "ada@example.com", "correct horse battery")
        .await
        .expect("signup");
    let admin = auth
        .create_admin("Root", "root@example.com", "admin password")
        .await
        .expect("create admin");

    assert!(!regular.is_admin);
    assert!(admin.is_admin);
}
