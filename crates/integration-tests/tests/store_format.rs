//! Contract tests for the on-disk store format.
//!
//! The store file is the system's one persisted interface: a single JSON
//! document with `users`, `courses`, and `purchases` arrays in camelCase.
//! These tests pin that shape by reading the raw file back.

use coursehub_core::{CourseId, Price, UserId};
use coursehub_server::models::NewCourse;
use coursehub_server::services::AuthService;
use coursehub_server::store::{CourseRepository, PurchaseRepository};

use coursehub_integration_tests::temp_store;

async fn raw_document(dir: &tempfile::TempDir) -> serde_json::Value {
    let bytes = tokio::fs::read(dir.path().join("store.json"))
        .await
        .expect("read store file");
    serde_json::from_slice(&bytes).expect("parse store file")
}

#[tokio::test]
async fn test_document_has_three_arrays() {
    let (dir, store) = temp_store().await;

    CourseRepository::new(&store)
        .create(NewCourse {
            title: "Intro".to_string(),
            description: "d".to_string(),
            price: Price::new(500),
            thumbnail: "/t.png".to_string(),
            video_url: "https://v".to_string(),
        })
        .await
        .expect("create course");

    let doc = raw_document(&dir).await;
    assert!(doc["users"].is_array());
    assert!(doc["courses"].is_array());
    assert!(doc["purchases"].is_array());
}

#[tokio::test]
async fn test_course_fields_are_camel_case() {
    let (dir, store) = temp_store().await;

    CourseRepository::new(&store)
        .create(NewCourse {
            title: "Intro".to_string(),
            description: "d".to_string(),
            price: Price::new(500),
            thumbnail: "/t.png".to_string(),
            video_url: "https://videos.example.com/intro".to_string(),
        })
        .await
        .expect("create course");

    let doc = raw_document(&dir).await;
    let course = &doc["courses"][0];
    assert_eq!(course["id"], 1);
    assert_eq!(course["price"], 500);
    assert_eq!(course["videoUrl"], "https://videos.example.com/intro");
}

#[tokio::test]
async fn test_user_fields_are_camel_case_and_hash_is_not_plaintext() {
    let (dir, store) = temp_store().await;

    AuthService::new(&store)
        .signup("Ada", "ada@example.com", "correct horse battery")
        .await
        .expect("signup");

    let doc = raw_document(&dir).await;
    let user = &doc["users"][0];
    assert_eq!(user["id"], 1);
    assert_eq!(user["email"], "ada@example.com");
    assert_eq!(user["isAdmin"], false);

    let hash = user["passwordHash"].as_str().expect("passwordHash string");
    assert!(hash.starts_with("$argon2"));
    assert!(!hash.contains("correct horse battery"));
}

#[tokio::test]
async fn test_purchase_fields_match_worked_example() {
    let (dir, store) = temp_store().await;

    PurchaseRepository::new(&store)
        .record_created(UserId::new(7), CourseId::new(1), "order_abc")
        .await
        .expect("record purchase");

    let doc = raw_document(&dir).await;
    let purchase = &doc["purchases"][0];
    assert_eq!(purchase["id"], 1);
    assert_eq!(purchase["userId"], 7);
    assert_eq!(purchase["courseId"], 1);
    assert_eq!(purchase["orderId"], "order_abc");
    assert_eq!(purchase["paymentId"], "");
    assert_eq!(purchase["status"], "created");
}
