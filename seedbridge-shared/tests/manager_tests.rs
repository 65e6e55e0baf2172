//! Integration tests for the database reset/seed manager
//!
//! These tests require a running MongoDB instance.
//! Run with: cargo test -p seedbridge-shared --test manager_tests
//!
//! The server address is taken from the MONGODB_HOST environment variable:
//! export MONGODB_HOST="mongodb://localhost:27017"
//!
//! Each test works in its own uniquely-named database and drops it when done,
//! so tests do not interfere with each other or with application data.

use chrono::{TimeZone, Utc};
use mongodb::bson::{doc, Document};
use mongodb::Client;
use seedbridge_shared::db::{DatabaseManager, DbError};
use seedbridge_shared::models::SeedUser;
use std::env;
use uuid::Uuid;

/// Helper to build a connection URL for a fresh, uniquely-named database
fn test_database_url(label: &str) -> String {
    let host = env::var("MONGODB_HOST")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    format!(
        "{}/seedbridge_{}_{}",
        host.trim_end_matches('/'),
        label,
        Uuid::new_v4().simple()
    )
}

/// Helper to open a raw client on the same database for setup/verification
async fn raw_database(url: &str) -> mongodb::Database {
    Client::with_uri_str(url)
        .await
        .expect("failed to build raw client")
        .default_database()
        .expect("test URL must name a database")
}

fn alice() -> SeedUser {
    SeedUser {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "x".to_string(),
        is_email_address_confirmed: true,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn test_clear_empties_every_collection_and_preserves_names() {
    let url = test_database_url("clear");
    let db = raw_database(&url).await;

    // Populate three collections with a few documents each.
    for name in ["articles", "comments", "users"] {
        let collection = db.collection::<Document>(name);
        collection
            .insert_one(doc! { "seeded": true })
            .await
            .expect("failed to seed collection");
        collection
            .insert_one(doc! { "seeded": true, "n": 2 })
            .await
            .expect("failed to seed collection");
    }

    let manager = DatabaseManager::connect(&url)
        .await
        .expect("failed to connect");
    manager.clear().await.expect("clear failed");

    let mut names = db
        .list_collection_names()
        .await
        .expect("failed to list collections");
    names.sort();
    assert_eq!(names, vec!["articles", "comments", "users"]);

    for name in names {
        let count = db
            .collection::<Document>(&name)
            .count_documents(doc! {})
            .await
            .expect("failed to count");
        assert_eq!(count, 0, "collection {} should be empty", name);
    }

    db.drop().await.expect("failed to drop test database");
}

#[tokio::test]
async fn test_clear_on_empty_database_is_a_noop() {
    let url = test_database_url("clear_empty");
    let manager = DatabaseManager::connect(&url)
        .await
        .expect("failed to connect");

    // A freshly-named database has no collections at all.
    manager.clear().await.expect("clear of empty db failed");

    // And clearing twice in a row changes nothing.
    manager.clear().await.expect("second clear failed");

    raw_database(&url).await.drop().await.ok();
}

#[tokio::test]
async fn test_populate_inserts_exactly_one_verbatim_document() {
    let url = test_database_url("populate");
    let manager = DatabaseManager::connect(&url)
        .await
        .expect("failed to connect");

    let document = alice().to_document().expect("failed to build document");
    manager
        .populate_with_user(document)
        .await
        .expect("populate failed");

    let db = raw_database(&url).await;
    let users = db.collection::<Document>(SeedUser::COLLECTION);

    let count = users
        .count_documents(doc! {})
        .await
        .expect("failed to count");
    assert_eq!(count, 1);

    let stored = users
        .find_one(doc! { "email": "alice@example.com" })
        .await
        .expect("failed to query")
        .expect("seeded user not found");

    // Every field round-trips verbatim; nothing is dropped or defaulted.
    assert_eq!(stored.get_str("name").unwrap(), "Alice");
    assert_eq!(stored.get_str("password").unwrap(), "x");
    assert!(stored.get_bool("isEmailAddressConfirmed").unwrap());
    assert_eq!(
        stored.get_str("createdAt").unwrap(),
        "2024-01-01T00:00:00Z"
    );

    db.drop().await.expect("failed to drop test database");
}

#[tokio::test]
async fn test_populate_accepts_partial_documents() {
    let url = test_database_url("populate_partial");
    let manager = DatabaseManager::connect(&url)
        .await
        .expect("failed to connect");

    // No validation: a subset of the user shape passes straight through.
    manager
        .populate_with_user(doc! { "email": "partial@example.com" })
        .await
        .expect("partial populate failed");

    let db = raw_database(&url).await;
    let stored = db
        .collection::<Document>(SeedUser::COLLECTION)
        .find_one(doc! { "email": "partial@example.com" })
        .await
        .expect("failed to query")
        .expect("seeded user not found");
    assert!(!stored.contains_key("name"));

    db.drop().await.expect("failed to drop test database");
}

#[tokio::test]
async fn test_populate_twice_inserts_two_documents() {
    let url = test_database_url("populate_twice");
    let manager = DatabaseManager::connect(&url)
        .await
        .expect("failed to connect");

    let document = alice().to_document().expect("failed to build document");
    manager
        .populate_with_user(document.clone())
        .await
        .expect("first populate failed");
    manager
        .populate_with_user(document)
        .await
        .expect("second populate failed");

    let db = raw_database(&url).await;
    let count = db
        .collection::<Document>(SeedUser::COLLECTION)
        .count_documents(doc! { "email": "alice@example.com" })
        .await
        .expect("failed to count");
    assert_eq!(count, 2, "no dedup: both inserts must be stored");

    db.drop().await.expect("failed to drop test database");
}

#[tokio::test]
async fn test_connect_fails_for_unreachable_host() {
    // Nothing listens on port 9; the short timeouts keep the test fast.
    let url =
        "mongodb://127.0.0.1:9/seedbridge_unreachable?serverSelectionTimeoutMS=2000&connectTimeoutMS=2000";

    let result = DatabaseManager::connect(url).await;
    assert!(
        matches!(&result, Err(DbError::Connection { .. })),
        "connect must reject an unreachable host, not silently succeed"
    );
}
