//! Integration tests for the admin endpoints.
//!
//! These tests require:
//! - A running Frontier Books backend
//! - `FRONTIER_BOOKS_API_URL` pointing at it (defaults to localhost:8000)
//! - `FRONTIER_BOOKS_ADMIN_EMAIL` and `FRONTIER_BOOKS_ADMIN_PASSWORD` for
//!   an account the backend recognizes as an admin
//!
//! The mutation test creates a catalog entry, edits it, and deletes it
//! again, so the catalog ends up unchanged.
//!
//! Run with: cargo test -p frontier-books-integration-tests -- --ignored

use rust_decimal::Decimal;
use secrecy::SecretString;
use serde_json::json;
use tempfile::TempDir;
use uuid::Uuid;

use frontier_books_client::api::ApiClient;
use frontier_books_client::api::types::{AdminTable, NewBook};
use frontier_books_client::config::ClientConfig;

/// Base URL for the backend (configurable via environment).
fn api_base_url() -> String {
    std::env::var("FRONTIER_BOOKS_API_URL")
        .unwrap_or_else(|_| "http://localhost:8000".to_string())
}

fn test_config(dir: &TempDir) -> ClientConfig {
    ClientConfig {
        api_url: api_base_url()
            .parse()
            .expect("Invalid FRONTIER_BOOKS_API_URL"),
        data_dir: dir.path().to_path_buf(),
    }
}

/// Log in with the admin credentials from the environment.
async fn admin_token(api: &ApiClient) -> SecretString {
    let email =
        std::env::var("FRONTIER_BOOKS_ADMIN_EMAIL").expect("FRONTIER_BOOKS_ADMIN_EMAIL not set");
    let password = std::env::var("FRONTIER_BOOKS_ADMIN_PASSWORD")
        .expect("FRONTIER_BOOKS_ADMIN_PASSWORD not set");

    api.login(&email, &password)
        .await
        .expect("Failed to log in as admin")
}

// ============================================================================
// Table Listing Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running backend and admin credentials"]
async fn test_admin_lists_every_table() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let api = ApiClient::new(&test_config(&dir));
    let token = admin_token(&api).await;

    for table in [AdminTable::Books, AdminTable::Users, AdminTable::Orders] {
        let rows = api
            .admin_table(&token, table)
            .await
            .unwrap_or_else(|e| panic!("Failed to list {table}: {e}"));

        for row in &rows {
            assert!(row.is_object(), "{table} rows must be JSON objects");
        }
    }
}

// ============================================================================
// Catalog Mutation Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running backend and admin credentials"]
async fn test_admin_book_create_update_delete() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let api = ApiClient::new(&test_config(&dir));
    let token = admin_token(&api).await;

    let title = format!("Integration Test Book {}", Uuid::new_v4());
    let book = NewBook {
        title: title.clone(),
        author: "Integration Test".to_string(),
        description: "Created by the integration suite.".to_string(),
        price: Decimal::new(199, 2),
        cover_image_url: String::new(),
    };
    api.create_book(&token, &book)
        .await
        .expect("Failed to create book");

    // The new row must be visible in the public catalog.
    let books = api.list_books().await.expect("Failed to list books");
    let created = books
        .iter()
        .find(|b| b.title == title)
        .expect("Created book missing from the catalog");

    api.update_record(
        &token,
        AdminTable::Books,
        created.id.as_i64(),
        &json!({ "price": 2.99 }),
    )
    .await
    .expect("Failed to update book");

    api.delete_record(&token, AdminTable::Books, created.id.as_i64())
        .await
        .expect("Failed to delete book");

    let books = api.list_books().await.expect("Failed to list books");
    assert!(
        !books.iter().any(|b| b.title == title),
        "Deleted book must disappear from the catalog"
    );
}
