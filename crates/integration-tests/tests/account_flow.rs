//! Integration tests for the account flows: registration, login, cart
//! sync, and checkout.
//!
//! These tests require:
//! - A running Frontier Books backend
//! - `FRONTIER_BOOKS_API_URL` pointing at it (defaults to localhost:8000)
//!
//! Every test registers its own throwaway account with a uuid-suffixed
//! email address, so runs never interfere with each other or with real
//! users.
//!
//! Run with: cargo test -p frontier-books-integration-tests -- --ignored

use rust_decimal::Decimal;
use secrecy::SecretString;
use serde_json::json;
use tempfile::TempDir;
use uuid::Uuid;

use frontier_books_client::Context;
use frontier_books_client::api::{ApiClient, ApiError};
use frontier_books_client::api::types::{CheckoutRequest, RemoteCartLine};
use frontier_books_client::config::ClientConfig;
use frontier_books_client::context::{AuthOutcome, CartOutcome, CheckoutOutcome, SyncOutcome};
use frontier_books_client::surface::{AlertRequest, ConfirmRequest, Notifier, Prompt};
use frontier_books_core::PaymentMethod;

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

fn test_email() -> String {
    format!("integration-test-{}@example.com", Uuid::new_v4())
}

/// Register a throwaway account and return its credentials and token.
async fn register_account(api: &ApiClient) -> (String, String, SecretString) {
    let email = test_email();
    let password = format!("pw-{}", Uuid::new_v4());
    let token = api
        .register("Integration Test", &email, &password)
        .await
        .expect("Failed to register test account");
    (email, password, token)
}

/// Surface that confirms everything and swallows all output.
struct AutoYes;

impl Notifier for AutoYes {
    fn notify(&self, _message: &str) {}
}

impl Prompt for AutoYes {
    fn confirm(&self, _request: &ConfirmRequest) -> bool {
        true
    }

    fn alert(&self, _request: &AlertRequest) {}
}

// ============================================================================
// Credential Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running backend"]
async fn test_register_and_login_round_trip() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let api = ApiClient::new(&test_config(&dir));

    let (email, password, _token) = register_account(&api).await;

    let token = api
        .login(&email, &password)
        .await
        .expect("Failed to log in with fresh credentials");
    drop(token);
}

#[tokio::test]
#[ignore = "Requires a running backend"]
async fn test_login_rejects_wrong_password() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let api = ApiClient::new(&test_config(&dir));

    let (email, _password, _token) = register_account(&api).await;

    let err = api
        .login(&email, "definitely-not-the-password")
        .await
        .expect_err("Login with a wrong password must fail");

    match err {
        ApiError::Status { status, .. } => assert!(status.is_client_error()),
        other => panic!("Expected a status error, got: {other}"),
    }
}

// ============================================================================
// Cart Sync Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running backend"]
async fn test_fetch_cart_empty_for_new_account() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let api = ApiClient::new(&test_config(&dir));

    let (_email, _password, token) = register_account(&api).await;

    let items = api.fetch_cart(&token).await.expect("Failed to fetch cart");
    assert!(items.is_empty());
}

#[tokio::test]
#[ignore = "Requires a running backend"]
async fn test_cart_round_trip() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let api = ApiClient::new(&test_config(&dir));

    let books = api.list_books().await.expect("Failed to list books");
    let Some(book) = books.first() else {
        return; // empty catalog, nothing to put in a cart
    };

    let (_email, _password, token) = register_account(&api).await;

    let items = vec![RemoteCartLine {
        book_id: book.id,
        book_quantity: 2,
    }];
    api.push_cart(&token, &items)
        .await
        .expect("Failed to push cart");

    let fetched = api.fetch_cart(&token).await.expect("Failed to fetch cart");
    assert_eq!(fetched, items);
}

// ============================================================================
// Checkout Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running backend"]
async fn test_checkout_creates_order() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let api = ApiClient::new(&test_config(&dir));

    let books = api.list_books().await.expect("Failed to list books");
    let Some(book) = books.first() else {
        return; // empty catalog, nothing to order
    };

    let (_email, _password, token) = register_account(&api).await;

    let request = CheckoutRequest {
        order_items: vec![RemoteCartLine {
            book_id: book.id,
            book_quantity: 1,
        }],
        order_total_cost: book.price,
        order_payment_method: PaymentMethod::Credit,
        order_payment_details: json!({
            "card_name": "Integration Test",
            "card_number": "4111111111111111",
            "expiry": "12/29",
            "csv": "123",
        }),
        order_delivery_address: json!({
            "address": "12 Front St",
            "city": "Dawson",
            "postal_code": "Y0B 1G0",
        }),
    };

    let order_ref = api
        .checkout(&token, &request)
        .await
        .expect("Failed to place order");
    assert!(!order_ref.is_empty());

    let orders = api
        .user_orders(&token)
        .await
        .expect("Failed to fetch order history");
    assert!(!orders.is_empty());
    assert!(orders.iter().any(|o| o.total_amount == book.price));
}

// ============================================================================
// End-to-End Storefront Flow
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running backend"]
async fn test_storefront_flow_end_to_end() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut ctx = Context::new(test_config(&dir), Box::new(AutoYes))
        .expect("Failed to build client context");

    let email = test_email();
    let password = format!("pw-{}", Uuid::new_v4());
    let outcome = ctx
        .register("Integration Test", &email, &password)
        .await
        .expect("Registration flow failed");
    assert_eq!(outcome, AuthOutcome::SignedIn);

    let books = ctx.catalog().list_books().await;
    let Some(book) = books.first().cloned() else {
        return; // empty catalog, nothing to order
    };

    assert_eq!(
        ctx.add_to_cart(&book).expect("Add to cart failed"),
        CartOutcome::Applied
    );
    assert_eq!(
        ctx.save_cart().await.expect("Cart save failed"),
        SyncOutcome::Completed
    );

    let outcome = ctx
        .place_order(
            PaymentMethod::Credit,
            json!({
                "card_name": "Integration Test",
                "card_number": "4111111111111111",
                "expiry": "12/29",
                "csv": "123",
            }),
            json!({
                "address": "12 Front St",
                "city": "Dawson",
                "postal_code": "Y0B 1G0",
            }),
        )
        .await
        .expect("Checkout flow failed");
    let CheckoutOutcome::Placed { order_ref } = outcome else {
        panic!("Expected a placed order, got: {outcome:?}");
    };
    assert!(!order_ref.is_empty());
    assert!(ctx.cart().is_empty(), "Checkout must empty the cart");

    let orders = ctx
        .order_history()
        .await
        .expect("Order history flow failed")
        .expect("A signed-in account must see its history");
    assert!(
        orders.iter().any(|o| o.total_amount == book.price),
        "The new order must appear in the history"
    );

    let total: Decimal = ctx.cart().total_cost();
    assert_eq!(total, Decimal::ZERO);
}
