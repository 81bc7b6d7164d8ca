//! Wire types for the Frontier Books REST API.
//!
//! Field names follow the backend's column naming (`book_id`,
//! `book_quantity`, ...) rather than the struct field names.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use frontier_books_core::{BookId, OrderId, PaymentMethod, UserId};

/// A catalog entry as served by `GET /books`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "book_id", alias = "id")]
    pub id: BookId,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub cover_image_url: Option<String>,
}

/// One cart line as exchanged with `GET /cart` and `POST /cart`, and as the
/// item shape inside a checkout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCartLine {
    pub book_id: BookId,
    pub book_quantity: u32,
}

/// Payload for `POST /checkout`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRequest {
    pub order_items: Vec<RemoteCartLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub order_total_cost: Decimal,
    pub order_payment_method: PaymentMethod,
    /// Opaque payment blob (card holder, masked number, expiry).
    pub order_payment_details: serde_json::Value,
    /// Opaque address blob (street, city, postal code).
    pub order_delivery_address: serde_json::Value,
}

/// A historical order as returned by `GET /user_orders`.
///
/// Blob columns stay untyped; the client renders them opaquely.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub user_id: UserId,
    #[serde(default)]
    pub items: serde_json::Value,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(default)]
    pub delivery_address: serde_json::Value,
    #[serde(default)]
    pub payment_info: serde_json::Value,
    #[serde(default)]
    pub order_status: String,
    #[serde(default)]
    pub created_at: String,
}

/// Payload for creating a catalog entry via `POST /books`.
#[derive(Debug, Clone, Serialize)]
pub struct NewBook {
    #[serde(rename = "book_title")]
    pub title: String,
    #[serde(rename = "book_author")]
    pub author: String,
    #[serde(rename = "book_description")]
    pub description: String,
    #[serde(rename = "book_price", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "book_cover_image_url")]
    pub cover_image_url: String,
}

/// Backend tables the admin surface can list, edit, and delete from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminTable {
    Books,
    Users,
    Orders,
}

impl AdminTable {
    /// Path segment and response envelope key for this table.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Books => "books",
            Self::Users => "users",
            Self::Orders => "orders",
        }
    }
}

impl fmt::Display for AdminTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "books" => Ok(Self::Books),
            "users" => Ok(Self::Users),
            "orders" => Ok(Self::Orders),
            other => Err(format!("unknown table: {other}")),
        }
    }
}
