//! REST client for the Frontier Books backend.
//!
//! Thin typed wrapper over `reqwest` 0.13. Authenticated endpoints take the
//! bearer token per call; the client itself holds no session state. Error
//! bodies are reduced to the backend's `detail` string.

pub mod types;

use std::sync::Arc;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

use frontier_books_core::BookId;

use crate::config::ClientConfig;
use types::{AdminTable, Book, CheckoutRequest, NewBook, OrderRecord, RemoteCartLine};

/// Errors raised by backend requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {detail}")]
    Status { status: StatusCode, detail: String },

    /// The response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the Frontier Books REST API.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url: config.api_base(),
            }),
        }
    }

    // =========================================================================
    // Catalog Methods
    // =========================================================================

    /// Fetch the full catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        #[derive(Deserialize)]
        struct Response {
            books: Vec<Book>,
        }

        let response = self
            .inner
            .client
            .get(format!("{}/books", self.inner.base_url))
            .send()
            .await?;

        let body: Response = read_json(response).await?;
        Ok(body.books)
    }

    /// Resolve a set of book ids to full records.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self), fields(count = ids.len()))]
    pub async fn book_details(&self, ids: &[BookId]) -> Result<Vec<Book>, ApiError> {
        #[derive(serde::Serialize)]
        struct Request<'a> {
            int_list: &'a [BookId],
        }

        #[derive(Deserialize)]
        struct Response {
            books: Vec<Book>,
        }

        let response = self
            .inner
            .client
            .post(format!("{}/books/details", self.inner.base_url))
            .json(&Request { int_list: ids })
            .send()
            .await?;

        let body: Response = read_json(response).await?;
        Ok(body.books)
    }

    // =========================================================================
    // Cart Methods
    // =========================================================================

    /// Fetch the signed-in user's saved cart. A 204 response is an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self, token))]
    pub async fn fetch_cart(&self, token: &SecretString) -> Result<Vec<RemoteCartLine>, ApiError> {
        #[derive(Deserialize)]
        struct Response {
            cart_items: Vec<RemoteCartLine>,
        }

        let response = self
            .inner
            .client
            .get(format!("{}/cart", self.inner.base_url))
            .bearer_auth(token.expose_secret())
            .send()
            .await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }

        let body: Response = read_json(response).await?;
        Ok(body.cart_items)
    }

    /// Replace the signed-in user's saved cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, token, items), fields(count = items.len()))]
    pub async fn push_cart(
        &self,
        token: &SecretString,
        items: &[RemoteCartLine],
    ) -> Result<(), ApiError> {
        #[derive(serde::Serialize)]
        struct Request<'a> {
            cart_items: &'a [RemoteCartLine],
        }

        let response = self
            .inner
            .client
            .post(format!("{}/cart", self.inner.base_url))
            .bearer_auth(token.expose_secret())
            .json(&Request { cart_items: items })
            .send()
            .await?;

        read_ok(response).await
    }

    // =========================================================================
    // Auth Methods
    // =========================================================================

    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the credentials are rejected.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<SecretString, ApiError> {
        #[derive(serde::Serialize)]
        struct Request<'a> {
            user_email: &'a str,
            user_password: &'a str,
        }

        #[derive(Deserialize)]
        struct Response {
            access_token: String,
        }

        let response = self
            .inner
            .client
            .post(format!("{}/login", self.inner.base_url))
            .json(&Request {
                user_email: email,
                user_password: password,
            })
            .send()
            .await?;

        let body: Response = read_json(response).await?;
        Ok(SecretString::from(body.access_token))
    }

    /// Create an account. The backend signs the new user in and returns a
    /// bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the account is rejected.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<SecretString, ApiError> {
        #[derive(serde::Serialize)]
        struct Request<'a> {
            user_name: &'a str,
            user_email: &'a str,
            user_password: &'a str,
        }

        #[derive(Deserialize)]
        struct Response {
            access_token: String,
        }

        let response = self
            .inner
            .client
            .post(format!("{}/users", self.inner.base_url))
            .json(&Request {
                user_name: username,
                user_email: email,
                user_password: password,
            })
            .send()
            .await?;

        let body: Response = read_json(response).await?;
        Ok(SecretString::from(body.access_token))
    }

    // =========================================================================
    // Order Methods
    // =========================================================================

    /// Submit an order. Returns the server-issued order reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the order.
    #[instrument(skip(self, token, request))]
    pub async fn checkout(
        &self,
        token: &SecretString,
        request: &CheckoutRequest,
    ) -> Result<String, ApiError> {
        #[derive(Deserialize)]
        struct Response {
            message: serde_json::Value,
        }

        let response = self
            .inner
            .client
            .post(format!("{}/checkout", self.inner.base_url))
            .bearer_auth(token.expose_secret())
            .json(request)
            .send()
            .await?;

        let body: Response = read_json(response).await?;
        Ok(flatten(body.message))
    }

    /// Fetch the signed-in user's order history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self, token))]
    pub async fn user_orders(&self, token: &SecretString) -> Result<Vec<OrderRecord>, ApiError> {
        #[derive(Deserialize)]
        struct Response {
            orders: Vec<OrderRecord>,
        }

        let response = self
            .inner
            .client
            .get(format!("{}/user_orders", self.inner.base_url))
            .bearer_auth(token.expose_secret())
            .send()
            .await?;

        let body: Response = read_json(response).await?;
        Ok(body.orders)
    }

    // =========================================================================
    // Admin Methods
    // =========================================================================

    /// Fetch every row of an admin-managed table as raw JSON objects.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self, token), fields(table = %table))]
    pub async fn admin_table(
        &self,
        token: &SecretString,
        table: AdminTable,
    ) -> Result<Vec<serde_json::Value>, ApiError> {
        let response = self
            .inner
            .client
            .get(format!("{}/{}", self.inner.base_url, table.as_str()))
            .bearer_auth(token.expose_secret())
            .send()
            .await?;

        let body: serde_json::Value = read_json(response).await?;
        let Some(rows) = body.get(table.as_str()).and_then(serde_json::Value::as_array) else {
            tracing::warn!("Response is missing the {} array", table.as_str());
            return Ok(Vec::new());
        };
        Ok(rows.clone())
    }

    /// Create a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, token, book), fields(title = %book.title))]
    pub async fn create_book(&self, token: &SecretString, book: &NewBook) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .post(format!("{}/books", self.inner.base_url))
            .bearer_auth(token.expose_secret())
            .json(book)
            .send()
            .await?;

        read_ok(response).await
    }

    /// Overwrite columns of one row.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, token, fields), fields(table = %table, id = id))]
    pub async fn update_record(
        &self,
        token: &SecretString,
        table: AdminTable,
        id: i64,
        fields: &serde_json::Value,
    ) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .put(format!("{}/{}/{id}", self.inner.base_url, table.as_str()))
            .bearer_auth(token.expose_secret())
            .json(fields)
            .send()
            .await?;

        read_ok(response).await
    }

    /// Delete one row.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, token), fields(table = %table, id = id))]
    pub async fn delete_record(
        &self,
        token: &SecretString,
        table: AdminTable,
        id: i64,
    ) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .delete(format!("{}/{}/{id}", self.inner.base_url, table.as_str()))
            .bearer_auth(token.expose_secret())
            .send()
            .await?;

        read_ok(response).await
    }
}

// =============================================================================
// Response Helpers
// =============================================================================

/// Parse a JSON body after screening the status code.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(status_error(status, &body));
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(
            status = %status,
            body = %body.chars().take(500).collect::<String>(),
            "Failed to parse API response"
        );
        ApiError::Parse(e)
    })
}

/// Screen the status code and discard the body.
async fn read_ok(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, &body))
}

/// Reduce an error body to its `detail` string.
fn status_error(status: StatusCode, body: &str) -> ApiError {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: serde_json::Value,
    }

    let detail = serde_json::from_str::<ErrorBody>(body)
        .map(|e| flatten(e.detail))
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                body.chars().take(200).collect()
            }
        });

    ApiError::Status { status, detail }
}

/// Render a JSON value as a plain string without quoting string values.
fn flatten(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
