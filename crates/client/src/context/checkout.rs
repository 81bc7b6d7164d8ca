//! Checkout flow.

use serde_json::Value;
use tracing::{error, warn};

use frontier_books_core::PaymentMethod;

use crate::api::ApiError;
use crate::api::types::CheckoutRequest;
use crate::surface::AlertRequest;

use super::Context;

/// Result of an order submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The backend accepted the order.
    Placed { order_ref: String },
    /// The backend rejected the order or could not be reached. The cart is
    /// untouched.
    Rejected { detail: String },
    /// Nothing to order.
    EmptyCart,
    NotSignedIn,
}

impl Context {
    /// Submit the current cart as an order.
    ///
    /// Success empties the cart and removes its mirror entry outright. Any
    /// failure leaves the cart exactly as it was and raises a blocking
    /// dialog explaining what happened.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart mirror cannot be updated after a
    /// successful order.
    pub async fn place_order(
        &mut self,
        payment_method: PaymentMethod,
        payment_details: Value,
        delivery_address: Value,
    ) -> crate::Result<CheckoutOutcome> {
        let Some(token) = self.session.valid_access_token(self.surface.as_ref()) else {
            return Ok(CheckoutOutcome::NotSignedIn);
        };

        if self.cart.is_empty() {
            self.surface.notify("Your cart is empty.");
            return Ok(CheckoutOutcome::EmptyCart);
        }

        let request = CheckoutRequest {
            order_items: self.cart.order_items(),
            order_total_cost: self.cart.total_cost(),
            order_payment_method: payment_method,
            order_payment_details: payment_details,
            order_delivery_address: delivery_address,
        };

        match self.api.checkout(&token, &request).await {
            Ok(order_ref) => {
                self.cart.clear()?;
                self.surface.alert(&AlertRequest::new(
                    "Order Placed",
                    format!("Your order has been placed. Reference: {order_ref}"),
                ));
                Ok(CheckoutOutcome::Placed { order_ref })
            }
            Err(ApiError::Status { status, detail }) => {
                warn!("Checkout rejected with {status}: {detail}");
                self.surface
                    .alert(&AlertRequest::new("Checkout Failed", detail.clone()));
                Ok(CheckoutOutcome::Rejected { detail })
            }
            Err(e) => {
                error!("Checkout request failed: {e}");
                self.surface.alert(&AlertRequest::new(
                    "Checkout Failed",
                    format!("Could not reach the store: {e}"),
                ));
                Ok(CheckoutOutcome::Rejected {
                    detail: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;
    use serde_json::json;

    use frontier_books_core::BookId;

    use crate::api::types::Book;
    use crate::context::testing::offline_context;
    use crate::session::make_token;
    use crate::storage::keys;
    use crate::surface::testing::ScriptedSurface;

    use super::*;

    fn fresh_token() -> SecretString {
        SecretString::from(make_token(chrono::Utc::now().timestamp() + 3600))
    }

    fn book(id: i64, price: &str) -> Book {
        Book {
            id: BookId::new(id),
            title: format!("Book {id}"),
            author: "A. Author".to_string(),
            description: None,
            price: price.parse().unwrap(),
            cover_image_url: None,
        }
    }

    #[tokio::test]
    async fn checkout_requires_sign_in() {
        let surface = ScriptedSurface::default();
        let (_dir, mut context) = offline_context(&surface);

        let outcome = context
            .place_order(PaymentMethod::Credit, json!({}), json!({}))
            .await
            .unwrap();
        assert_eq!(outcome, CheckoutOutcome::NotSignedIn);
    }

    #[tokio::test]
    async fn empty_cart_short_circuits() {
        let surface = ScriptedSurface::default();
        let (_dir, mut context) = offline_context(&surface);
        context.session.login(&fresh_token()).unwrap();

        let outcome = context
            .place_order(PaymentMethod::Credit, json!({}), json!({}))
            .await
            .unwrap();
        assert_eq!(outcome, CheckoutOutcome::EmptyCart);
        assert_eq!(
            surface.notifications(),
            vec!["Your cart is empty.".to_string()]
        );
    }

    #[tokio::test]
    async fn failed_checkout_keeps_cart_and_mirror() {
        let surface = ScriptedSurface::default();
        let (_dir, mut context) = offline_context(&surface);
        context.session.login(&fresh_token()).unwrap();
        context.cart.add(&book(1, "12.50")).unwrap();
        context.cart.set_quantity(BookId::new(1), 2).unwrap();

        let outcome = context
            .place_order(
                PaymentMethod::Credit,
                json!({"card_holder": "Jo Reader"}),
                json!({"city": "Whitehorse"}),
            )
            .await
            .unwrap();

        assert!(matches!(outcome, CheckoutOutcome::Rejected { .. }));
        assert_eq!(context.cart().total_quantity(), 2);
        let alerts = surface.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].title, "Checkout Failed");

        // The mirror entry must survive a failed checkout.
        let store = crate::storage::LocalStore::open(context.config().data_dir.clone()).unwrap();
        assert!(store.get_raw(keys::CART).unwrap().is_some());
    }
}
