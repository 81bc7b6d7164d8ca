//! Order history.

use tracing::warn;

use crate::api::types::OrderRecord;

use super::Context;

impl Context {
    /// Fetch the signed-in user's orders. `None` means no usable session.
    ///
    /// Transport failures degrade to an empty list with an error
    /// notification, matching the other read paths.
    ///
    /// # Errors
    ///
    /// This flow never constructs an error today; the signature matches the
    /// other gated flows.
    pub async fn order_history(&mut self) -> crate::Result<Option<Vec<OrderRecord>>> {
        let Some(token) = self.session.valid_access_token(self.surface.as_ref()) else {
            return Ok(None);
        };

        match self.api.user_orders(&token).await {
            Ok(orders) => {
                self.surface.notify("Loaded Data");
                Ok(Some(orders))
            }
            Err(e) => {
                warn!("Failed to fetch order history: {e}");
                self.surface.notify("Error");
                Ok(Some(Vec::new()))
            }
        }
    }
}
