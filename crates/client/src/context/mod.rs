//! Application context wiring state to user-facing flows.
//!
//! [`Context`] owns the API client, catalog cache, session, cart, and the
//! frontend surface. Every flow is a method on it; frontends construct one
//! context and drive everything through it.

mod admin;
mod auth;
mod cart;
mod checkout;
mod orders;

pub use admin::MutateOutcome;
pub use auth::AuthOutcome;
pub use cart::{CartOutcome, SyncOutcome};
pub use checkout::CheckoutOutcome;

use crate::api::{ApiClient, ApiError};
use crate::cart::CartManager;
use crate::catalog::Catalog;
use crate::config::ClientConfig;
use crate::session::SessionStore;
use crate::storage::LocalStore;
use crate::surface::Surface;

/// Everything a storefront session needs, wired together.
pub struct Context {
    config: ClientConfig,
    api: ApiClient,
    catalog: Catalog,
    session: SessionStore,
    cart: CartManager,
    surface: Box<dyn Surface>,
}

impl Context {
    /// Build a context from configuration. Opens the on-disk store and loads
    /// the persisted session and cart mirror.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new(config: ClientConfig, surface: Box<dyn Surface>) -> crate::Result<Self> {
        let store = LocalStore::open(&config.data_dir)?;
        let api = ApiClient::new(&config);
        let catalog = Catalog::new(api.clone());
        let session = SessionStore::load(store.clone());
        let cart = CartManager::load(store);
        Ok(Self {
            config,
            api,
            catalog,
            session,
            cart,
            surface,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn cart(&self) -> &CartManager {
        &self.cart
    }

    /// Whether a token was present at the last session check.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_authenticated()
    }
}

/// The part of an API failure worth showing to the user.
pub(crate) fn user_detail(error: &ApiError) -> String {
    match error {
        ApiError::Status { detail, .. } => detail.clone(),
        other => other.to_string(),
    }
}
