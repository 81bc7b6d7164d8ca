//! Session state and advisory token expiry checks.
//!
//! The bearer token is persisted raw under [`keys::ACCESS_TOKEN`]. Expiry is
//! read from the token payload without verifying the signature; the check
//! only avoids sending requests that are certain to be rejected. The backend
//! remains the authority on token validity.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::storage::{LocalStore, StorageError, keys};
use crate::surface::{AlertRequest, ConfirmRequest, Surface};

#[derive(Debug, Deserialize)]
struct TokenClaims {
    exp: i64,
}

/// Decode the expiry (unix seconds) from a bearer token payload.
///
/// Returns `None` for anything that does not look like a JWT with a numeric
/// `exp` claim. Callers treat that the same as an expired token.
fn decode_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: TokenClaims = serde_json::from_slice(&bytes).ok()?;
    Some(claims.exp)
}

/// Persisted session with gate dialogs.
///
/// Reads go back to the [`LocalStore`] on every call so concurrent processes
/// sharing the data directory observe each other's sign-ins and sign-outs.
#[derive(Debug)]
pub struct SessionStore {
    store: LocalStore,
    authenticated: bool,
}

impl SessionStore {
    /// Load session state from the store. Read failures are logged and
    /// treated as signed out.
    #[must_use]
    pub fn load(store: LocalStore) -> Self {
        let authenticated = match store.get_raw(keys::ACCESS_TOKEN) {
            Ok(token) => token.is_some(),
            Err(e) => {
                warn!("Failed to read persisted token: {e}");
                false
            }
        };
        Self {
            store,
            authenticated,
        }
    }

    /// Whether a token was present at the last check.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Persist a freshly issued token and mark the session authenticated.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be written to the store.
    pub fn login(&mut self, token: &SecretString) -> Result<(), StorageError> {
        self.store.set_raw(keys::ACCESS_TOKEN, token.expose_secret())?;
        self.authenticated = true;
        Ok(())
    }

    /// Ask for confirmation, then erase the persisted token.
    ///
    /// Returns `false` when the user declines; nothing changes in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be removed from the store.
    pub fn logout(&mut self, surface: &dyn Surface) -> Result<bool, StorageError> {
        let request = ConfirmRequest::new("Sign Out?", "Are you sure you want to sign out?")
            .with_labels("Sign Out", "Cancel");
        if !surface.confirm(&request) {
            return Ok(false);
        }
        self.store.remove(keys::ACCESS_TOKEN)?;
        self.authenticated = false;
        surface.notify("Signed out.");
        Ok(true)
    }

    /// Return the persisted token if it is present and not visibly expired.
    ///
    /// Every failure branch raises the matching dialog and returns `None`;
    /// callers must treat `None` as "the operation cannot proceed".
    pub fn valid_access_token(&mut self, surface: &dyn Surface) -> Option<SecretString> {
        let token = match self.store.get_raw(keys::ACCESS_TOKEN) {
            Ok(token) => token,
            Err(e) => {
                warn!("Failed to read persisted token: {e}");
                None
            }
        };
        let Some(token) = token else {
            self.authenticated = false;
            let request =
                ConfirmRequest::new("Login Required", "This action requires you to log in.")
                    .with_labels("Sign In", "Cancel");
            if surface.confirm(&request) {
                debug!("Sign-in prompt accepted");
            }
            return None;
        };
        match decode_expiry(&token) {
            Some(exp) if Utc::now().timestamp_millis() < exp * 1000 => {
                self.authenticated = true;
                Some(SecretString::from(token))
            }
            Some(_) => {
                self.discard_token();
                surface.alert(&AlertRequest::new(
                    "Session Expired",
                    "Your session has expired. Please log in again.",
                ));
                None
            }
            None => {
                error!("Persisted token is malformed, discarding it");
                self.discard_token();
                surface.alert(&AlertRequest::new(
                    "Login Required",
                    "This action requires you to log in.",
                ));
                None
            }
        }
    }

    fn discard_token(&mut self) {
        if let Err(e) = self.store.remove(keys::ACCESS_TOKEN) {
            warn!("Failed to remove persisted token: {e}");
        }
        self.authenticated = false;
    }
}

/// Build a syntactically valid unsigned token expiring at `exp`.
#[cfg(test)]
pub(crate) fn make_token(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"42","exp":{exp}}}"#));
    format!("{header}.{payload}.sig")
}
