//! Sign-in, registration, and sign-out flows.

use tracing::warn;

use frontier_books_core::Email;

use super::{Context, user_detail};

/// Result of a credential flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// A session token was obtained and persisted.
    SignedIn,
    /// Local validation or the backend rejected the attempt.
    Rejected { detail: String },
}

impl Context {
    /// Exchange credentials for a session, then adopt the remote cart.
    ///
    /// The email is validated locally before any request goes out. A failed
    /// cart pull is logged but does not fail the sign-in.
    ///
    /// # Errors
    ///
    /// Returns an error if the token or cart mirror cannot be persisted.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> crate::Result<AuthOutcome> {
        let email = match Email::parse(email) {
            Ok(email) => email,
            Err(e) => {
                self.surface.notify(&format!("Invalid email: {e}"));
                return Ok(AuthOutcome::Rejected {
                    detail: e.to_string(),
                });
            }
        };

        self.surface.notify("Signing In");
        match self.api.login(email.as_str(), password).await {
            Ok(token) => {
                self.session.login(&token)?;
                self.pull_remote_cart().await?;
                self.surface.notify("Signed In Successfully!");
                Ok(AuthOutcome::SignedIn)
            }
            Err(e) => {
                warn!("Sign-in failed: {e}");
                let detail = user_detail(&e);
                self.surface.notify(&format!("Sign In Failed: {detail}"));
                Ok(AuthOutcome::Rejected { detail })
            }
        }
    }

    /// Create an account. The backend signs the new user in, so on success
    /// this behaves exactly like [`Self::sign_in`].
    ///
    /// # Errors
    ///
    /// Returns an error if the token or cart mirror cannot be persisted.
    pub async fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> crate::Result<AuthOutcome> {
        let email = match Email::parse(email) {
            Ok(email) => email,
            Err(e) => {
                self.surface.notify(&format!("Invalid email: {e}"));
                return Ok(AuthOutcome::Rejected {
                    detail: e.to_string(),
                });
            }
        };

        self.surface.notify("Creating Account");
        match self.api.register(username, email.as_str(), password).await {
            Ok(token) => {
                self.session.login(&token)?;
                self.pull_remote_cart().await?;
                self.surface.notify("Account Created Successfully!");
                Ok(AuthOutcome::SignedIn)
            }
            Err(e) => {
                warn!("Account creation failed: {e}");
                let detail = user_detail(&e);
                self.surface
                    .notify(&format!("Account Creation Failed: {detail}"));
                Ok(AuthOutcome::Rejected { detail })
            }
        }
    }

    /// Ask for confirmation, then drop the persisted session.
    ///
    /// Returns `false` when the user declines. The local cart survives a
    /// sign-out; only the token is erased.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be removed from the store.
    pub fn sign_out(&mut self) -> crate::Result<bool> {
        Ok(self.session.logout(self.surface.as_ref())?)
    }
}
