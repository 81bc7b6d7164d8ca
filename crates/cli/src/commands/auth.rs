//! Account session commands.
//!
//! Signing in stores the backend's access token on disk and pulls the
//! account's saved cart. Signing out discards the token; the local cart
//! stays put.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (password prompted without echo)
//! fb-cli login -e reader@example.com
//!
//! # Create an account
//! fb-cli register -n "A. Reader" -e reader@example.com
//!
//! # Sign out
//! fb-cli logout --yes
//! ```

use frontier_books_client::Context;
use frontier_books_client::context::AuthOutcome;

/// Sign in to an existing account.
///
/// # Errors
///
/// Returns an error when the password prompt fails or the backend rejects
/// the credentials.
pub async fn login(
    ctx: &mut Context,
    email: &str,
    password: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let password = match password {
        Some(p) => p,
        None => rpassword::prompt_password("Password: ")?,
    };

    match ctx.sign_in(email, &password).await? {
        AuthOutcome::SignedIn => Ok(()),
        AuthOutcome::Rejected { .. } => Err("sign in failed".into()),
    }
}

/// Create a new account and sign in to it.
///
/// # Errors
///
/// Returns an error when the password prompt fails, the passwords do not
/// match, or the backend rejects the registration.
pub async fn register(
    ctx: &mut Context,
    name: &str,
    email: &str,
    password: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let password = match password {
        Some(p) => p,
        None => {
            let pw = rpassword::prompt_password("Password: ")?;
            let confirm = rpassword::prompt_password("Confirm password: ")?;
            if pw != confirm {
                return Err("passwords do not match".into());
            }
            pw
        }
    };
    if password.is_empty() {
        return Err("password cannot be empty".into());
    }

    match ctx.register(name, email, &password).await? {
        AuthOutcome::SignedIn => Ok(()),
        AuthOutcome::Rejected { .. } => Err("account creation failed".into()),
    }
}

/// Sign out after confirmation.
///
/// # Errors
///
/// Returns an error when the stored token cannot be removed.
pub fn logout(ctx: &mut Context) -> Result<(), Box<dyn std::error::Error>> {
    ctx.sign_out()?;
    Ok(())
}
