//! Cart mutations and remote synchronization.
//!
//! Every mutation is gated on a usable session token; the gate raises its
//! own dialogs. Mutations apply locally with write-through mirroring and
//! only reach the backend on an explicit save.

use tracing::{debug, warn};

use frontier_books_core::BookId;

use crate::api::types::Book;
use crate::cart::CartLine;
use crate::surface::ConfirmRequest;

use super::Context;

/// What a gated cart mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOutcome {
    /// The mutation was applied and mirrored.
    Applied,
    /// No usable session token; nothing changed.
    NotSignedIn,
    /// The user declined the confirmation dialog; nothing changed.
    Declined,
}

/// Result of a cart push or pull.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Completed,
    NotSignedIn,
    /// The backend could not be reached or rejected the request. The local
    /// cart is untouched.
    Failed,
}

impl Context {
    /// Add one copy of `book` to the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart mirror cannot be written.
    pub fn add_to_cart(&mut self, book: &Book) -> crate::Result<CartOutcome> {
        if self
            .session
            .valid_access_token(self.surface.as_ref())
            .is_none()
        {
            return Ok(CartOutcome::NotSignedIn);
        }
        self.cart.add(book)?;
        self.surface
            .notify(&format!("Added \"{}\" to cart.", book.title));
        Ok(CartOutcome::Applied)
    }

    /// Set the quantity for a book. Zero routes through
    /// [`Self::remove_item`], confirmation included.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart mirror cannot be written.
    pub fn update_quantity(&mut self, book_id: BookId, quantity: u32) -> crate::Result<CartOutcome> {
        if quantity == 0 {
            return self.remove_item(book_id);
        }
        if self
            .session
            .valid_access_token(self.surface.as_ref())
            .is_none()
        {
            return Ok(CartOutcome::NotSignedIn);
        }
        self.cart.set_quantity(book_id, quantity)?;
        Ok(CartOutcome::Applied)
    }

    /// Remove a line after asking for confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart mirror cannot be written.
    pub fn remove_item(&mut self, book_id: BookId) -> crate::Result<CartOutcome> {
        if self
            .session
            .valid_access_token(self.surface.as_ref())
            .is_none()
        {
            return Ok(CartOutcome::NotSignedIn);
        }
        let request = ConfirmRequest::new(
            "Remove Item?",
            "Are you sure you want to remove this item?",
        );
        if !self.surface.confirm(&request) {
            return Ok(CartOutcome::Declined);
        }
        self.cart.remove(book_id)?;
        Ok(CartOutcome::Applied)
    }

    /// Replace the local cart with the remote copy.
    ///
    /// Remote ids are resolved to full records through the catalog; ids that
    /// no longer resolve are dropped with a warning. On any failure the
    /// local cart is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart mirror cannot be written.
    pub async fn pull_remote_cart(&mut self) -> crate::Result<SyncOutcome> {
        let Some(token) = self.session.valid_access_token(self.surface.as_ref()) else {
            return Ok(SyncOutcome::NotSignedIn);
        };

        let remote = match self.api.fetch_cart(&token).await {
            Ok(items) => items,
            Err(e) => {
                warn!("Failed to fetch remote cart: {e}");
                return Ok(SyncOutcome::Failed);
            }
        };

        if remote.is_empty() {
            self.cart.replace_all(Vec::new())?;
            self.cart.mark_saved();
            return Ok(SyncOutcome::Completed);
        }

        let ids: Vec<BookId> = remote.iter().map(|item| item.book_id).collect();
        let Some(books) = self.catalog.book_details(&ids).await else {
            warn!("Could not resolve remote cart contents, keeping the local cart");
            return Ok(SyncOutcome::Failed);
        };

        let mut lines = Vec::with_capacity(remote.len());
        for item in &remote {
            let Some(book) = books.iter().find(|book| book.id == item.book_id) else {
                warn!(
                    "Book {} is no longer in the catalog, dropping its cart line",
                    item.book_id
                );
                continue;
            };
            if item.book_quantity == 0 {
                debug!("Dropping zero-quantity line for book {}", item.book_id);
                continue;
            }
            let mut line = CartLine::from_book(book);
            line.quantity = item.book_quantity;
            lines.push(line);
        }

        self.cart.replace_all(lines)?;
        self.cart.mark_saved();
        Ok(SyncOutcome::Completed)
    }

    /// Push the local cart to the backend, replacing the remote copy.
    ///
    /// # Errors
    ///
    /// This flow reports push failures through [`SyncOutcome::Failed`] and a
    /// notification; `Err` is reserved for local storage faults.
    pub async fn save_cart(&mut self) -> crate::Result<SyncOutcome> {
        let Some(token) = self.session.valid_access_token(self.surface.as_ref()) else {
            return Ok(SyncOutcome::NotSignedIn);
        };

        let items = self.cart.order_items();
        match self.api.push_cart(&token, &items).await {
            Ok(()) => {
                self.cart.mark_saved();
                self.surface.notify("Cart saved.");
                Ok(SyncOutcome::Completed)
            }
            Err(e) => {
                warn!("Failed to save cart: {e}");
                self.surface.notify(&format!("Failed to save cart: {e}"));
                Ok(SyncOutcome::Failed)
            }
        }
    }
}
