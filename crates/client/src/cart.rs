//! Local cart state with write-through persistence.
//!
//! The cart lives in memory and is mirrored to [`keys::CART`] on every
//! change, so a crash never loses more than the current mutation. Lines are
//! keyed by book id; quantities are always at least one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use frontier_books_core::BookId;

use crate::api::types::{Book, RemoteCartLine};
use crate::storage::{LocalStore, StorageError, keys};

/// One line of the local cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub price: Decimal,
    pub cover_image_url: String,
    pub quantity: u32,
}

impl CartLine {
    /// Build a line for one copy of `book`.
    #[must_use]
    pub fn from_book(book: &Book) -> Self {
        Self {
            book_id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            price: book.price,
            cover_image_url: book.cover_image_url.clone().unwrap_or_default(),
            quantity: 1,
        }
    }

    /// Line subtotal (price times quantity).
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// In-memory cart mirrored to the [`LocalStore`] on every change.
#[derive(Debug)]
pub struct CartManager {
    store: LocalStore,
    lines: Vec<CartLine>,
    saved: bool,
}

impl CartManager {
    /// Load the mirrored cart. A missing mirror yields an empty cart;
    /// corruption is logged and treated as absent.
    #[must_use]
    pub fn load(store: LocalStore) -> Self {
        let lines = match store.get_json::<Vec<CartLine>>(keys::CART) {
            Ok(Some(lines)) => lines,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to load cart mirror: {e}");
                Vec::new()
            }
        };
        Self {
            store,
            lines,
            saved: false,
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the current contents are known to match the backend copy.
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        self.saved
    }

    /// Total number of copies across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of line subtotals.
    #[must_use]
    pub fn total_cost(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// The cart in wire shape, ready for a push or a checkout.
    #[must_use]
    pub fn order_items(&self) -> Vec<RemoteCartLine> {
        self.lines
            .iter()
            .map(|line| RemoteCartLine {
                book_id: line.book_id,
                book_quantity: line.quantity,
            })
            .collect()
    }

    /// Add one copy. An existing line for the same book gains quantity
    /// instead of duplicating.
    ///
    /// # Errors
    ///
    /// Returns an error if the mirror cannot be written.
    pub fn add(&mut self, book: &Book) -> Result<(), StorageError> {
        match self.lines.iter_mut().find(|line| line.book_id == book.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::from_book(book)),
        }
        self.write_through()
    }

    /// Set a line's quantity. Zero removes the line; unknown ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the mirror cannot be written.
    pub fn set_quantity(&mut self, book_id: BookId, quantity: u32) -> Result<(), StorageError> {
        if quantity == 0 {
            return self.remove(book_id);
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.book_id == book_id) {
            line.quantity = quantity;
            return self.write_through();
        }
        Ok(())
    }

    /// Remove a line. Unknown ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the mirror cannot be written.
    pub fn remove(&mut self, book_id: BookId) -> Result<(), StorageError> {
        let before = self.lines.len();
        self.lines.retain(|line| line.book_id != book_id);
        if self.lines.len() == before {
            return Ok(());
        }
        self.write_through()
    }

    /// Replace the whole cart, e.g. with the remote copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the mirror cannot be written.
    pub fn replace_all(&mut self, lines: Vec<CartLine>) -> Result<(), StorageError> {
        self.lines = lines;
        self.write_through()
    }

    /// Empty the cart and delete the mirror entry outright.
    ///
    /// # Errors
    ///
    /// Returns an error if the mirror entry cannot be removed.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.lines.clear();
        self.saved = false;
        self.store.remove(keys::CART)
    }

    /// Mark the current contents as synced to the backend.
    pub fn mark_saved(&mut self) {
        self.saved = true;
    }

    fn write_through(&mut self) -> Result<(), StorageError> {
        self.saved = false;
        self.store.set_json(keys::CART, &self.lines)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, store)
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

    #[test]
    fn adding_the_same_book_merges_into_one_line() {
        let (_dir, store) = temp_store();
        let mut cart = CartManager::load(store);
        cart.add(&book(1, "12.50")).unwrap();
        cart.add(&book(1, "12.50")).unwrap();
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn distinct_books_get_distinct_lines() {
        let (_dir, store) = temp_store();
        let mut cart = CartManager::load(store);
        cart.add(&book(1, "12.50")).unwrap();
        cart.add(&book(2, "8.00")).unwrap();
        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn set_quantity_zero_removes_the_line() {
        let (_dir, store) = temp_store();
        let mut cart = CartManager::load(store);
        cart.add(&book(1, "12.50")).unwrap();
        cart.set_quantity(BookId::new(1), 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_replaces_rather_than_adds() {
        let (_dir, store) = temp_store();
        let mut cart = CartManager::load(store);
        cart.add(&book(1, "12.50")).unwrap();
        cart.set_quantity(BookId::new(1), 5).unwrap();
        cart.set_quantity(BookId::new(1), 3).unwrap();
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn unknown_ids_are_a_noop() {
        let (_dir, store) = temp_store();
        let mut cart = CartManager::load(store);
        cart.add(&book(1, "12.50")).unwrap();
        cart.set_quantity(BookId::new(99), 5).unwrap();
        cart.remove(BookId::new(99)).unwrap();
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn mirror_round_trips_across_reloads() {
        let (_dir, store) = temp_store();
        let mut cart = CartManager::load(store.clone());
        cart.add(&book(1, "12.50")).unwrap();
        cart.add(&book(2, "8.00")).unwrap();
        cart.set_quantity(BookId::new(1), 2).unwrap();
        let expected = cart.lines().to_vec();
        drop(cart);

        let reloaded = CartManager::load(store);
        assert_eq!(reloaded.lines(), expected.as_slice());
    }

    #[test]
    fn clear_removes_the_mirror_entry() {
        let (_dir, store) = temp_store();
        let mut cart = CartManager::load(store.clone());
        cart.add(&book(1, "12.50")).unwrap();
        assert!(store.get_raw(keys::CART).unwrap().is_some());

        cart.clear().unwrap();
        assert!(cart.is_empty());
        assert!(store.get_raw(keys::CART).unwrap().is_none());
        assert!(CartManager::load(store).is_empty());
    }

    #[test]
    fn corrupt_mirror_loads_as_empty() {
        let (_dir, store) = temp_store();
        store.set_raw(keys::CART, "{{{ not json").unwrap();
        let cart = CartManager::load(store);
        assert!(cart.is_empty());
    }

    #[test]
    fn totals_multiply_price_by_quantity() {
        let (_dir, store) = temp_store();
        let mut cart = CartManager::load(store);
        cart.add(&book(1, "12.50")).unwrap();
        cart.set_quantity(BookId::new(1), 2).unwrap();
        assert_eq!(cart.total_cost(), "25.00".parse::<Decimal>().unwrap());
    }

    #[test]
    fn mutations_clear_the_saved_flag() {
        let (_dir, store) = temp_store();
        let mut cart = CartManager::load(store);
        assert!(!cart.is_saved());
        cart.mark_saved();
        assert!(cart.is_saved());
        cart.add(&book(1, "12.50")).unwrap();
        assert!(!cart.is_saved());
    }

    #[test]
    fn order_items_carry_ids_and_quantities() {
        let (_dir, store) = temp_store();
        let mut cart = CartManager::load(store);
        cart.add(&book(1, "12.50")).unwrap();
        cart.set_quantity(BookId::new(1), 2).unwrap();
        let items = cart.order_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].book_id, BookId::new(1));
        assert_eq!(items[0].book_quantity, 2);
    }
}
