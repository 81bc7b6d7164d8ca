//! Shopping cart commands.
//!
//! The cart lives on disk and survives between invocations. `pull` and
//! `save` sync it with the signed-in account.
//!
//! # Usage
//!
//! ```bash
//! # Add one copy of book 3, then inspect the cart
//! fb-cli cart add 3
//! fb-cli cart show
//!
//! # Set an exact quantity, or drop a line
//! fb-cli cart set-quantity 3 2
//! fb-cli cart remove 3
//!
//! # Sync with the account
//! fb-cli cart pull
//! fb-cli cart save
//! ```

use frontier_books_client::Context;
use frontier_books_client::context::{CartOutcome, SyncOutcome};
use frontier_books_core::BookId;

use super::clip;

/// Print the cart as a table with a total line.
///
/// # Errors
///
/// Never fails; an empty cart prints a notice.
pub fn show(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let cart = ctx.cart();

    #[allow(clippy::print_stdout)]
    {
        if cart.is_empty() {
            println!("Your cart is empty.");
            return Ok(());
        }

        println!("{:>6}  {:<40}  {:>4}  {:>9}  {:>9}", "ID", "TITLE", "QTY", "EACH", "SUBTOTAL");
        for line in cart.lines() {
            println!(
                "{:>6}  {:<40}  {:>4}  {:>9}  {:>9}",
                line.book_id,
                clip(&line.title, 40),
                line.quantity,
                format!("${:.2}", line.price),
                format!("${:.2}", line.subtotal())
            );
        }
        println!();
        println!("{} items, total ${:.2}", cart.total_quantity(), cart.total_cost());

        if !cart.is_saved() {
            println!("Local changes not saved. Run `fb-cli cart save` to keep them on your account.");
        }
    }

    Ok(())
}

/// Add one copy of a book to the cart.
///
/// # Errors
///
/// Returns an error when the book cannot be resolved or no account is
/// signed in.
pub async fn add(ctx: &mut Context, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    let ids = [BookId::new(id)];
    let Some(books) = ctx.catalog().book_details(&ids).await else {
        return Err("could not fetch book details".into());
    };
    let Some(book) = books.first().cloned() else {
        return Err(format!("book {id} not found in the catalog").into());
    };

    match ctx.add_to_cart(&book)? {
        CartOutcome::NotSignedIn => Err("not signed in".into()),
        CartOutcome::Applied | CartOutcome::Declined => Ok(()),
    }
}

/// Set the quantity for a book already in the cart. Zero removes it.
///
/// # Errors
///
/// Returns an error when the book is not in the cart or no account is
/// signed in.
pub fn set_quantity(
    ctx: &mut Context,
    id: i64,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let book_id = BookId::new(id);
    if !ctx.cart().lines().iter().any(|line| line.book_id == book_id) {
        return Err(format!("book {id} is not in the cart").into());
    }

    match ctx.update_quantity(book_id, quantity)? {
        CartOutcome::NotSignedIn => Err("not signed in".into()),
        CartOutcome::Applied => {
            #[allow(clippy::print_stdout)]
            {
                if quantity > 0 {
                    println!("Set quantity to {quantity}.");
                }
            }
            Ok(())
        }
        CartOutcome::Declined => Ok(()),
    }
}

/// Remove a book from the cart after confirmation.
///
/// # Errors
///
/// Returns an error when the book is not in the cart or no account is
/// signed in.
pub fn remove(ctx: &mut Context, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    let book_id = BookId::new(id);
    if !ctx.cart().lines().iter().any(|line| line.book_id == book_id) {
        return Err(format!("book {id} is not in the cart").into());
    }

    match ctx.remove_item(book_id)? {
        CartOutcome::NotSignedIn => Err("not signed in".into()),
        CartOutcome::Applied => {
            #[allow(clippy::print_stdout)]
            {
                println!("Removed from cart.");
            }
            Ok(())
        }
        CartOutcome::Declined => Ok(()),
    }
}

/// Replace the local cart with the account's saved cart.
///
/// # Errors
///
/// Returns an error when no account is signed in or the saved cart cannot
/// be fetched.
pub async fn pull(ctx: &mut Context) -> Result<(), Box<dyn std::error::Error>> {
    match ctx.pull_remote_cart().await? {
        SyncOutcome::Completed => {
            #[allow(clippy::print_stdout)]
            {
                println!(
                    "Cart updated from your account ({} items).",
                    ctx.cart().total_quantity()
                );
            }
            Ok(())
        }
        SyncOutcome::NotSignedIn => Err("not signed in".into()),
        SyncOutcome::Failed => Err("could not fetch the saved cart".into()),
    }
}

/// Save the local cart to the account.
///
/// # Errors
///
/// Returns an error when no account is signed in or the backend rejects
/// the cart.
pub async fn save(ctx: &mut Context) -> Result<(), Box<dyn std::error::Error>> {
    match ctx.save_cart().await? {
        SyncOutcome::Completed => Ok(()),
        SyncOutcome::NotSignedIn => Err("not signed in".into()),
        SyncOutcome::Failed => Err("could not save the cart".into()),
    }
}
