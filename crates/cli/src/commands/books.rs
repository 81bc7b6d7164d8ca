//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! # List every book in the catalog
//! fb-cli books list
//!
//! # Show one book with its description
//! fb-cli books show 3
//! ```

use frontier_books_client::Context;
use frontier_books_core::BookId;

use super::clip;

/// Print the whole catalog as a table.
///
/// # Errors
///
/// Never fails; an unreachable backend prints an empty catalog.
pub async fn list(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let books = ctx.catalog().list_books().await;

    #[allow(clippy::print_stdout)]
    {
        if books.is_empty() {
            println!("The catalog is empty.");
            return Ok(());
        }

        println!("{:>6}  {:<40}  {:<24}  {:>9}", "ID", "TITLE", "AUTHOR", "PRICE");
        for book in &books {
            println!(
                "{:>6}  {:<40}  {:<24}  {:>9}",
                book.id,
                clip(&book.title, 40),
                clip(&book.author, 24),
                format!("${:.2}", book.price)
            );
        }
    }

    Ok(())
}

/// Print one book's full details.
///
/// # Errors
///
/// Returns an error when the backend cannot be reached or the book does
/// not exist.
pub async fn show(ctx: &Context, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    let ids = [BookId::new(id)];
    let Some(books) = ctx.catalog().book_details(&ids).await else {
        return Err("could not fetch book details".into());
    };
    let Some(book) = books.first() else {
        return Err(format!("book {id} not found in the catalog").into());
    };

    #[allow(clippy::print_stdout)]
    {
        println!("{} by {}", book.title, book.author);
        println!("ID: {}", book.id);
        println!("Price: ${:.2}", book.price);
        if let Some(cover) = &book.cover_image_url {
            println!("Cover: {cover}");
        }
        if let Some(description) = &book.description {
            println!();
            println!("{description}");
        }
    }

    Ok(())
}
