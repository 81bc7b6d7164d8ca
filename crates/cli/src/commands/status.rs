//! Client status command.
//!
//! # Usage
//!
//! ```bash
//! fb-cli status
//! ```
//!
//! # Environment Variables
//!
//! - `FRONTIER_BOOKS_API_URL` - Backend base URL
//! - `FRONTIER_BOOKS_DATA_DIR` - Directory holding the cart and session files

use frontier_books_client::Context;

/// Print the client configuration and session state.
///
/// # Errors
///
/// Never fails; everything printed is already in memory.
pub fn run(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let cart = ctx.cart();

    #[allow(clippy::print_stdout)]
    {
        println!("API URL: {}", ctx.config().api_url);
        println!("Data directory: {}", ctx.config().data_dir.display());
        println!("Signed in: {}", if ctx.is_signed_in() { "yes" } else { "no" });
        if cart.is_empty() {
            println!("Cart: empty");
        } else {
            println!(
                "Cart: {} items, ${:.2}{}",
                cart.total_quantity(),
                cart.total_cost(),
                if cart.is_saved() { "" } else { " (not saved)" }
            );
        }
    }

    Ok(())
}
