//! Order history command.
//!
//! # Usage
//!
//! ```bash
//! fb-cli orders
//! ```

use frontier_books_client::Context;

/// Print the account's orders as a table.
///
/// # Errors
///
/// Returns an error when no account is signed in.
pub async fn run(ctx: &mut Context) -> Result<(), Box<dyn std::error::Error>> {
    let Some(orders) = ctx.order_history().await? else {
        return Err("not signed in".into());
    };

    #[allow(clippy::print_stdout)]
    {
        if orders.is_empty() {
            println!("No orders yet.");
            return Ok(());
        }

        println!("{:>8}  {:>10}  {:<12}  {}", "ORDER", "TOTAL", "STATUS", "PLACED");
        for order in &orders {
            println!(
                "{:>8}  {:>10}  {:<12}  {}",
                order.order_id,
                format!("${:.2}", order.total_amount),
                order.order_status,
                order.created_at
            );
        }
    }

    Ok(())
}
