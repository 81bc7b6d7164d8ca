//! Checkout command.
//!
//! Submits the current cart as an order. Card details are bundled into an
//! opaque payment blob exactly as the backend stores them; nothing is
//! validated locally beyond presence.
//!
//! # Usage
//!
//! ```bash
//! # Pay by card
//! fb-cli checkout --address "12 Front St" --city Dawson --postal-code "Y0B 1G0" \
//!     --card-name "A. Reader" --card-number 4111111111111111 --expiry 12/27 --csv 123
//!
//! # Pay with a gift card
//! fb-cli checkout --address "12 Front St" --city Dawson --postal-code "Y0B 1G0" \
//!     --method gift --gift-card FB-2048-1111
//! ```

use clap::Args;

use frontier_books_client::Context;
use frontier_books_client::context::CheckoutOutcome;
use frontier_books_core::PaymentMethod;

/// Arguments for `fb-cli checkout`.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Street address for delivery
    #[arg(long)]
    pub address: String,

    /// City for delivery
    #[arg(long)]
    pub city: String,

    /// Postal code for delivery
    #[arg(long)]
    pub postal_code: String,

    /// Payment method (`credit` or `gift`)
    #[arg(long, default_value = "credit")]
    pub method: PaymentMethod,

    /// Name on the card (with `--method credit`)
    #[arg(long)]
    pub card_name: Option<String>,

    /// Card number (with `--method credit`)
    #[arg(long)]
    pub card_number: Option<String>,

    /// Card expiry as MM/YY (with `--method credit`)
    #[arg(long)]
    pub expiry: Option<String>,

    /// Card security code (with `--method credit`)
    #[arg(long)]
    pub csv: Option<String>,

    /// Gift card code (with `--method gift`)
    #[arg(long)]
    pub gift_card: Option<String>,
}

/// Submit the cart as an order and print the order reference.
///
/// # Errors
///
/// Returns an error when payment details are missing for the chosen
/// method, no account is signed in, or the backend rejects the order.
pub async fn run(ctx: &mut Context, args: &CheckoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let delivery_address = serde_json::json!({
        "address": args.address,
        "city": args.city,
        "postal_code": args.postal_code,
    });

    let payment_details = match args.method {
        PaymentMethod::Credit => {
            let card_name = args
                .card_name
                .as_deref()
                .ok_or("--card-name is required for credit payments")?;
            let card_number = args
                .card_number
                .as_deref()
                .ok_or("--card-number is required for credit payments")?;
            let expiry = args
                .expiry
                .as_deref()
                .ok_or("--expiry is required for credit payments")?;
            let csv = args
                .csv
                .as_deref()
                .ok_or("--csv is required for credit payments")?;

            serde_json::json!({
                "card_name": card_name,
                "card_number": card_number,
                "expiry": expiry,
                "csv": csv,
            })
        }
        PaymentMethod::Gift => {
            let gift_card = args
                .gift_card
                .as_deref()
                .ok_or("--gift-card is required for gift card payments")?;

            serde_json::json!({ "gift_card_number": gift_card })
        }
    };

    match ctx
        .place_order(args.method, payment_details, delivery_address)
        .await?
    {
        CheckoutOutcome::Placed { order_ref } => {
            #[allow(clippy::print_stdout)]
            {
                println!("Order reference: {order_ref}");
            }
            Ok(())
        }
        CheckoutOutcome::EmptyCart => Ok(()),
        CheckoutOutcome::NotSignedIn => Err("not signed in".into()),
        CheckoutOutcome::Rejected { .. } => Err("checkout failed".into()),
    }
}
