//! Frontier Books CLI - Terminal storefront and store management tools.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! fb-cli books list
//! fb-cli books show 3
//!
//! # Sign in, build a cart, and save it to the account
//! fb-cli login -e reader@example.com
//! fb-cli cart add 3
//! fb-cli cart save
//!
//! # Place an order
//! fb-cli checkout --address "12 Front St" --city Dawson --postal-code "Y0B 1G0" \
//!     --card-name "A. Reader" --card-number 4111111111111111 --expiry 12/27 --csv 123
//!
//! # Manage store data (admin account required)
//! fb-cli admin list books
//! ```
//!
//! # Commands
//!
//! - `books` - Browse the catalog
//! - `cart` - Manage the local cart and sync it with the account
//! - `login` / `register` / `logout` - Account sessions
//! - `checkout` - Submit the cart as an order
//! - `orders` - Show order history
//! - `admin` - List, add, edit, and delete store data
//! - `status` - Show client configuration and session state

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use frontier_books_client::config::ClientConfig;
use frontier_books_client::{Context, api::types::AdminTable};
use rust_decimal::Decimal;

mod commands;
mod surface;

use surface::TerminalSurface;

#[derive(Parser)]
#[command(name = "fb-cli")]
#[command(author, version, about = "Frontier Books terminal storefront")]
struct Cli {
    /// Answer yes to every confirmation prompt
    #[arg(long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the book catalog
    Books {
        #[command(subcommand)]
        action: BooksAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Sign in to an account
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create a new account
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign out and discard the stored session
    Logout,
    /// Submit the current cart as an order
    Checkout(commands::checkout::CheckoutArgs),
    /// Show the account's order history
    Orders,
    /// Manage store data (admin account required)
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Show client configuration and session state
    Status,
}

#[derive(Subcommand)]
enum BooksAction {
    /// List every book in the catalog
    List,
    /// Show one book with its description
    Show {
        /// Book ID
        id: i64,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart contents
    Show,
    /// Add one copy of a book to the cart
    Add {
        /// Book ID
        id: i64,
    },
    /// Set the quantity for a book already in the cart
    SetQuantity {
        /// Book ID
        id: i64,

        /// New quantity (0 removes the book)
        quantity: u32,
    },
    /// Remove a book from the cart
    Remove {
        /// Book ID
        id: i64,
    },
    /// Replace the local cart with the account's saved cart
    Pull,
    /// Save the local cart to the account
    Save,
}

#[derive(Subcommand)]
enum AdminAction {
    /// List every row in a table as JSON
    List {
        /// Table to list (`books`, `users`, or `orders`)
        table: AdminTable,
    },
    /// Add a book to the catalog
    AddBook {
        /// Book title
        #[arg(long)]
        title: String,

        /// Author name
        #[arg(long)]
        author: String,

        /// Back-cover description
        #[arg(long)]
        description: Option<String>,

        /// Price in dollars, e.g. 12.50
        #[arg(long)]
        price: Decimal,

        /// Cover image URL
        #[arg(long)]
        cover_url: Option<String>,
    },
    /// Update columns of a row
    Update {
        /// Table to update (`books`, `users`, or `orders`)
        table: AdminTable,

        /// Row ID
        id: i64,

        /// Change as a `column=value` pair (repeatable)
        #[arg(long = "set", required = true)]
        set: Vec<String>,
    },
    /// Delete a row
    Delete {
        /// Table to delete from (`books`, `users`, or `orders`)
        table: AdminTable,

        /// Row ID
        id: i64,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "frontier_books_cli=info,frontier_books_client=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let surface = TerminalSurface::new(cli.yes);
    let mut ctx = Context::new(config, Box::new(surface))?;

    match cli.command {
        Commands::Books { action } => match action {
            BooksAction::List => commands::books::list(&ctx).await?,
            BooksAction::Show { id } => commands::books::show(&ctx, id).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&ctx)?,
            CartAction::Add { id } => commands::cart::add(&mut ctx, id).await?,
            CartAction::SetQuantity { id, quantity } => {
                commands::cart::set_quantity(&mut ctx, id, quantity)?;
            }
            CartAction::Remove { id } => commands::cart::remove(&mut ctx, id)?,
            CartAction::Pull => commands::cart::pull(&mut ctx).await?,
            CartAction::Save => commands::cart::save(&mut ctx).await?,
        },
        Commands::Login { email, password } => {
            commands::auth::login(&mut ctx, &email, password).await?;
        }
        Commands::Register {
            name,
            email,
            password,
        } => commands::auth::register(&mut ctx, &name, &email, password).await?,
        Commands::Logout => commands::auth::logout(&mut ctx)?,
        Commands::Checkout(args) => commands::checkout::run(&mut ctx, &args).await?,
        Commands::Orders => commands::orders::run(&mut ctx).await?,
        Commands::Admin { action } => match action {
            AdminAction::List { table } => commands::admin::list(&mut ctx, table).await?,
            AdminAction::AddBook {
                title,
                author,
                description,
                price,
                cover_url,
            } => {
                commands::admin::add_book(&mut ctx, title, author, description, price, cover_url)
                    .await?;
            }
            AdminAction::Update { table, id, set } => {
                commands::admin::update(&mut ctx, table, id, &set).await?;
            }
            AdminAction::Delete { table, id } => commands::admin::delete(&mut ctx, table, id).await?,
        },
        Commands::Status => commands::status::run(&ctx)?,
    }

    Ok(())
}
