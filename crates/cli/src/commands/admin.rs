//! Store data management commands.
//!
//! Every command here calls endpoints that require an admin account's
//! token. Sign in with `fb-cli login` first; the backend rejects
//! non-admin accounts.
//!
//! # Usage
//!
//! ```bash
//! # Dump raw table rows as JSON
//! fb-cli admin list books
//!
//! # Add a book to the catalog
//! fb-cli admin add-book --title "Songs of a Sourdough" --author "R. Service" --price 12.50
//!
//! # Update columns of a row
//! fb-cli admin update books 3 --set price=14.00 --set title="Songs of a Sourdough"
//!
//! # Delete a row
//! fb-cli admin delete users 7 --yes
//! ```

use rust_decimal::Decimal;
use serde_json::Value;

use frontier_books_client::Context;
use frontier_books_client::api::types::{AdminTable, NewBook};
use frontier_books_client::context::MutateOutcome;

/// Print every row of a table as pretty JSON.
///
/// # Errors
///
/// Returns an error when no account is signed in.
pub async fn list(ctx: &mut Context, table: AdminTable) -> Result<(), Box<dyn std::error::Error>> {
    let Some(rows) = ctx.admin_rows(table).await? else {
        return Err("not signed in".into());
    };

    #[allow(clippy::print_stdout)]
    {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    }

    Ok(())
}

/// Add a book to the catalog.
///
/// # Errors
///
/// Returns an error when no account is signed in or the backend rejects
/// the book.
pub async fn add_book(
    ctx: &mut Context,
    title: String,
    author: String,
    description: Option<String>,
    price: Decimal,
    cover_url: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let book = NewBook {
        title,
        author,
        description: description.unwrap_or_default(),
        price,
        cover_image_url: cover_url.unwrap_or_default(),
    };

    match ctx.add_book(&book).await? {
        MutateOutcome::Done | MutateOutcome::Declined => Ok(()),
        MutateOutcome::NotSignedIn => Err("not signed in".into()),
        MutateOutcome::Failed => Err("could not add the book".into()),
    }
}

/// Update columns of a row from `column=value` pairs.
///
/// Values that parse as JSON are sent typed; anything else is sent as a
/// string. `--set price=14.00` therefore updates a number while
/// `--set title=Klondike` updates text.
///
/// # Errors
///
/// Returns an error when a pair is malformed, no account is signed in, or
/// the backend rejects the update.
pub async fn update(
    ctx: &mut Context,
    table: AdminTable,
    id: i64,
    set: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut changes = serde_json::Map::new();
    for pair in set {
        let Some((column, value)) = pair.split_once('=') else {
            return Err(format!("invalid --set value: {pair} (expected column=value)").into());
        };
        let value = serde_json::from_str::<Value>(value)
            .unwrap_or_else(|_| Value::String(value.to_owned()));
        changes.insert(column.to_owned(), value);
    }

    match ctx.update_row(table, id, &Value::Object(changes)).await? {
        MutateOutcome::Done | MutateOutcome::Declined => Ok(()),
        MutateOutcome::NotSignedIn => Err("not signed in".into()),
        MutateOutcome::Failed => Err("could not update the row".into()),
    }
}

/// Delete a row after confirmation.
///
/// # Errors
///
/// Returns an error when no account is signed in or the backend rejects
/// the deletion.
pub async fn delete(
    ctx: &mut Context,
    table: AdminTable,
    id: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    match ctx.delete_row(table, id).await? {
        MutateOutcome::Done | MutateOutcome::Declined => Ok(()),
        MutateOutcome::NotSignedIn => Err("not signed in".into()),
        MutateOutcome::Failed => Err("could not delete the row".into()),
    }
}
