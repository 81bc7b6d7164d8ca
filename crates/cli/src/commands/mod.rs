//! CLI command implementations.

pub mod admin;
pub mod auth;
pub mod books;
pub mod cart;
pub mod checkout;
pub mod orders;
pub mod status;

/// Clip a cell to `max` characters for table output.
pub(crate) fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_owned()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
