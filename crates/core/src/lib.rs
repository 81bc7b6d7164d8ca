//! Frontier Books Core - Shared types library.
//!
//! This crate provides common types used across all Frontier Books components:
//! - `client` - Storefront client library (catalog, cart, checkout, sessions)
//! - `cli` - Command-line storefront and administration tool
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no file
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and payment methods

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
