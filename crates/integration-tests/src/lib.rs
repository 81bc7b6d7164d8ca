//! Integration tests for Frontier Books.
//!
//! # Running Tests
//!
//! ```bash
//! # Point the suite at a backend
//! export FRONTIER_BOOKS_API_URL=http://localhost:8000
//!
//! # Run integration tests (ignored by default)
//! cargo test -p frontier-books-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `catalog_flow` - Public catalog endpoints
//! - `account_flow` - Registration, login, cart sync, and checkout
//! - `admin_flow` - Admin table listing and mutation (admin credentials
//!   required)
//!
//! Account tests create their own throwaway accounts with uuid-suffixed
//! email addresses and never touch existing data. Admin tests mutate the
//! catalog and clean up after themselves.
