//! Frontier Books client library.
//!
//! Talks to the hosted REST backend, mirrors session and cart state under a
//! local data directory, and drives every user-facing flow through the
//! [`surface`] traits so frontends stay replaceable.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod session;
pub mod storage;
pub mod surface;

pub use context::Context;
pub use error::{Error, Result};
