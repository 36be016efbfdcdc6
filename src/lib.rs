#![cfg_attr(not(test), deny(clippy::panic))]

//! Reads the default page of Product Hunt posts and renders the requested
//! properties as a JSON table.

pub mod adapter;
pub mod cli;
pub mod env;
mod error;
pub mod output;
mod style;

pub use error::{AdapterError, AdapterResult, Code, Metadata, Suggestion};

/// The name of this package
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
/// The version of this package
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
/// The authors of this package
pub const PKG_AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
