#![deny(missing_docs)]

//! GraphQL client for reading posts from the Product Hunt API.

mod client;
mod error;

/// Module related to constructing request headers.
pub mod headers;

/// Operations this client can run against Product Hunt
pub mod operations;

pub use client::{DEFAULT_ENDPOINT, ProductHuntClient};
pub use error::ProductHuntClientError;
