#![cfg_attr(not(test), deny(clippy::panic))]
#![deny(missing_docs)]

//! Where the Product Hunt access token comes from.
//!
//! Tokens live in `connections.toml` under the configuration home, keyed by
//! connection name. A connection is either a bare token string or a table
//! with an `access_token` key:
//!
//! ```toml
//! producthunt_connection = "f2a1..."
//!
//! [producthunt_oauth]
//! access_token = "9c3e..."
//! ```

mod config;
mod connection;
mod credential;
mod error;

pub use config::{CONNECTIONS_FILE, Config};
pub use connection::{Connection, ConnectionStore};
pub use credential::{Credential, CredentialOrigin, CredentialResolver, mask_key};
pub use error::HangarProblem;
