use std::fmt;

use crate::HangarProblem;

/// Looks up the token for a named connection.
///
/// `Ok(None)` means nothing is configured for that connection, which callers
/// treat differently from a store that could not be read at all.
pub trait CredentialResolver {
    /// Resolve `connection` to a credential
    fn resolve(&self, connection: &str) -> Result<Option<Credential>, HangarProblem>;
}

impl<T: CredentialResolver + ?Sized> CredentialResolver for &T {
    fn resolve(&self, connection: &str) -> Result<Option<Credential>, HangarProblem> {
        (**self).resolve(connection)
    }
}

/// A bearer token and where it came from
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// The token sent in the `Authorization` header
    pub token: String,
    /// Where the token was found
    pub origin: CredentialOrigin,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &mask_key(&self.token))
            .field("origin", &self.origin)
            .finish()
    }
}

/// Info about where the token was retrieved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialOrigin {
    /// The token came from an environment variable
    EnvVar,
    /// The token came from the named connection in the connections file
    ConfigFile(String),
}

/// Masks all but the first 4 and last 4 chars of a key with `*`.
/// Keys of 8 chars or fewer are masked entirely.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}{}{tail}", "*".repeat(chars.len() - 8))
}
