use std::{collections::BTreeMap, fmt, fs, io};

use serde::Deserialize;

use crate::{Config, Credential, CredentialOrigin, CredentialResolver, HangarProblem, mask_key};

/// One entry of the connections file
#[derive(Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Connection {
    /// `name = "token"`
    Token(String),
    /// `[name]` with an `access_token` key
    Structured {
        /// The bearer token, when one is configured
        #[serde(default)]
        access_token: Option<String>,
    },
}

impl Connection {
    /// The token this connection carries, if any. Blank tokens count as absent.
    pub fn token(&self) -> Option<&str> {
        let token = match self {
            Connection::Token(token) => Some(token.as_str()),
            Connection::Structured { access_token } => access_token.as_deref(),
        };
        token.map(str::trim).filter(|token| !token.is_empty())
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token() {
            Some(token) => write!(f, "Connection({})", mask_key(token)),
            None => write!(f, "Connection(<no token>)"),
        }
    }
}

/// Named connections read from `connections.toml`, plus the token override
#[derive(Debug, Clone, Default)]
pub struct ConnectionStore {
    connections: BTreeMap<String, Connection>,
    override_token: Option<String>,
}

impl ConnectionStore {
    /// Reads the connections file under `config.home`. A missing file is an empty store.
    pub fn load(config: &Config) -> Result<ConnectionStore, HangarProblem> {
        let path = config.connections_path();
        let store = match fs::read_to_string(&path) {
            Ok(contents) => {
                ConnectionStore::from_toml(&contents)
                    .map_err(|source| HangarProblem::InvalidConnectionsFile { path, source })?
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(%path, "no connections file found");
                ConnectionStore::default()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(store.with_override_token(config.override_token.clone()))
    }

    /// Parses connections from TOML text. The text must be valid TOML, but
    /// entries that are neither a token nor a table are skipped.
    pub fn from_toml(contents: &str) -> Result<ConnectionStore, toml::de::Error> {
        let table: toml::Table = toml::from_str(contents)?;
        let mut connections = BTreeMap::new();
        for (name, value) in table {
            match value.try_into::<Connection>() {
                Ok(connection) => {
                    connections.insert(name, connection);
                }
                Err(err) => {
                    tracing::warn!(%name, %err, "skipping an entry that is not a connection");
                }
            }
        }
        Ok(ConnectionStore {
            connections,
            override_token: None,
        })
    }

    /// Adds or replaces a connection
    pub fn with_connection(mut self, name: impl Into<String>, connection: Connection) -> Self {
        self.connections.insert(name.into(), connection);
        self
    }

    /// Sets a token that wins over every stored connection
    pub fn with_override_token(mut self, override_token: Option<String>) -> Self {
        self.override_token = override_token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());
        self
    }

    /// The names of every stored connection
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.connections.keys().map(String::as_str)
    }
}

impl CredentialResolver for ConnectionStore {
    fn resolve(&self, connection: &str) -> Result<Option<Credential>, HangarProblem> {
        if let Some(token) = &self.override_token {
            tracing::debug!("using the token from the environment");
            return Ok(Some(Credential {
                token: token.clone(),
                origin: CredentialOrigin::EnvVar,
            }));
        }
        let credential = self
            .connections
            .get(connection)
            .and_then(Connection::token)
            .map(|token| Credential {
                token: token.to_string(),
                origin: CredentialOrigin::ConfigFile(connection.to_string()),
            });
        if credential.is_none() {
            tracing::debug!(connection, "no token configured for connection");
        }
        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use speculoos::prelude::*;

    use super::*;

    const CONNECTIONS: &str = r#"
producthunt_connection = "abcdefgh12345678"
blank = "   "

[producthunt_oauth]
access_token = "oauth-token-0000"

[empty_table]
"#;

    #[rstest]
    #[case::bare_string("producthunt_connection", Some("abcdefgh12345678"))]
    #[case::table("producthunt_oauth", Some("oauth-token-0000"))]
    #[case::blank_string("blank", None)]
    #[case::table_without_token("empty_table", None)]
    #[case::unknown("nope", None)]
    fn it_resolves_tokens_by_connection_name(
        #[case] connection: &str,
        #[case] expected: Option<&str>,
    ) {
        let store = ConnectionStore::from_toml(CONNECTIONS).unwrap();
        let credential = store.resolve(connection).unwrap();
        assert_eq!(
            credential.as_ref().map(|credential| credential.token.as_str()),
            expected
        );
        if let Some(credential) = credential {
            assert_eq!(
                credential.origin,
                CredentialOrigin::ConfigFile(connection.to_string())
            );
        }
    }

    #[test]
    fn override_token_wins() {
        let store = ConnectionStore::from_toml(CONNECTIONS)
            .unwrap()
            .with_override_token(Some("from-env".to_string()));
        let credential = store.resolve("producthunt_connection").unwrap().unwrap();
        assert_eq!(credential.token, "from-env");
        assert_eq!(credential.origin, CredentialOrigin::EnvVar);

        let credential = store.resolve("nope").unwrap().unwrap();
        assert_eq!(credential.token, "from-env");
    }

    #[test]
    fn blank_override_token_is_ignored() {
        let store = ConnectionStore::default()
            .with_connection("c", Connection::Token("stored".to_string()))
            .with_override_token(Some("  ".to_string()));
        assert_eq!(store.resolve("c").unwrap().unwrap().token, "stored");
    }

    #[test]
    fn it_skips_entries_that_are_not_connections() {
        let store = ConnectionStore::from_toml(
            "timeout = 30\nretries = [1, 2]\nproducthunt_connection = \"abcdefgh12345678\"\n",
        )
        .unwrap();
        assert_eq!(store.names().collect::<Vec<_>>(), vec!["producthunt_connection"]);
        assert_eq!(
            store.resolve("producthunt_connection").unwrap().unwrap().token,
            "abcdefgh12345678"
        );
        assert!(store.resolve("timeout").unwrap().is_none());
    }

    #[test]
    fn it_rejects_invalid_toml() {
        assert_that!(ConnectionStore::from_toml("producthunt_connection = [")).is_err();
    }

    #[test]
    fn it_never_debugs_a_whole_token() {
        let connection = Connection::Token("abcdefgh12345678".to_string());
        let debugged = format!("{connection:?}");
        assert!(!debugged.contains("abcdefgh12345678"));
        assert!(debugged.contains("abcd"));
    }

    #[test]
    fn it_lists_connection_names() {
        let store = ConnectionStore::from_toml(CONNECTIONS).unwrap();
        assert_eq!(
            store.names().collect::<Vec<_>>(),
            vec!["blank", "empty_table", "producthunt_connection", "producthunt_oauth"]
        );
    }
}
