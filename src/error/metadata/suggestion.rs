use std::fmt::{self, Display};

use camino::Utf8PathBuf;

use crate::env::PhEnvKey;
use crate::style::Style;

/// `Suggestion` contains possible suggestions for remedying specific errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Suggestion {
    /// Pass a JSON array
    ProvideJsonArray,
    /// Use known property names
    ProvideValidProperties,
    /// Configure a token for the connection
    SetToken {
        /// The connection that had no token
        connection: String,
    },
    /// The token was refused
    CheckToken,
    /// Product Hunt could not be reached
    CheckServerConnection,
    /// The connections file could not be parsed
    FixConnectionsFile(Utf8PathBuf),
    /// Nothing specific to try
    SubmitIssue,
}

impl Display for Suggestion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suggestion = match self {
            Suggestion::ProvideJsonArray => format!(
                "Pass a JSON array whose first element selects properties, for example {}",
                Style::Command.paint("'[\"id,name\"]'")
            ),
            Suggestion::ProvideValidProperties => format!(
                "Known properties are {}. Use {} for all of them.",
                Style::Command.paint(
                    crate::adapter::PROPERTY_MAP
                        .canonical_names()
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                Style::Command.paint("\"*\"")
            ),
            Suggestion::SetToken { connection } => format!(
                "Set {} or add {} to {}",
                Style::Command.paint(format!("${}", PhEnvKey::Token)),
                Style::Command.paint(format!("{connection} = \"<token>\"")),
                Style::Path.paint("connections.toml")
            ),
            Suggestion::CheckToken => format!(
                "Check that the access token is valid. A token in {} overrides every connection.",
                Style::Command.paint(format!("${}", PhEnvKey::Token))
            ),
            Suggestion::CheckServerConnection => {
                "Make sure Product Hunt is reachable from this machine.".to_string()
            }
            Suggestion::FixConnectionsFile(path) => format!(
                "Each entry in {} must be a token string or a table with an {} key",
                Style::Path.paint(path.as_str()),
                Style::Command.paint("access_token")
            ),
            Suggestion::SubmitIssue => {
                "This error was unexpected! Re-run with `--log debug` and report what you were trying to do.".to_string()
            }
        };
        write!(formatter, "{}", &suggestion)
    }
}
