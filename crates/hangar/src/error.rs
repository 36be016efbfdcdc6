use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// HangarProblem is the type of Error that occured.
#[derive(Error, Debug)]
pub enum HangarProblem {
    /// DefaultConfigDirNotFound occurs when the default OS config can't be found.
    #[error("Could not determine default OS configuration directory.")]
    DefaultConfigDirNotFound,

    /// InvalidOverrideConfigDir occurs when a user provides a path to a non-directory.
    #[error("'{0}' already exists and is not a directory.")]
    InvalidOverrideConfigDir(String),

    /// InvalidConnectionsFile occurs when the connections file isn't valid TOML
    /// or holds something other than tokens and token tables.
    #[error("Could not read connections from '{path}'.")]
    InvalidConnectionsFile {
        /// Where the connections file lives
        path: Utf8PathBuf,
        /// What went wrong while parsing it
        #[source]
        source: toml::de::Error,
    },

    /// PathNotUtf8 occurs when Hangar encounters a file path that is not valid UTF-8
    #[error(transparent)]
    PathNotUtf8(#[from] camino::FromPathBufError),

    /// io::Error occurs when any given std::io::Error arises.
    #[error(transparent)]
    IoError(#[from] io::Error),
}
