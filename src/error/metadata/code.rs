use std::fmt::{self, Display};

use strum_macros::{EnumIter, EnumString};

/// `Code` contains the error codes associated with specific errors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Code {
    /// The input is not a JSON array
    E001,
    /// The properties selector is invalid
    E002,
    /// No access token is configured
    E003,
    /// Product Hunt could not be reached or refused the request
    E004,
    /// Anything else
    E005,
}

impl Display for Code {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{self:?}")
    }
}

impl Code {
    /// A longer description of what the code means and how to get past it
    pub const fn explain(&self) -> &'static str {
        match self {
            Code::E001 => {
                "The input must be a JSON array. Its first element, if present, selects the \
                 properties to return. Blank input and an empty array select every property.\n\n\
                 Example: [\"id,name\"]"
            }
            Code::E002 => {
                "The properties selector must be a comma separated string or a list of strings. \
                 Lists may contain one level of nested lists. Names are trimmed and lowercased, \
                 and at least one must remain. Use \"*\" for every property."
            }
            Code::E003 => {
                "No access token could be found for the connection. Set $PRODUCTHUNT_TOKEN, or \
                 add the connection to connections.toml in the configuration directory. The \
                 adapter itself reports this as an empty table rather than an error."
            }
            Code::E004 => {
                "The request to Product Hunt failed. The server may be unreachable, it may have \
                 rejected the access token, or it may have answered with GraphQL errors."
            }
            Code::E005 => {
                "Something unexpected happened, such as a response that could not be decoded or \
                 a connections file that could not be read. Re-run with `--log debug` for details."
            }
        }
    }
}
