mod metadata;

pub use metadata::{Code, Metadata, Suggestion};

/// The result of running the binary
pub type AdapterResult<T> = std::result::Result<T, AdapterError>;

use std::borrow::BorrowMut;
use std::fmt::{self, Display};
use std::io;

use calm_io::stderr;

use crate::style::Style;

/// A specialized `Error` type that wraps `anyhow`
/// and provides some extra `Metadata` for end users depending
/// on the specific error they encountered.
#[derive(Debug)]
pub struct AdapterError {
    error: anyhow::Error,
    metadata: Metadata,
}

impl AdapterError {
    /// Wraps `error`, deriving its metadata
    pub fn new<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let mut error = error.into();
        let metadata = Metadata::from(error.borrow_mut());

        Self { error, metadata }
    }

    /// How to get past the error, if known
    pub fn suggestion(&self) -> Option<Suggestion> {
        self.metadata.suggestion.clone()
    }

    /// The top level message
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// The stable code of the error, if it has one
    pub const fn code(&self) -> Option<Code> {
        self.metadata.code
    }

    /// Writes the error to stderr
    pub fn print(&self) -> io::Result<()> {
        stderr!("{}", self)?;
        Ok(())
    }
}

impl Display for AdapterError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error_descriptor_message = if let Some(code) = &self.metadata.code {
            format!("error[{code}]:")
        } else {
            "error:".to_string()
        };
        let error_descriptor = Style::ErrorPrefix.paint(&error_descriptor_message);

        writeln!(formatter, "{} {:?}", error_descriptor, &self.error)?;

        if let Some(suggestion) = &self.metadata.suggestion {
            writeln!(formatter, "        {suggestion}")?;
        }
        Ok(())
    }
}

impl<E: Into<anyhow::Error>> From<E> for AdapterError {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::AdapterProblem;

    #[test]
    fn it_prints_the_code_and_suggestion() {
        let error = AdapterError::from(AdapterProblem::validation("Expected a string."));
        assert_eq!(error.code(), Some(Code::E002));
        assert_eq!(error.suggestion(), Some(Suggestion::ProvideValidProperties));

        let printed = console::strip_ansi_codes(&error.to_string()).to_string();
        assert!(printed.starts_with("error[E002]: Invalid 'properties' selector. Expected a string."));
        assert!(printed.contains("Known properties are id, name, createdAt"));
    }

    #[test]
    fn it_prints_the_cause_chain() {
        let error = AdapterError::from(AdapterProblem::unexpected(
            "Could not read the configured connections.",
            "permission denied",
        ));
        let printed = console::strip_ansi_codes(&error.to_string()).to_string();
        assert!(printed.starts_with("error[E005]: Could not read the configured connections."));
        assert!(printed.contains("permission denied"));
    }

    #[test]
    fn errors_without_metadata_have_no_code() {
        let error = AdapterError::from(anyhow::anyhow!("boom"));
        assert_eq!(error.code(), None);
        assert_eq!(error.message(), "boom");
    }
}
