use std::error::Error;

use hangar::HangarProblem;
use ph_client::ProductHuntClientError;
use thiserror::Error;

/// Everything that can stop the adapter from producing a table.
#[derive(Error, Debug)]
pub enum AdapterProblem {
    /// The raw input was not a JSON array.
    #[error("The input must be a JSON array. {reason}")]
    InputFormat {
        /// What was wrong with it
        reason: String,
    },

    /// The `properties` selector was neither a string nor a list of strings,
    /// or it named nothing.
    #[error("Invalid 'properties' selector. {reason}")]
    Validation {
        /// What was wrong with it
        reason: String,
    },

    /// No access token could be found for the connection.
    #[error("No access token is configured for the connection '{connection}'.")]
    CredentialMissing {
        /// The connection that was looked up
        connection: String,
    },

    /// Product Hunt could not be reached or refused the request.
    #[error("Could not fetch posts from Product Hunt.")]
    RemoteCall(#[source] ProductHuntClientError),

    /// Anything else.
    #[error("{context}")]
    Unexpected {
        /// What the adapter was doing
        context: String,
        /// What went wrong
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl AdapterProblem {
    pub(crate) fn input_format(reason: impl Into<String>) -> Self {
        AdapterProblem::InputFormat {
            reason: reason.into(),
        }
    }

    pub(crate) fn validation(reason: impl Into<String>) -> Self {
        AdapterProblem::Validation {
            reason: reason.into(),
        }
    }

    pub(crate) fn unexpected(
        context: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        AdapterProblem::Unexpected {
            context: context.into(),
            source: source.into(),
        }
    }
}

impl From<ProductHuntClientError> for AdapterProblem {
    fn from(error: ProductHuntClientError) -> Self {
        match error {
            ProductHuntClientError::InvalidCredentials { .. }
            | ProductHuntClientError::BadStatus { .. }
            | ProductHuntClientError::GraphQL { .. }
            | ProductHuntClientError::SendRequest(_) => AdapterProblem::RemoteCall(error),
            ProductHuntClientError::MalformedResponse { .. } => {
                AdapterProblem::unexpected("Could not decode the response from Product Hunt.", error)
            }
            ProductHuntClientError::InvalidHeader(_)
            | ProductHuntClientError::InvalidRequest(_)
            | ProductHuntClientError::ServiceReady(_) => {
                AdapterProblem::unexpected("Could not send a request to Product Hunt.", error)
            }
        }
    }
}

impl From<HangarProblem> for AdapterProblem {
    fn from(error: HangarProblem) -> Self {
        AdapterProblem::unexpected("Could not read the configured connections.", error)
    }
}
