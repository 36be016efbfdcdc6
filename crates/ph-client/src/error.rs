use std::fmt;

use http::StatusCode;
use ph_graphql::GraphQLServiceError;
use ph_http::HttpServiceError;
use thiserror::Error;

/// ProductHuntClientError represents all possible failures that can occur during a client request.
#[derive(Error, Debug)]
pub enum ProductHuntClientError {
    /// Tried to build a [HeaderMap](http::HeaderMap) with an invalid header value.
    #[error("invalid header value")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    /// Product Hunt refused the access token.
    #[error("Product Hunt rejected the access token (HTTP {status_code}).")]
    InvalidCredentials {
        /// The status Product Hunt answered with.
        status_code: StatusCode,
    },

    /// Product Hunt answered with a status outside of 2xx.
    #[error("Product Hunt responded with HTTP {status_code}: {body}")]
    BadStatus {
        /// The status Product Hunt answered with.
        status_code: StatusCode,
        /// The response body, lossily decoded.
        body: String,
    },

    /// The response carried GraphQL errors and no usable data.
    #[error("encountered a GraphQL error, Product Hunt responded with: {msg}")]
    GraphQL {
        /// The error messages, joined.
        msg: String,
    },

    /// The response body was not the JSON this client expects.
    #[error("could not decode the response from Product Hunt (HTTP {status_code}).")]
    MalformedResponse {
        /// The status Product Hunt answered with.
        status_code: StatusCode,
        /// The decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// The request could not be sent or its response could not be read.
    #[error("encountered an error while sending a request to Product Hunt.")]
    SendRequest(#[source] HttpServiceError),

    /// The request could not be assembled.
    #[error("could not build a request for Product Hunt.")]
    InvalidRequest(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The underlying service never became ready.
    #[error("the HTTP service is not ready.")]
    ServiceReady(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<HttpServiceError> for ProductHuntClientError {
    fn from(error: HttpServiceError) -> Self {
        match error {
            HttpServiceError::BadStatusCode { status_code, .. }
                if status_code == StatusCode::UNAUTHORIZED
                    || status_code == StatusCode::FORBIDDEN =>
            {
                ProductHuntClientError::InvalidCredentials { status_code }
            }
            HttpServiceError::BadStatusCode { status_code, data } => {
                ProductHuntClientError::BadStatus {
                    status_code,
                    body: String::from_utf8_lossy(&data).into_owned(),
                }
            }
            error => ProductHuntClientError::SendRequest(error),
        }
    }
}

impl<T: Send + Sync + fmt::Debug> From<GraphQLServiceError<T>> for ProductHuntClientError {
    fn from(error: GraphQLServiceError<T>) -> Self {
        match error {
            GraphQLServiceError::UpstreamService(error) => {
                match error.downcast::<HttpServiceError>() {
                    Ok(error) => ProductHuntClientError::from(*error),
                    Err(error) => ProductHuntClientError::ServiceReady(error),
                }
            }
            GraphQLServiceError::NoData(_) | GraphQLServiceError::PartialError { .. } => {
                ProductHuntClientError::GraphQL {
                    msg: error.messages().join("\n"),
                }
            }
            GraphQLServiceError::Deserialization {
                error, status_code, ..
            } => ProductHuntClientError::MalformedResponse {
                status_code,
                source: error,
            },
            GraphQLServiceError::Serialization(error) => {
                ProductHuntClientError::InvalidRequest(Box::new(error))
            }
            GraphQLServiceError::Http(error) => {
                ProductHuntClientError::InvalidRequest(Box::new(error))
            }
            GraphQLServiceError::InvalidUri(error) => {
                ProductHuntClientError::InvalidRequest(Box::new(error))
            }
        }
    }
}
