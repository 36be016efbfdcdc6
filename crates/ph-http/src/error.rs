use bytes::Bytes;
use http::StatusCode;

/// Failures produced by an [`HttpService`](crate::HttpService)
#[derive(thiserror::Error, Debug)]
pub enum HttpServiceError {
    /// The remote answered with a status outside of 2xx
    #[error("Bad status code: {status_code}")]
    BadStatusCode {
        /// The status the remote answered with
        status_code: StatusCode,
        /// The raw response body, kept for diagnostics
        data: Bytes,
    },
    /// A request could not be assembled
    #[error("HTTP error: {:?}", .0)]
    Http(#[from] http::Error),
    /// The request did not finish before the configured timeout
    #[error("Request timed out")]
    TimedOut,
    /// A response could not be decoded
    #[error("Decode error: {:?}", .0)]
    Decode(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// A request or response body could not be read
    #[error("Body error: {:?}", .0)]
    Body(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// The connection to the remote could not be established
    #[error("Connect error: {:?}", .0)]
    Connect(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// Anything the transport reports that isn't covered above
    #[error("Unexpected HTTP error: {:?}", .0)]
    Unexpected(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl HttpServiceError {
    /// Whether the connection could not be established
    pub const fn is_connect(&self) -> bool {
        matches!(self, HttpServiceError::Connect(_))
    }
    /// Whether the request timed out
    pub const fn is_timeout(&self) -> bool {
        matches!(self, HttpServiceError::TimedOut)
    }
}
