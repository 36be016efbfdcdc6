//! Turns non-2xx responses into [`HttpServiceError::BadStatusCode`]

use std::{future::Future, pin::Pin};

use tower::{Layer, Service};

use crate::{HttpRequest, HttpResponse, HttpServiceError, body::body_to_bytes};

/// [`Layer`] that wraps a service in [`ErrorOnStatus`]
#[derive(Clone, Debug, Default)]
pub struct ErrorOnStatusLayer;

impl<S> Layer<S> for ErrorOnStatusLayer {
    type Service = ErrorOnStatus<S>;
    fn layer(&self, inner: S) -> Self::Service {
        ErrorOnStatus::new(inner)
    }
}

/// Fails any response whose status is not in the 2xx range, keeping the body for diagnostics
#[derive(Clone, Debug)]
pub struct ErrorOnStatus<S> {
    inner: S,
}

impl<S> ErrorOnStatus<S> {
    /// Wraps `inner`
    pub const fn new(inner: S) -> ErrorOnStatus<S> {
        ErrorOnStatus { inner }
    }
}

impl<S> Service<HttpRequest> for ErrorOnStatus<S>
where
    S: Service<HttpRequest, Response = HttpResponse, Error = HttpServiceError>,
    S::Future: Send + 'static,
{
    type Response = HttpResponse;
    type Error = HttpServiceError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: HttpRequest) -> Self::Future {
        let resp = self.inner.call(req);
        Box::pin(async move {
            let mut resp = resp.await?;
            let status_code = resp.status();
            if status_code.is_success() {
                return Ok(resp);
            }
            let data = body_to_bytes(resp.body_mut())
                .await
                .map_err(|err| HttpServiceError::Body(Box::new(err)))?;
            tracing::debug!(%status_code, "remote answered with a non-success status");
            Err(HttpServiceError::BadStatusCode { status_code, data })
        })
    }
}
