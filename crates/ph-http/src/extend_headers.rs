//! Adds a fixed set of headers to every outgoing request

use http::HeaderMap;
use tower::{Layer, Service};

/// [`Layer`] producing [`ExtendHeaders`] services
pub struct ExtendHeadersLayer {
    headers: HeaderMap,
}

impl ExtendHeadersLayer {
    /// Creates a layer that adds `headers` to each request, replacing any header of the same name
    pub fn new(headers: impl Into<HeaderMap>) -> ExtendHeadersLayer {
        ExtendHeadersLayer {
            headers: headers.into(),
        }
    }
}

impl<S: Clone> Layer<S> for ExtendHeadersLayer {
    type Service = ExtendHeaders<S>;
    fn layer(&self, inner: S) -> Self::Service {
        ExtendHeaders {
            headers: self.headers.clone(),
            inner,
        }
    }
}

/// Service that merges its headers into each request before handing it to `inner`
#[derive(Clone)]
pub struct ExtendHeaders<S: Clone> {
    headers: HeaderMap,
    inner: S,
}

impl<S: Clone> ExtendHeaders<S> {
    /// Wraps `inner`
    pub const fn new(headers: HeaderMap, inner: S) -> ExtendHeaders<S> {
        ExtendHeaders { headers, inner }
    }
}

impl<Req, S> Service<http::Request<Req>> for ExtendHeaders<S>
where
    S: Service<http::Request<Req>> + Clone,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: http::Request<Req>) -> Self::Future {
        req.headers_mut().extend(self.headers.clone());
        self.inner.call(req)
    }
}

#[cfg(test)]
mod tests {
    use http::{HeaderMap, HeaderValue, header};
    use http_body_util::Full;
    use speculoos::prelude::*;
    use tokio::task;
    use tower::{Service, ServiceBuilder, ServiceExt};
    use tower_test::mock;

    use super::ExtendHeadersLayer;
    use crate::{HttpRequest, HttpResponse};

    #[tokio::test]
    async fn it_adds_and_replaces_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc123"),
        );

        let (mock_service, mut handle) = mock::spawn::<HttpRequest, HttpResponse>();
        let mut service = ServiceBuilder::new()
            .layer(ExtendHeadersLayer::new(headers))
            .service(mock_service.into_inner());

        let request = http::Request::builder()
            .uri("http://example.com/graphql")
            .header(header::ACCEPT, "text/html")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Full::default())
            .unwrap();
        let fut = ServiceExt::<HttpRequest>::ready(&mut service)
            .await
            .unwrap()
            .call(request);

        task::spawn(async move {
            let (actual, send_response) = handle.next_request().await.unwrap();
            let headers = actual.headers();
            assert_that!(headers.get_all(header::ACCEPT).iter().count()).is_equal_to(1);
            assert_that!(headers.get(header::ACCEPT))
                .is_some()
                .is_equal_to(&HeaderValue::from_static("application/json"));
            assert_that!(headers.get(header::AUTHORIZATION))
                .is_some()
                .is_equal_to(&HeaderValue::from_static("Bearer abc123"));
            assert_that!(headers.get(header::CONTENT_TYPE))
                .is_some()
                .is_equal_to(&HeaderValue::from_static("application/json"));
            send_response.send_response(http::Response::new(Full::default()));
        });

        assert!(fut.await.is_ok());
    }
}
