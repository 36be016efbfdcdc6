use std::fmt;

use buildstructor::buildstructor;
use ph_graphql::{GraphQLLayer, GraphQLService};
use ph_http::{
    HttpService, error_on_status::ErrorOnStatusLayer, extend_headers::ExtendHeadersLayer,
};
use tower::{Layer, ServiceBuilder, ServiceExt};
use url::Url;

use crate::{ProductHuntClientError, headers};

/// The Product Hunt GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.producthunt.com/v2/api/graphql";

/// Represents a client for making GraphQL requests to Product Hunt.
#[derive(Clone)]
pub struct ProductHuntClient {
    token: String,
    endpoint: Url,
    http_service: HttpService,
}

#[buildstructor]
impl ProductHuntClient {
    /// Construct a new [`ProductHuntClient`] from a bearer `token`, the GraphQL `endpoint`
    /// and the [`HttpService`] requests are sent through.
    #[builder]
    pub fn new(token: String, endpoint: Url, http_service: HttpService) -> ProductHuntClient {
        ProductHuntClient {
            token,
            endpoint,
            http_service,
        }
    }
}

impl ProductHuntClient {
    /// The endpoint requests are sent to
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Produces a GraphQL service that authenticates with this client's token and
    /// fails on any non-2xx response
    pub fn graphql_service(&self) -> Result<GraphQLService<HttpService>, ProductHuntClientError> {
        let http_service = ServiceBuilder::new()
            .layer(ExtendHeadersLayer::new(headers::build(&self.token)?))
            .layer(ErrorOnStatusLayer)
            .service(self.http_service.clone())
            .boxed_clone();
        Ok(GraphQLLayer::new(self.endpoint.clone()).layer(http_service))
    }
}

impl fmt::Debug for ProductHuntClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductHuntClient")
            .field("token", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use ph_http::{HttpServiceFactory, ReqwestServiceFactory};
    use url::Url;

    use super::{DEFAULT_ENDPOINT, ProductHuntClient};

    #[test]
    fn it_never_debugs_the_token() {
        let client = ProductHuntClient::builder()
            .token("abc123")
            .endpoint(Url::parse(DEFAULT_ENDPOINT).unwrap())
            .http_service(ReqwestServiceFactory::default().create().unwrap())
            .build();

        let debugged = format!("{client:?}");
        assert!(!debugged.contains("abc123"));
        assert!(debugged.contains("api.producthunt.com"));
    }
}
