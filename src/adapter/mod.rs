//! Turns raw input into a table of Product Hunt posts.

mod input;
mod problem;
mod properties;
mod table;

pub use input::{PropertySelector, WILDCARD};
pub use problem::AdapterProblem;
pub use properties::{Column, PROPERTY_MAP, PropertyMap};
pub use table::ResultTable;

use buildstructor::buildstructor;
use hangar::{Credential, CredentialResolver};
use ph_client::{ProductHuntClient, operations::posts};
use ph_http::HttpServiceFactory;
use url::Url;

/// The connection looked up when none is named
pub const DEFAULT_CONNECTION: &str = "producthunt_connection";

/// Reads the default page of posts and shapes it into a [`ResultTable`].
///
/// Input is validated before anything else happens, so malformed input is an
/// error even when no token is configured. A missing token is not an error:
/// it yields [`ResultTable::degenerate`]. The HTTP service is only created once
/// there is a token to send.
pub struct Adapter<R, F> {
    resolver: R,
    connection: String,
    endpoint: Url,
    http_service_factory: F,
}

#[buildstructor]
impl<R: CredentialResolver, F: HttpServiceFactory> Adapter<R, F> {
    /// Creates a new [`Adapter`]
    #[builder]
    pub fn new(
        resolver: R,
        connection: Option<String>,
        endpoint: Url,
        http_service_factory: F,
    ) -> Adapter<R, F> {
        Adapter {
            resolver,
            connection: connection.unwrap_or_else(|| DEFAULT_CONNECTION.to_string()),
            endpoint,
            http_service_factory,
        }
    }
}

impl<R: CredentialResolver, F: HttpServiceFactory> Adapter<R, F> {
    /// Runs the adapter against `raw_input`
    pub async fn run(&self, raw_input: &str) -> Result<ResultTable, AdapterProblem> {
        let selector = PropertySelector::parse(raw_input)?;
        tracing::debug!(properties = ?selector.names(), "parsed the properties selector");

        let credential = match self.credential() {
            Ok(credential) => credential,
            Err(AdapterProblem::CredentialMissing { connection }) => {
                tracing::warn!(
                    %connection,
                    "no access token is configured, returning an empty table"
                );
                return Ok(ResultTable::degenerate());
            }
            Err(err) => return Err(err),
        };
        tracing::debug!(origin = ?credential.origin, "resolved an access token");

        let http_service = self
            .http_service_factory
            .create()
            .map_err(|err| AdapterProblem::unexpected("Could not create an HTTP client.", err))?;
        let client = ProductHuntClient::builder()
            .token(credential.token)
            .endpoint(self.endpoint.clone())
            .http_service(http_service)
            .build();
        let posts = posts::run(&client).await?;

        let columns = PROPERTY_MAP.columns(selector.header().iter().map(String::as_str));
        Ok(ResultTable::build(&columns, &posts))
    }

    fn credential(&self) -> Result<Credential, AdapterProblem> {
        self.resolver
            .resolve(&self.connection)?
            .ok_or_else(|| AdapterProblem::CredentialMissing {
                connection: self.connection.clone(),
            })
    }
}
