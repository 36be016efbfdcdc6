use std::io::{self, IsTerminal, Read};

use calm_io::stdoutln;
use camino::Utf8PathBuf;
use clap::Parser;
use hangar::{Config, Credential, CredentialResolver, HangarProblem};
use ph_client::DEFAULT_ENDPOINT;
use ph_http::ReqwestServiceFactory;
use timber::LogLevel;
use url::Url;

use crate::adapter::{Adapter, DEFAULT_CONNECTION};
use crate::env::{PhEnv, PhEnvKey};
use crate::{AdapterResult, Code, output};

#[derive(Debug, Parser)]
#[command(
    name = "producthunt-posts",
    version,
    about = "Read the latest Product Hunt posts as a JSON table",
    long_about = "
Read the latest Product Hunt posts as a JSON table.

INPUT is a JSON array whose first element selects properties, either as a comma
separated string or as a list of strings. Without INPUT the selector is read from
stdin, and blank input selects every property.

    $ producthunt-posts '[\"id,name\"]'
    [[\"id\",\"name\"],[\"420001\",\"Raycast\"]]

The access token comes from $PRODUCTHUNT_TOKEN, or from the named connection in
connections.toml. Without a token the result is [[\"\"]].
"
)]
pub struct ProductHuntPosts {
    /// A JSON array whose first element selects properties, e.g. '["id,name"]'
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// The connection in connections.toml whose token is used
    #[arg(long, value_name = "NAME", default_value = DEFAULT_CONNECTION)]
    connection: String,

    /// Specify the log level
    #[arg(long = "log", short = 'l', value_enum, ignore_case = true)]
    pub log_level: Option<LogLevel>,

    /// Explain an error code, e.g. E001
    #[arg(long, value_name = "CODE")]
    explain: Option<Code>,

    #[arg(long, hide = true, default_value = DEFAULT_ENDPOINT)]
    endpoint: Url,

    #[arg(skip)]
    env_store: PhEnv,
}

impl ProductHuntPosts {
    /// Runs the adapter and prints its table
    pub fn run(&self) -> AdapterResult<()> {
        if let Some(code) = &self.explain {
            stdoutln!("**{}**\n\n{}", code, code.explain())?;
            return Ok(());
        }

        let input = self.read_input()?;
        let adapter = Adapter::builder()
            .resolver(self)
            .connection(self.connection.clone())
            .endpoint(self.endpoint.clone())
            .http_service_factory(ReqwestServiceFactory::default())
            .build();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let table = runtime.block_on(adapter.run(&input))?;
        output::print(&table)?;
        Ok(())
    }

    fn read_input(&self) -> io::Result<String> {
        if let Some(input) = &self.input {
            return Ok(input.clone());
        }
        let mut stdin = io::stdin();
        if stdin.is_terminal() {
            return Ok(String::new());
        }
        let mut input = String::new();
        stdin.read_to_string(&mut input)?;
        tracing::trace!(bytes = input.len(), "read input from stdin");
        Ok(input)
    }

    pub(crate) fn get_hangar_config(&self) -> Result<Config, HangarProblem> {
        let override_home: Option<Utf8PathBuf> = self
            .env_store
            .get(PhEnvKey::ConfigHome)?
            .map(|p| Utf8PathBuf::from(&p));
        let override_token = self.env_store.get(PhEnvKey::Token)?;
        Config::new(override_home.as_ref(), override_token)
    }
}

/// Connections are only read once the input has been validated
impl CredentialResolver for ProductHuntPosts {
    fn resolve(&self, connection: &str) -> Result<Option<Credential>, HangarProblem> {
        self.get_hangar_config()?.resolve(connection)
    }
}
