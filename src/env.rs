use std::collections::HashMap;
use std::{env, fmt, io};

use heck::ToShoutySnakeCase;

/// PhEnv allows us to mock environment variables while
/// running tests. That way we can run our tests in parallel,
/// and our local development environment will not have unintended
/// side effects on our tests.
#[derive(Debug, Clone)]
pub struct PhEnv {
    mock_store: Option<HashMap<String, String>>,
}

impl Default for PhEnv {
    fn default() -> PhEnv {
        PhEnv::new()
    }
}

impl PhEnv {
    /// creates a new environment variable store
    pub fn new() -> PhEnv {
        let mock_store = if cfg!(test) {
            Some(HashMap::new())
        } else {
            None
        };

        PhEnv { mock_store }
    }

    /// returns the value of the environment variable if it exists
    pub fn get(&self, key: PhEnvKey) -> io::Result<Option<String>> {
        let key_str = key.to_string();
        tracing::trace!("Checking for ${}", &key_str);
        let result = match &self.mock_store {
            Some(mock_store) => mock_store.get(&key_str).cloned(),
            None => match env::var(&key_str) {
                Ok(data) => Some(data),
                Err(env::VarError::NotPresent) => None,
                Err(env::VarError::NotUnicode(_)) => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!(
                            "The value of the environment variable \"{}\" is not valid Unicode.",
                            &key_str
                        ),
                    ));
                }
            },
        };

        if let Some(result) = &result {
            tracing::debug!("read {}", get_debug_value(key, result));
        } else {
            tracing::trace!("could not find ${}", &key_str);
        }

        Ok(result)
    }

    /// sets a value in the mock store. Real environment variables are never written.
    pub fn insert(&mut self, key: PhEnvKey, value: &str) {
        tracing::debug!("writing {}", get_debug_value(key, value));
        if let Some(mock_store) = &mut self.mock_store {
            mock_store.insert(key.to_string(), value.into());
        }
    }

    /// unsets a value in the mock store
    pub fn remove(&mut self, key: PhEnvKey) {
        tracing::debug!("removing {}", key);
        if let Some(mock_store) = &mut self.mock_store {
            mock_store.remove(&key.to_string());
        }
    }
}

fn get_debug_value(key: PhEnvKey, value: &str) -> String {
    let value = if let PhEnvKey::Token = key {
        hangar::mask_key(value)
    } else {
        value.to_string()
    };

    format!("environment variable ${key} = {value}")
}

/// PhEnvKey defines all of the environment variables
/// that are respected by the adapter.
/// Each environment variable is prefixed with `PRODUCTHUNT_` and
/// the suffix is the name of the key defined here. It will automatically
/// be converted from CamelCase to SHOUTY_SNAKE_CASE.
/// For example, `PhEnvKey::ConfigHome.to_string()` becomes `PRODUCTHUNT_CONFIG_HOME`
#[derive(Debug, Copy, Clone)]
pub enum PhEnvKey {
    /// Overrides where `connections.toml` is read from
    ConfigHome,
    /// An access token used for every connection
    Token,
}

impl fmt::Display for PhEnvKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let dbg = format!("{self:?}").to_shouty_snake_case();
        write!(fmt, "PRODUCTHUNT_{dbg}")
    }
}
