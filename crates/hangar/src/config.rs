use camino::{Utf8Path, Utf8PathBuf};
use directories_next::ProjectDirs;

use crate::{ConnectionStore, Credential, CredentialResolver, HangarProblem};

/// Name of the file connections are read from, inside [`Config::home`]
pub const CONNECTIONS_FILE: &str = "connections.toml";

/// Config allows end users to override default settings
/// usually determined by Hangar. They are intended to
/// give library consumers a way to support environment variable
/// overrides for end users.
#[derive(Debug, Clone)]
pub struct Config {
    /// home is the path to the global config directory
    pub home: Utf8PathBuf,

    /// override_token replaces the token of every connection when set
    pub override_token: Option<String>,
}

impl Config {
    /// Creates a new instance of `Config`
    pub fn new(
        override_home: Option<&impl AsRef<Utf8Path>>,
        override_token: Option<String>,
    ) -> Result<Config, HangarProblem> {
        let home = match override_home {
            Some(home) => {
                let home = home.as_ref().to_path_buf();
                if home.exists() && !home.is_dir() {
                    return Err(HangarProblem::InvalidOverrideConfigDir(home.to_string()));
                }
                home
            }
            None => {
                // Lin: /home/alice/.config/producthunt-posts
                // Win: C:\Users\Alice\AppData\Roaming\ProductHunt\PostsAdapter\config
                // Mac: /Users/Alice/Library/Application Support/com.ProductHunt.PostsAdapter
                let dir = ProjectDirs::from("com", "ProductHunt", "PostsAdapter")
                    .ok_or(HangarProblem::DefaultConfigDirNotFound)?
                    .config_dir()
                    .to_path_buf();
                Utf8PathBuf::try_from(dir)?
            }
        };

        Ok(Config {
            home,
            override_token,
        })
    }

    /// The path of the connections file
    pub fn connections_path(&self) -> Utf8PathBuf {
        self.home.join(CONNECTIONS_FILE)
    }
}

/// Reads the connections file on every lookup
impl CredentialResolver for Config {
    fn resolve(&self, connection: &str) -> Result<Option<Credential>, HangarProblem> {
        ConnectionStore::load(self)?.resolve(connection)
    }
}

#[cfg(test)]
mod tests {
    use assert_fs::{TempDir, prelude::*};
    use camino::Utf8PathBuf;

    use super::Config;
    use crate::{ConnectionStore, Credential, CredentialResolver, HangarProblem};

    #[test]
    fn it_uses_the_override_home() {
        let tmp_home = TempDir::new().unwrap();
        let home = Utf8PathBuf::try_from(tmp_home.path().to_path_buf()).unwrap();
        let config = Config::new(Some(&home), None).unwrap();

        assert_eq!(config.home, home);
        assert_eq!(config.connections_path(), home.join("connections.toml"));
    }

    #[test]
    fn it_rejects_a_file_as_home() {
        let tmp_home = TempDir::new().unwrap();
        let file = tmp_home.child("not-a-dir");
        file.write_str("").unwrap();
        let file = Utf8PathBuf::try_from(file.path().to_path_buf()).unwrap();

        let result = Config::new(Some(&file), None);
        assert!(matches!(
            result,
            Err(HangarProblem::InvalidOverrideConfigDir(_))
        ));
    }
}
