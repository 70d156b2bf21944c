use crate::cli::Cli;
use location_stub::HarnessError;
use location_stub::fixture::{FixtureStore, PROPERTIES_FILE};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub fixtures_dir: PathBuf,
    pub port: Option<u16>,
    pub verbose: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, HarnessError> {
        let store = FixtureStore::new(&cli.fixtures);
        let properties_path = store.properties_path();
        if !properties_path.is_file() {
            return Err(HarnessError::ConfigLoad {
                path: properties_path,
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no {PROPERTIES_FILE} in fixtures directory"),
                ),
            });
        }

        Ok(Config {
            fixtures_dir: cli.fixtures,
            port: cli.port,
            verbose: cli.verbose,
        })
    }

    pub fn store(&self) -> FixtureStore {
        FixtureStore::new(&self.fixtures_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn cli_for(fixtures: PathBuf) -> Cli {
        Cli {
            fixtures,
            port: Some(8090),
            verbose: false,
        }
    }

    #[test]
    fn test_from_cli_accepts_directory_with_properties() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PROPERTIES_FILE), "id=ID1\n").unwrap();

        let config = Config::from_cli(cli_for(dir.path().to_path_buf())).unwrap();
        assert_eq!(config.fixtures_dir, dir.path());
        assert_eq!(config.port, Some(8090));
    }

    #[test]
    fn test_from_cli_rejects_directory_without_properties() {
        let dir = tempfile::tempdir().unwrap();

        let result = Config::from_cli(cli_for(dir.path().to_path_buf()));
        assert!(result.is_err());

        let error = result.unwrap_err().to_string();
        assert!(error.contains("failed to load config"));
        assert!(error.contains(PROPERTIES_FILE));
    }

    #[test]
    fn test_from_cli_defaults_to_free_port() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PROPERTIES_FILE), "id=ID1\n").unwrap();

        let config = Config::from_cli(Cli {
            fixtures: dir.path().to_path_buf(),
            port: None,
            verbose: true,
        })
        .unwrap();
        assert_eq!(config.port, None);
        assert!(config.verbose);
    }
}
