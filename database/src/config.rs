use std::path::PathBuf;
use std::str::FromStr;

use crate::{FileStore, KeyValueStore, MemoryStore, NoopStore, SqliteStore, StorageError};

pub const STORE_ENV_VAR: &str = "GOLF_TRACKER_STORE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    Memory,
    Noop,
    /// Filename or `:memory:`.
    Sqlite(String),
    Directory(PathBuf),
}

impl FromStr for StoreLocation {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Err(StorageError::Config("empty store location".to_string())),
            "memory" => Ok(StoreLocation::Memory),
            "noop" => Ok(StoreLocation::Noop),
            _ => match s.strip_prefix("sqlite:") {
                Some("") => Err(StorageError::Config(format!("missing sqlite path in '{s}'"))),
                Some(path) => Ok(StoreLocation::Sqlite(path.to_string())),
                None => Ok(StoreLocation::Directory(PathBuf::from(s))),
            },
        }
    }
}

pub struct StoreConfig {
    pub location: StoreLocation,
    pub pool_size: u32,
}

impl StoreConfig {
    pub fn new(location: StoreLocation) -> Self {
        Self {
            location,
            pool_size: 4,
        }
    }

    pub fn from_cli_or_env_or_yaml(
        cli_arg: Option<String>,
        yaml_config: Option<String>,
    ) -> Result<Self, StorageError> {
        let location = if let Some(arg) = cli_arg {
            arg
        } else if let Ok(env) = std::env::var(STORE_ENV_VAR) {
            env
        } else if let Some(yaml) = yaml_config {
            yaml
        } else {
            "memory".to_string()
        };

        Ok(Self::new(location.parse()?))
    }

    pub async fn open(&self) -> Result<Box<dyn KeyValueStore>, StorageError> {
        tracing::info!(location = ?self.location, "opening store");
        let store: Box<dyn KeyValueStore> = match &self.location {
            StoreLocation::Memory => Box::new(MemoryStore::new()),
            StoreLocation::Noop => Box::new(NoopStore),
            StoreLocation::Sqlite(path) => {
                Box::new(SqliteStore::connect(path, self.pool_size).await?)
            }
            StoreLocation::Directory(dir) => Box::new(FileStore::new(dir.clone())),
        };
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locations() {
        assert_eq!("memory".parse::<StoreLocation>().unwrap(), StoreLocation::Memory);
        assert_eq!("noop".parse::<StoreLocation>().unwrap(), StoreLocation::Noop);
        assert_eq!(
            "sqlite::memory:".parse::<StoreLocation>().unwrap(),
            StoreLocation::Sqlite(":memory:".to_string())
        );
        assert_eq!(
            "sqlite:golf.db".parse::<StoreLocation>().unwrap(),
            StoreLocation::Sqlite("golf.db".to_string())
        );
        assert_eq!(
            "/var/lib/golf".parse::<StoreLocation>().unwrap(),
            StoreLocation::Directory(PathBuf::from("/var/lib/golf"))
        );
        assert!("sqlite:".parse::<StoreLocation>().is_err());
        assert!("  ".parse::<StoreLocation>().is_err());
    }

    #[test]
    fn test_cli_arg_wins() {
        let config = StoreConfig::from_cli_or_env_or_yaml(
            Some("noop".to_string()),
            Some("memory".to_string()),
        )
        .unwrap();
        assert_eq!(config.location, StoreLocation::Noop);
    }

    #[tokio::test]
    async fn test_open_in_memory_sqlite() {
        let config = StoreConfig::new(StoreLocation::Sqlite(":memory:".to_string()));
        let store = config.open().await.expect("Failed to open store");
        store.set("games", b"[]".to_vec()).await.unwrap();
        assert_eq!(store.get("games").await.unwrap(), Some(b"[]".to_vec()));
    }
}
