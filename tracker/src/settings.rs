use std::path::Path;

use serde::{Deserialize, Serialize};
use types::{DEFAULT_HOLE_COUNT, DEFAULT_MAX_PLAYERS};

use crate::TrackerError;

/// Optional YAML settings file. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Store location, see `database::StoreLocation`.
    pub store: Option<String>,
    pub log_level: String,
    pub default_holes: usize,
    pub max_players: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store: None,
            log_level: "info".to_string(),
            default_holes: DEFAULT_HOLE_COUNT,
            max_players: DEFAULT_MAX_PLAYERS,
        }
    }
}

impl Settings {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TrackerError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: Option<&Path>) -> Result<Self, TrackerError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let yaml = std::fs::read_to_string(path).map_err(|source| TrackerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings = Settings::from_yaml_str("store: sqlite:golf.db\ndefault_holes: 9\n").unwrap();
        assert_eq!(settings.store.as_deref(), Some("sqlite:golf.db"));
        assert_eq!(settings.default_holes, 9);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.max_players, DEFAULT_MAX_PLAYERS);
    }

    #[test]
    fn test_no_file_means_defaults() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }

    #[test]
    fn test_bad_yaml_is_an_error() {
        assert!(matches!(
            Settings::from_yaml_str("default_holes: [nine]"),
            Err(TrackerError::Settings(_))
        ));
        assert!(matches!(
            Settings::load(Some(Path::new("/nonexistent/golf-tracker.yaml"))),
            Err(TrackerError::Io { .. })
        ));
    }
}
