use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Session configuration.
///
/// Loaded from an optional TOML file; every field has a default so a
/// missing or partial file is fine. Tariff rates are deliberately not
/// configurable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The number of parking spaces in the lot.
    ///
    /// The session ledger is additionally bounded by
    /// [`MAX_RECORDS`](crate::domain::lot::MAX_RECORDS) regardless of
    /// this value.
    pub capacity: usize,

    /// The directory exported ledger files are written into.
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            export_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content
    /// is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

const fn default_capacity() -> usize {
    100
}

/// Errors that can occur while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    /// The configuration file is not valid TOML.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"capacity = 25\nexport_dir = \"/var/log/parkade\"\n")
            .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.capacity, 25);
        assert_eq!(config.export_dir, PathBuf::from("/var/log/parkade"));
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str("capacity = 10\n").unwrap();

        assert_eq!(config.capacity, 10);
        assert_eq!(config.export_dir, PathBuf::from("."));
    }

    #[test]
    fn empty_file_is_the_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(matches!(error, ConfigError::Read(_)));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"capacity = \"many\"\n").unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<Config, _> = toml::from_str("rate_standard = 35.0\n");
        assert!(result.is_err());
    }
}
