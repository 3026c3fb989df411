//! Configuration files.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of elements printed for a collection before it gets elided.
pub const DEFAULT_MAX_ELEMENTS_FOR_PRINTING: usize = 1000;

/// Errors returned while loading or storing a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read, written or parsed.
    #[error("failed to load config from {path}: {source}")]
    Load {
        /// Location of the config file.
        path: String,
        /// Underlying `confy` error.
        #[source]
        source: confy::ConfyError,
    },
    /// The file was parsed but holds a value outside its allowed range.
    #[error("invalid config value for `{key}`: {reason}")]
    Invalid {
        /// Dotted key of the offending value.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Configuration for plate.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct Config {
    /// How values are rendered inside assertion failure messages.
    pub representation: RepresentationConfig,
    /// How suite results are reported.
    pub report: ReportConfig,
}

impl Config {
    /// Loads the config at `path`.
    ///
    /// A missing file is created with the default configuration.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config: Self = confy::load_path(path)
            .map_err(|source| ConfigError::Load { path: path.display().to_string(), source })?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the config to `path` as TOML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        confy::store_path(path, self)
            .map_err(|source| ConfigError::Load { path: path.display().to_string(), source })
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.representation.max_elements_for_printing == 0 {
            return Err(ConfigError::Invalid {
                key: "representation.max_elements_for_printing",
                reason: "must be at least 1".to_string(),
            })
        }
        Ok(())
    }
}

/// Rendering limits applied to assertion failure messages.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct RepresentationConfig {
    /// Maximum number of elements of a collection shown in a message.
    ///
    /// Longer collections show their first and last halves around an ellipsis.
    ///
    /// Default: 1000
    pub max_elements_for_printing: usize,
}

impl Default for RepresentationConfig {
    fn default() -> Self {
        Self { max_elements_for_printing: DEFAULT_MAX_ELEMENTS_FOR_PRINTING }
    }
}

/// Suite report options.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Print a line for every passed case, not only for failures and skips.
    pub show_passed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENSION: &str = "toml";

    fn with_tempdir(filename: &str, proc: fn(&std::path::Path)) {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(filename).with_extension(EXTENSION);

        proc(&config_path);

        temp_dir.close().unwrap()
    }

    #[test]
    fn test_store_config() {
        with_tempdir("config-store-test", |config_path| {
            let config = Config::default();
            config.save(config_path).unwrap();
            assert!(config_path.exists());
        })
    }

    #[test]
    fn test_load_config() {
        with_tempdir("config-load-test", |config_path| {
            let config = Config {
                representation: RepresentationConfig { max_elements_for_printing: 4 },
                report: ReportConfig { show_passed: true },
            };
            config.save(config_path).unwrap();

            let loaded_config = Config::from_path(config_path).unwrap();
            assert_eq!(config, loaded_config);
        })
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        with_tempdir("config-missing-test", |config_path| {
            let loaded_config = Config::from_path(config_path).unwrap();
            assert_eq!(loaded_config, Config::default());
            assert!(config_path.exists());
        })
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[report]\nshow_passed = true\n").unwrap();
        assert!(config.report.show_passed);
        assert_eq!(
            config.representation.max_elements_for_printing,
            DEFAULT_MAX_ELEMENTS_FOR_PRINTING
        );
    }

    #[test]
    fn test_zero_elements_rejected() {
        let config: Config =
            toml::from_str("[representation]\nmax_elements_for_printing = 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { key: "representation.max_elements_for_printing", .. })
        ));
    }
}
