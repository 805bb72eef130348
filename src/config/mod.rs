// src/config/mod.rs
use std::path::Path;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::errors::CoreriaError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreriaConfig {
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Base level filter. `RUST_LOG` directives are applied on top of it.
    pub level: String,
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            timestamps: true,
        }
    }
}

impl CoreriaConfig {
    pub fn from_json_str(json: &str) -> Result<Self, CoreriaError> {
        let config: CoreriaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, CoreriaError> {
        let contents = std::fs::read_to_string(path)?;
        log::debug!("Loading config from {}", path.display());
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), CoreriaError> {
        self.log.level_filter().map(|_| ())
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, CoreriaError> {
        LevelFilter::from_str(&self.level)
            .map_err(|_| CoreriaError::ConfigError(format!("Unknown log level: {}", self.level)))
    }

    /// Installs the global `env_logger` logger writing to stderr.
    ///
    /// Fails if a logger is already installed for this process.
    pub fn init_logger(&self) -> Result<(), CoreriaError> {
        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(self.level_filter()?)
            .parse_env(env_logger::Env::default())
            .target(env_logger::Target::Stderr);

        if !self.timestamps {
            builder.format_timestamp(None);
        }

        builder
            .try_init()
            .map_err(|e| CoreriaError::ConfigError(format!("Failed to set logger: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = CoreriaConfig::default();
        assert_eq!(config.log.level, "warn");
        assert!(config.log.timestamps);
        assert_eq!(config.log.level_filter().unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = CoreriaConfig::from_json_str(r#"{ "log": { "level": "debug" } }"#).unwrap();
        assert_eq!(config.log.level_filter().unwrap(), LevelFilter::Debug);
        assert!(config.log.timestamps);

        let empty = CoreriaConfig::from_json_str("{}").unwrap();
        assert_eq!(empty, CoreriaConfig::default());
    }

    #[test]
    fn level_is_case_insensitive() {
        let config = CoreriaConfig::from_json_str(r#"{ "log": { "level": "TRACE" } }"#).unwrap();
        assert_eq!(config.log.level_filter().unwrap(), LevelFilter::Trace);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let err = CoreriaConfig::from_json_str(r#"{ "log": { "level": "loud" } }"#).unwrap_err();
        assert!(matches!(err, CoreriaError::ConfigError(ref msg) if msg.contains("loud")));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = CoreriaConfig::from_json_str("{ log: ").unwrap_err();
        assert!(matches!(err, CoreriaError::ConfigError(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "log": {{ "level": "info", "timestamps": false }} }}"#).unwrap();

        let config = CoreriaConfig::load(file.path()).unwrap();
        assert_eq!(config.log.level, "info");
        assert!(!config.log.timestamps);
    }

    // The only test in this binary that installs the global logger.
    #[test]
    fn logger_installs_once() {
        let log = LogConfig {
            level: "error".to_string(),
            timestamps: false,
        };
        log.init_logger().unwrap();

        let err = log.init_logger().unwrap_err();
        assert!(matches!(err, CoreriaError::ConfigError(ref msg) if msg.contains("Failed to set logger")));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CoreriaConfig::load(&dir.path().join("coreria.json")).unwrap_err();
        assert!(matches!(err, CoreriaError::IoError(_)));
    }
}
