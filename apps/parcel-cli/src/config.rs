//! # CLI Configuration
//!
//! Settings for a `parcel` run.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --format json, --permissive, --start 100                           │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     PARCEL_OUTPUT_FORMAT=json                                          │
//! │     PARCEL_STRICT=false                                                │
//! │     PARCEL_SEQUENCE_START=100                                          │
//! │     PARCEL_LOG=debug                                                   │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or parcel.toml in the platform config dir         │
//! │     ~/.config/parcel/parcel.toml (Linux)                               │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     text output, strict validation, numbering from 1                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [output]
//! format = "text"   # text | json
//!
//! [validation]
//! strict = true
//!
//! [sequence]
//! start = 1
//!
//! [logging]
//! filter = "warn,parcel=info"
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

// =============================================================================
// Output Format
// =============================================================================

/// How reports are written to stdout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable transcript, one block per order.
    #[default]
    Text,
    /// JSON array of order reports.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidConfig(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Whether input is checked before it reaches an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Reject empty names/addresses, negative prices and non-positive
    /// quantities. When false every input is accepted as-is.
    #[serde(default = "default_true")]
    pub strict: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        ValidationSettings {
            strict: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceSettings {
    /// Number given to the first order of this run.
    #[serde(default = "default_sequence_start")]
    pub start: u64,
}

impl Default for SequenceSettings {
    fn default() -> Self {
        SequenceSettings {
            start: default_sequence_start(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directives, used when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sequence_start() -> u64 {
    parcel_core::sequence::FIRST_ORDER_NUMBER
}

fn default_log_filter() -> String {
    "warn,parcel=info".to_string()
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub validation: ValidationSettings,

    #[serde(default)]
    pub sequence: SequenceSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl CliConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    ///
    /// An explicit `config_path` must exist; the platform default may be
    /// missing. The result is not validated: command-line flags still
    /// apply on top, so callers run [`validate`](Self::validate) last.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) if !path.exists() => return Err(CliError::ConfigNotFound(path)),
            Some(path) => Self::read_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::read_file(path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Parses a config document; missing sections take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    fn read_file(path: PathBuf) -> CliResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(&path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| CliError::Parse { path, source })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        if self.sequence.start == 0 {
            return Err(CliError::InvalidConfig(
                "sequence.start must be greater than 0".into(),
            ));
        }

        if self.sequence.start == u64::MAX {
            return Err(CliError::InvalidConfig(format!(
                "sequence.start must be less than {}",
                u64::MAX
            )));
        }

        if self.logging.filter.trim().is_empty() {
            return Err(CliError::InvalidConfig(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies `PARCEL_*` overrides read through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup("PARCEL_OUTPUT_FORMAT") {
            match format.parse() {
                Ok(parsed) => {
                    debug!(format = %format, "Overriding output format from environment");
                    self.output.format = parsed;
                }
                Err(e) => warn!(format = %format, "Ignoring PARCEL_OUTPUT_FORMAT: {}", e),
            }
        }

        if let Some(strict) = lookup("PARCEL_STRICT") {
            match parse_bool(&strict) {
                Some(value) => self.validation.strict = value,
                None => warn!(value = %strict, "Ignoring PARCEL_STRICT: expected true or false"),
            }
        }

        if let Some(start) = lookup("PARCEL_SEQUENCE_START") {
            match start.parse::<u64>() {
                Ok(value) => {
                    debug!(start = value, "Overriding sequence start from environment");
                    self.sequence.start = value;
                }
                Err(_) => warn!(value = %start, "Ignoring PARCEL_SEQUENCE_START: not a number"),
            }
        }

        if let Some(filter) = lookup("PARCEL_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "parcel", "parcel")
            .map(|dirs| dirs.config_dir().join("parcel.toml"))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.validation.strict);
        assert_eq!(config.sequence.start, 1);
        assert_eq!(config.logging.filter, "warn,parcel=info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CliConfig::from_toml_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.validation.strict);
        assert_eq!(config.sequence.start, 1);
    }

    #[test]
    fn test_full_file() {
        let config = CliConfig::from_toml_str(
            r#"
            [output]
            format = "text"

            [validation]
            strict = false

            [sequence]
            start = 500

            [logging]
            filter = "debug"
            "#,
        )
        .unwrap();
        assert!(!config.validation.strict);
        assert_eq!(config.sequence.start, 500);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_unknown_format_is_a_parse_error() {
        assert!(CliConfig::from_toml_str("[output]\nformat = \"yaml\"\n").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = CliConfig::default();
        config.sequence.start = 0;
        assert!(matches!(config.validate(), Err(CliError::InvalidConfig(_))));

        config.sequence.start = 1;
        config.logging.filter = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sequence_start_upper_bound() {
        let mut config = CliConfig::default();
        config.sequence.start = u64::MAX;
        assert!(matches!(config.validate(), Err(CliError::InvalidConfig(_))));

        config.sequence.start = u64::MAX - 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_leaves_validation_to_the_caller() {
        let path = std::env::temp_dir().join(format!(
            "parcel-config-{}-start-zero.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[sequence]\nstart = 0\n").unwrap();

        let loaded = CliConfig::load(Some(path.clone()));
        std::fs::remove_file(&path).unwrap();

        let mut config = loaded.unwrap();
        assert_eq!(config.sequence.start, 0);
        assert!(config.validate().is_err());

        // A flag applied after loading repairs the file value.
        config.sequence.start = 5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config.apply_overrides_from(env(&[
            ("PARCEL_OUTPUT_FORMAT", "json"),
            ("PARCEL_STRICT", "no"),
            ("PARCEL_SEQUENCE_START", "42"),
            ("PARCEL_LOG", "trace"),
        ]));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.validation.strict);
        assert_eq!(config.sequence.start, 42);
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn test_bad_env_values_are_ignored() {
        let mut config = CliConfig::default();
        config.apply_overrides_from(env(&[
            ("PARCEL_OUTPUT_FORMAT", "yaml"),
            ("PARCEL_STRICT", "maybe"),
            ("PARCEL_SEQUENCE_START", "-3"),
        ]));
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.validation.strict);
        assert_eq!(config.sequence.start, 1);
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let path = PathBuf::from("/definitely/not/here/parcel.toml");
        assert!(matches!(
            CliConfig::load(Some(path)),
            Err(CliError::ConfigNotFound(_))
        ));
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&CliConfig::default()).unwrap();
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("[sequence]"));
    }
}
