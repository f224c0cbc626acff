use crate::error::{FiremapError, Result};
use crate::processing::NormalizerOptions;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Default config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "firemap.toml";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for Firemap
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub compute_area: ConfigValue<bool>,
    pub standardize_values: ConfigValue<bool>,
    pub pretty: ConfigValue<bool>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            compute_area: ConfigValue::new(true, ConfigSource::Default),
            standardize_values: ConfigValue::new(true, ConfigSource::Default),
            pretty: ConfigValue::new(true, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| FiremapError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| FiremapError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(compute_area) = file_config.compute_area {
            self.compute_area.update(compute_area, ConfigSource::File);
        }

        if let Some(standardize_values) = file_config.standardize_values {
            self.standardize_values.update(standardize_values, ConfigSource::File);
        }

        if let Some(pretty) = file_config.pretty {
            self.pretty.update(pretty, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // FIREMAP_COMPUTE_AREA
        if let Some(value) = env_flag("FIREMAP_COMPUTE_AREA") {
            self.compute_area.update(value, ConfigSource::Environment);
        }

        // FIREMAP_STANDARDIZE_VALUES
        if let Some(value) = env_flag("FIREMAP_STANDARDIZE_VALUES") {
            self.standardize_values.update(value, ConfigSource::Environment);
        }

        // FIREMAP_PRETTY
        if let Some(value) = env_flag("FIREMAP_PRETTY") {
            self.pretty.update(value, ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(compute_area) = overrides.compute_area {
            self.compute_area.update(compute_area, ConfigSource::Cli);
        }

        if let Some(standardize_values) = overrides.standardize_values {
            self.standardize_values.update(standardize_values, ConfigSource::Cli);
        }

        if let Some(pretty) = overrides.pretty {
            self.pretty.update(pretty, ConfigSource::Cli);
        }
    }

    /// Options handed to the normalizer
    pub fn normalizer_options(&self) -> NormalizerOptions {
        NormalizerOptions {
            compute_area: self.compute_area.value,
            standardize_values: self.standardize_values.value,
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "compute_area".to_string(),
            (self.compute_area.value.to_string(), self.compute_area.source),
        );

        map.insert(
            "standardize_values".to_string(),
            (self.standardize_values.value.to_string(), self.standardize_values.source),
        );

        map.insert("pretty".to_string(), (self.pretty.value.to_string(), self.pretty.source));

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    compute_area: Option<bool>,
    standardize_values: Option<bool>,
    pretty: Option<bool>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub compute_area: Option<bool>,
    pub standardize_values: Option<bool>,
    pub pretty: Option<bool>,
}

fn env_flag(name: &str) -> Option<bool> {
    let raw = env::var(name).ok()?;
    match parse_flag(&raw) {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Invalid {} value '{}': expected true or false", name, raw);
            None
        }
    }
}

/// Parse a boolean flag from string
pub fn parse_flag(s: &str) -> Result<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(FiremapError::ConfigInvalid {
            key: "flag".to_string(),
            reason: format!("Invalid boolean: {}. Use true or false", s),
        }),
    }
}
