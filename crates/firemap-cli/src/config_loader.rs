//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use firemap_core::config::{CliConfigOverrides, LayeredConfig, DEFAULT_CONFIG_FILE};
use std::path::{Path, PathBuf};

/// Load layered configuration: defaults, then file, then environment, then CLI.
///
/// An explicit `--config` file must exist; the default `firemap.toml` is
/// only read when present in the working directory.
pub fn load_config(explicit: Option<&Path>, overrides: CliConfigOverrides) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(path) = config_file(explicit) {
        tracing::debug!(path = %path.display(), "Loading configuration file");
        config = config
            .load_from_file(&path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    }

    let mut config = config.load_from_env();
    config.update_from_cli(overrides);
    Ok(config)
}

fn config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.is_file().then_some(default)
        }
    }
}
