use clap::{Args, Parser, Subcommand};
use firemap_core::config::CliConfigOverrides;
use std::path::PathBuf;

/// Firemap - Wildfire forecast GeoJSON normalizer
#[derive(Parser, Debug)]
#[command(name = "firemap")]
#[command(about = "Wildfire forecast GeoJSON normalizer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./firemap.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that files are GeoJSON documents the normalizer accepts
    Validate(ValidateArgs),

    /// Normalize a GeoJSON document into a FeatureCollection
    Normalize(NormalizeArgs),

    /// Show per-feature names, risk levels, centroids and areas
    Inspect(InspectArgs),

    /// Show the effective configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// GeoJSON files to check
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct NormalizeArgs {
    /// GeoJSON file to normalize
    pub path: PathBuf,

    /// Write the normalized document here instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write compact JSON
    #[arg(long)]
    pub compact: bool,

    #[command(flatten)]
    pub flags: NormalizeFlags,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// GeoJSON files to inspect
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub flags: NormalizeFlags,
}

/// Switches shared by commands that normalize
#[derive(Args, Debug, Default)]
pub struct NormalizeFlags {
    /// Skip the calculated_area property
    #[arg(long)]
    pub no_area: bool,

    /// Keep risk_level / severity text as found
    #[arg(long)]
    pub raw_values: bool,
}

impl NormalizeFlags {
    /// Flags that were set, as configuration overrides
    pub fn overrides(&self) -> CliConfigOverrides {
        CliConfigOverrides {
            compute_area: self.no_area.then_some(false),
            standardize_values: self.raw_values.then_some(false),
            pretty: None,
        }
    }
}
