//! Command implementations

mod config;
mod inspect;
mod normalize;
mod validate;

use crate::cli::{Cli, Commands};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use anyhow::Result;
use firemap_core::config::CliConfigOverrides;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Validate(args) => validate::execute(args, &output),
        Commands::Normalize(args) => {
            let mut overrides = args.flags.overrides();
            if args.compact {
                overrides.pretty = Some(false);
            }
            let config = load_config(config_path, overrides)?;
            normalize::execute(args, &config, &output)
        }
        Commands::Inspect(args) => {
            let config = load_config(config_path, args.flags.overrides())?;
            inspect::execute(args, &config, &output)
        }
        Commands::Config => {
            let config = load_config(config_path, CliConfigOverrides::default())?;
            config::execute(&config, &output)
        }
    }
}
