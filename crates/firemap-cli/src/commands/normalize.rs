//! Normalize command implementation

use crate::cache::DocumentCache;
use crate::cli::NormalizeArgs;
use crate::output::OutputWriter;
use crate::output_types::NormalizeOutput;
use anyhow::{Context, Result};
use firemap_core::config::LayeredConfig;
use firemap_core::Normalizer;
use std::fs;

pub fn execute(args: NormalizeArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut cache = DocumentCache::new(Normalizer::new(config.normalizer_options()));
    let normalized = cache.load(&args.path)?;
    let pretty = config.pretty.value;

    match args.output {
        Some(ref destination) => {
            let json = if pretty {
                serde_json::to_string_pretty(normalized)?
            } else {
                serde_json::to_string(normalized)?
            };
            fs::write(destination, json + "\n")
                .with_context(|| format!("Cannot write {}", destination.display()))?;

            if output.is_json() {
                output.result(NormalizeOutput {
                    source: args.path.display().to_string(),
                    output: destination.display().to_string(),
                    feature_count: normalized.len(),
                })?;
            } else {
                output.success(format!(
                    "Normalized {} feature(s) from {} into {}",
                    normalized.len(),
                    args.path.display(),
                    destination.display()
                ));
            }
        }
        None => output.document(normalized, pretty)?,
    }

    Ok(())
}
