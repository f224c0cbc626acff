//! Config command implementation

use crate::output::OutputWriter;
use crate::output_types::{ConfigOutput, ConfigValue};
use anyhow::Result;
use firemap_core::config::{self as core_config, LayeredConfig};
use tabled::Tabled;

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    if output.is_json() {
        output.result(ConfigOutput {
            compute_area: entry(&config.compute_area),
            standardize_values: entry(&config.standardize_values),
            pretty: entry(&config.pretty),
        })?;
        return Ok(());
    }

    #[derive(Tabled)]
    struct ConfigRow {
        #[tabled(rename = "Key")]
        key: String,
        #[tabled(rename = "Value")]
        value: String,
        #[tabled(rename = "Source")]
        source: String,
    }

    let mut rows: Vec<ConfigRow> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigRow { key, value, source: format!("{:?}", source) })
        .collect();
    rows.sort_by(|a, b| a.key.cmp(&b.key));

    output.section("Configuration");
    output.table(rows);

    Ok(())
}

fn entry<T: Clone>(value: &core_config::ConfigValue<T>) -> ConfigValue<T> {
    ConfigValue { value: value.value.clone(), source: format!("{:?}", value.source) }
}
