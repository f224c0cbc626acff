use firemap_core::models::FeatureSummary;
use serde::Serialize;

/// Output for validate command
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub files: Vec<ValidationEntry>,
    pub valid_count: usize,
    pub invalid_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ValidationEntry {
    pub path: String,
    pub valid: bool,
    pub document_type: Option<String>,
    pub reason: Option<String>,
}

/// Output for normalize command when writing to a file
#[derive(Debug, Serialize)]
pub struct NormalizeOutput {
    pub source: String,
    pub output: String,
    pub feature_count: usize,
}

/// Output for inspect command, one per source
#[derive(Debug, Serialize)]
pub struct InspectOutput {
    pub source: String,
    pub feature_count: usize,
    pub features: Vec<FeatureSummary>,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub compute_area: ConfigValue<bool>,
    pub standardize_values: ConfigValue<bool>,
    pub pretty: ConfigValue<bool>,
}

#[derive(Debug, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: String,
}
