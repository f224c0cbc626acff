//! Inspect command implementation

use crate::cache::DocumentCache;
use crate::cli::InspectArgs;
use crate::output::OutputWriter;
use crate::output_types::InspectOutput;
use anyhow::Result;
use firemap_core::config::LayeredConfig;
use firemap_core::models::FeatureSummary;
use firemap_core::Normalizer;
use tabled::Tabled;

pub fn execute(args: InspectArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut cache = DocumentCache::new(Normalizer::new(config.normalizer_options()));
    let mut reports = Vec::with_capacity(args.paths.len());

    for path in &args.paths {
        let normalized = cache.load(path)?;
        reports.push(InspectOutput {
            source: path.display().to_string(),
            feature_count: normalized.len(),
            features: normalized.summaries(),
        });
    }
    tracing::debug!(sources = cache.len(), reports = reports.len(), "Inspection complete");

    if output.is_json() {
        output.result(reports)?;
        return Ok(());
    }

    for report in reports {
        output.section(&report.source);
        output.kv("Features", report.feature_count);
        output.table(report.features.iter().map(FeatureRow::from).collect());
    }

    Ok(())
}

#[derive(Tabled)]
struct FeatureRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Geometry")]
    geometry: String,
    #[tabled(rename = "Risk")]
    risk_level: String,
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Centroid")]
    centroid: String,
    #[tabled(rename = "Area (deg²)")]
    area: String,
    #[tabled(rename = "Cluster")]
    cluster: String,
}

impl From<&FeatureSummary> for FeatureRow {
    fn from(summary: &FeatureSummary) -> Self {
        let dash = || "-".to_string();
        Self {
            index: summary.index,
            name: summary.name.clone().unwrap_or_else(dash),
            geometry: summary.geometry.map(|g| g.to_string()).unwrap_or_else(dash),
            risk_level: summary.risk_level.clone().unwrap_or_else(dash),
            severity: summary.severity.clone().unwrap_or_else(dash),
            centroid: summary
                .centroid
                .map(|[lon, lat]| format!("{:.4}, {:.4}", lon, lat))
                .unwrap_or_else(dash),
            area: summary.calculated_area.map(|a| format!("{:.6}", a)).unwrap_or_else(dash),
            cluster: if summary.cluster_center { "✓" } else { "" }.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use firemap_core::models::GeometryKind;

    #[test]
    fn test_feature_row_formatting() {
        let summary = FeatureSummary {
            index: 2,
            name: Some("East Zone".to_string()),
            geometry: Some(GeometryKind::Polygon),
            risk_level: Some("extreme".to_string()),
            severity: None,
            centroid: Some([-120.123456, 38.5]),
            calculated_area: Some(4.0),
            cluster_center: false,
        };

        let row = FeatureRow::from(&summary);
        assert_eq!(row.index, 2);
        assert_eq!(row.geometry, "Polygon");
        assert_eq!(row.severity, "-");
        assert_eq!(row.centroid, "-120.1235, 38.5000");
        assert_eq!(row.area, "4.000000");
        assert_eq!(row.cluster, "");
    }
}
