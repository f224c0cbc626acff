use serde::Serialize;

use super::geometry::GeometryKind;

/// Display-oriented summary of one normalized feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureSummary {
    pub index: usize,
    pub name: Option<String>,
    pub geometry: Option<GeometryKind>,
    pub risk_level: Option<String>,
    pub severity: Option<String>,
    /// Representative `[longitude, latitude]`
    pub centroid: Option<[f64; 2]>,
    pub calculated_area: Option<f64>,
    pub cluster_center: bool,
}
