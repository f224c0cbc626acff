use serde_json::{Map, Value};

use crate::geo::{representative_point, Shape};
use crate::models::{FeatureSummary, GeometryKind};
use crate::processing::normalize::CALCULATED_AREA;

/// Representative `[longitude, latitude]` of a feature, if its geometry has one
pub fn representative_coordinate(feature: &Map<String, Value>) -> Option<[f64; 2]> {
    feature
        .get("geometry")
        .and_then(Shape::from_geojson)
        .and_then(|shape| representative_point(&shape))
        .map(|c| [c.x, c.y])
}

/// Summarize a normalized feature for display
pub fn summarize(index: usize, feature: &Map<String, Value>) -> FeatureSummary {
    let empty = Map::new();
    let properties = feature.get("properties").and_then(Value::as_object).unwrap_or(&empty);

    let geometry = feature
        .get("geometry")
        .and_then(|g| g.get("type"))
        .and_then(Value::as_str)
        .and_then(GeometryKind::from_type_str);

    FeatureSummary {
        index,
        name: display_text(properties.get("name")),
        geometry,
        risk_level: display_text(properties.get("risk_level")),
        severity: display_text(properties.get("severity")),
        centroid: representative_coordinate(feature),
        calculated_area: properties.get(CALCULATED_AREA).and_then(Value::as_f64),
        cluster_center: properties
            .get("cluster_center")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    }
}

fn display_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
