//! Document normalization.
//!
//! [`Normalizer::normalize`] turns any valid GeoJSON document into a
//! `FeatureCollection` whose features carry standardized properties, a
//! processing timestamp, and (for polygons) an approximate area.
//!
//! The caller's value is only borrowed; all edits happen on a deep copy.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::geo::{approximate_area, Shape};
use crate::models::{DocumentType, FeatureSummary, Properties, PropertyValue};
use crate::processing::standardize::{standardize_keys, standardize_risk_values};
use crate::processing::summary::summarize;
use crate::processing::validate::check_document;

/// Property holding the time a feature was first normalized
pub const PROCESSED_AT: &str = "processed_at";

/// Property holding the approximate planar polygon area
pub const CALCULATED_AREA: &str = "calculated_area";

/// Normalization switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerOptions {
    /// Write `calculated_area` on polygon features
    pub compute_area: bool,
    /// Map `risk_level` / `severity` text onto canonical levels
    pub standardize_values: bool,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self { compute_area: true, standardize_values: true }
    }
}

/// Stateless GeoJSON normalizer
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizerOptions,
}

impl Normalizer {
    pub fn new(options: NormalizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> NormalizerOptions {
        self.options
    }

    /// Normalize a document, stamping new features with the current time.
    pub fn normalize(&self, document: &Value) -> Result<NormalizedDocument> {
        self.normalize_at(document, Utc::now())
    }

    /// Normalize a document using `now` as the processing time.
    ///
    /// Fails with `InvalidDocument` when the document does not pass
    /// validation; no partial result is produced.
    pub fn normalize_at(&self, document: &Value, now: DateTime<Utc>) -> Result<NormalizedDocument> {
        let document_type = check_document(document)?;
        let timestamp = format_timestamp(now);

        let (members, raw_features) = match document_type {
            DocumentType::FeatureCollection => {
                let mut members = document.as_object().cloned().unwrap_or_default();
                members.remove("type");
                let features = match members.remove("features") {
                    Some(Value::Array(features)) => features,
                    _ => Vec::new(),
                };
                (members, features)
            }
            DocumentType::Feature => (Map::new(), vec![document.clone()]),
            DocumentType::Geometry(kind) => {
                tracing::debug!(geometry = %kind, "Wrapping bare geometry in a feature");
                let mut feature = Map::new();
                feature.insert("type".to_string(), Value::String("Feature".to_string()));
                feature.insert("geometry".to_string(), document.clone());
                feature.insert("properties".to_string(), Value::Object(Map::new()));
                (Map::new(), vec![Value::Object(feature)])
            }
        };

        let mut features = Vec::with_capacity(raw_features.len());
        for (index, raw) in raw_features.into_iter().enumerate() {
            match raw {
                Value::Object(feature) => features.push(self.normalize_feature(feature, &timestamp)),
                other => tracing::warn!(
                    index,
                    kind = json_kind(&other),
                    "Dropping feature entry that is not an object"
                ),
            }
        }

        tracing::debug!(features = features.len(), "Normalized document");
        Ok(NormalizedDocument { members, features })
    }

    /// Normalize one feature object in place of a copy.
    fn normalize_feature(&self, mut feature: Map<String, Value>, timestamp: &str) -> Map<String, Value> {
        feature
            .entry("type")
            .or_insert_with(|| Value::String("Feature".to_string()));

        let mut properties = match feature.remove("properties") {
            Some(Value::Object(object)) => Properties::from_json_object(object),
            Some(Value::Null) | None => Properties::new(),
            Some(other) => {
                tracing::warn!(kind = json_kind(&other), "Replacing non-object properties");
                Properties::new()
            }
        };

        if !properties.contains_key(PROCESSED_AT) {
            properties.insert(PROCESSED_AT, timestamp);
        }

        standardize_keys(&mut properties);
        if self.options.standardize_values {
            standardize_risk_values(&mut properties);
        }

        if self.options.compute_area {
            let area = feature
                .get("geometry")
                .and_then(Shape::from_geojson)
                .and_then(|shape| approximate_area(&shape));
            if let Some(area) = area {
                properties.insert(CALCULATED_AREA, PropertyValue::from_f64(area));
            }
        }

        feature.insert("properties".to_string(), Value::Object(properties.into_json_object()));
        feature
    }
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-07-01T12:00:00.000Z`
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A normalized `FeatureCollection`
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDocument {
    /// Top-level members other than `type` and `features`
    members: Map<String, Value>,
    features: Vec<Map<String, Value>>,
}

impl NormalizedDocument {
    pub fn features(&self) -> &[Map<String, Value>] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Foreign members carried over from the input collection
    pub fn members(&self) -> &Map<String, Value> {
        &self.members
    }

    /// Display summaries, one per feature
    pub fn summaries(&self) -> Vec<FeatureSummary> {
        self.features.iter().enumerate().map(|(i, f)| summarize(i, f)).collect()
    }

    pub fn to_value(&self) -> Value {
        self.clone().into_value()
    }

    pub fn into_value(self) -> Value {
        let mut object = self.members;
        object.insert("type".to_string(), Value::String("FeatureCollection".to_string()));
        object.insert(
            "features".to_string(),
            Value::Array(self.features.into_iter().map(Value::Object).collect()),
        );
        Value::Object(object)
    }
}

impl Serialize for NormalizedDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FiremapError;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 1, 12, 30, 0).unwrap()
    }

    fn props(doc: &NormalizedDocument, index: usize) -> &Map<String, Value> {
        doc.features()[index]["properties"].as_object().unwrap()
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(format_timestamp(fixed_time()), "2024-07-01T12:30:00.000Z");
    }

    #[test]
    fn test_rejects_invalid_document() {
        let normalizer = Normalizer::default();
        let err = normalizer.normalize(&json!({"type": "FeatureCollection"})).unwrap_err();
        assert!(matches!(err, FiremapError::InvalidDocument { .. }));
    }

    #[test]
    fn test_risk_level_rename_and_value() {
        let doc = json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [-120.0, 38.0]},
            "properties": {"RISK_LEVEL": "RED"}
        });

        let out = Normalizer::default().normalize_at(&doc, fixed_time()).unwrap();
        let p = props(&out, 0);
        assert_eq!(p["risk_level"], json!("extreme"));
        assert!(!p.contains_key("RISK_LEVEL"));
        assert!(!p.contains_key(CALCULATED_AREA));
    }

    #[test]
    fn test_wraps_feature_and_geometry() {
        let feature = json!({"type": "Feature", "geometry": null});
        let out = Normalizer::default().normalize_at(&feature, fixed_time()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.to_value()["type"], json!("FeatureCollection"));
        assert_eq!(props(&out, 0)[PROCESSED_AT], json!("2024-07-01T12:30:00.000Z"));

        let geometry = json!({"type": "Polygon", "coordinates": [[[0, 0], [2, 0], [2, 2], [0, 2], [0, 0]]]});
        let out = Normalizer::default().normalize_at(&geometry, fixed_time()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.features()[0]["type"], json!("Feature"));
        assert_eq!(out.features()[0]["geometry"], geometry);
        assert_eq!(props(&out, 0)[CALCULATED_AREA].as_f64(), Some(4.0));
    }

    #[test]
    fn test_properties_created_when_missing_or_invalid() {
        let doc = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": null},
                {"type": "Feature", "geometry": null, "properties": null},
                {"type": "Feature", "geometry": null, "properties": [1, 2]}
            ]
        });

        let out = Normalizer::default().normalize_at(&doc, fixed_time()).unwrap();
        assert_eq!(out.len(), 3);
        for i in 0..3 {
            let p = props(&out, i);
            assert_eq!(p.len(), 1);
            assert!(p.contains_key(PROCESSED_AT));
        }
    }

    #[test]
    fn test_timestamp_is_preserved_on_renormalize() {
        let doc = json!({
            "type": "Feature",
            "geometry": null,
            "properties": {"name": "Canyon"}
        });
        let normalizer = Normalizer::default();

        let first = normalizer.normalize_at(&doc, fixed_time()).unwrap();
        let later = fixed_time() + chrono::Duration::hours(3);
        let second = normalizer.normalize_at(&first.to_value(), later).unwrap();

        assert_eq!(props(&second, 0)[PROCESSED_AT], json!("2024-07-01T12:30:00.000Z"));
    }

    #[test]
    fn test_area_is_rewritten_each_pass() {
        let doc = json!({
            "type": "Feature",
            "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [2, 0], [2, 2], [0, 2], [0, 0]]]},
            "properties": {"calculated_area": 999}
        });
        let normalizer = Normalizer::default();

        let first = normalizer.normalize_at(&doc, fixed_time()).unwrap();
        assert_eq!(props(&first, 0)[CALCULATED_AREA].as_f64(), Some(4.0));

        let second = normalizer.normalize_at(&first.to_value(), fixed_time()).unwrap();
        assert_eq!(props(&second, 0)[CALCULATED_AREA].as_f64(), Some(4.0));
    }

    #[test]
    fn test_multipolygon_area_is_summed() {
        let doc = json!({
            "type": "Feature",
            "geometry": {
                "type": "MultiPolygon",
                "coordinates": [
                    [[[0, 0], [2, 0], [2, 2], [0, 2], [0, 0]]],
                    [[[5, 5], [6, 5], [6, 6], [5, 6], [5, 5]]]
                ]
            }
        });

        let out = Normalizer::default().normalize_at(&doc, fixed_time()).unwrap();
        assert_eq!(props(&out, 0)[CALCULATED_AREA].as_f64(), Some(5.0));
    }

    #[test]
    fn test_degenerate_polygon_gets_zero_area() {
        let doc = json!({
            "type": "Feature",
            "geometry": {"type": "Polygon", "coordinates": [[[1, 1], [3, 3]]]}
        });

        let out = Normalizer::default().normalize_at(&doc, fixed_time()).unwrap();
        assert_eq!(props(&out, 0)[CALCULATED_AREA].as_f64(), Some(0.0));
    }

    #[test]
    fn test_unsupported_geometry_has_no_area() {
        let doc = json!({
            "type": "Feature",
            "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}
        });

        let out = Normalizer::default().normalize_at(&doc, fixed_time()).unwrap();
        assert!(!props(&out, 0).contains_key(CALCULATED_AREA));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let doc = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": null, "properties": {"SEVERITY": "Orange"}}
            ]
        });
        let snapshot = doc.clone();

        let out = Normalizer::default().normalize(&doc).unwrap();

        assert_eq!(doc, snapshot);
        assert_eq!(props(&out, 0)["severity"], json!("high"));
    }

    #[test]
    fn test_foreign_members_and_non_object_entries() {
        let doc = json!({
            "type": "FeatureCollection",
            "name": "fire-forecast",
            "features": [42, {"type": "Feature", "geometry": null}, "x"]
        });

        let out = Normalizer::default().normalize_at(&doc, fixed_time()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.members()["name"], json!("fire-forecast"));

        let value = out.into_value();
        assert_eq!(value["name"], json!("fire-forecast"));
        assert_eq!(value["features"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_options_disable_area_and_values() {
        let normalizer = Normalizer::new(NormalizerOptions {
            compute_area: false,
            standardize_values: false,
        });
        let doc = json!({
            "type": "Feature",
            "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [2, 0], [2, 2], [0, 2], [0, 0]]]},
            "properties": {"riskLevel": "RED"}
        });

        let out = normalizer.normalize_at(&doc, fixed_time()).unwrap();
        let p = props(&out, 0);
        assert_eq!(p["risk_level"], json!("RED"));
        assert!(!p.contains_key(CALCULATED_AREA));
    }

    #[test]
    fn test_empty_collection() {
        let out = Normalizer::default()
            .normalize(&json!({"type": "FeatureCollection", "features": []}))
            .unwrap();
        assert!(out.is_empty());
        assert_eq!(out.to_value()["features"], json!([]));
    }
}
