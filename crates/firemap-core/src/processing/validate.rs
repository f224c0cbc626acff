//! Shallow structural validation of GeoJSON documents.
//!
//! Only the top-level shape is checked. Problems deeper in a geometry show
//! up later as a feature with no centroid or area, never as a rejected
//! document.

use serde_json::Value;

use crate::error::{FiremapError, Result};
use crate::models::DocumentType;

/// Check a parsed JSON value and classify it.
pub fn check_document(document: &Value) -> Result<DocumentType> {
    let object = document
        .as_object()
        .ok_or_else(|| FiremapError::invalid_document("document is not a JSON object"))?;

    let type_name = match object.get("type") {
        Some(Value::String(name)) => name,
        Some(_) => return Err(FiremapError::invalid_document("`type` is not a string")),
        None => return Err(FiremapError::invalid_document("missing `type` field")),
    };

    let document_type = DocumentType::from_type_str(type_name).ok_or_else(|| {
        FiremapError::invalid_document(format!("unrecognized type `{}`", type_name))
    })?;

    if document_type == DocumentType::FeatureCollection {
        match object.get("features") {
            Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(FiremapError::invalid_document(
                    "FeatureCollection `features` is not an array",
                ))
            }
            None => {
                return Err(FiremapError::invalid_document(
                    "FeatureCollection is missing `features`",
                ))
            }
        }
    }

    Ok(document_type)
}

/// Whether a document can be normalized.
pub fn is_valid(document: &Value) -> bool {
    check_document(document).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeometryKind;
    use serde_json::json;

    #[test]
    fn test_rejects_non_objects() {
        assert!(!is_valid(&json!(null)));
        assert!(!is_valid(&json!([])));
        assert!(!is_valid(&json!("FeatureCollection")));
        assert!(!is_valid(&json!(42)));
    }

    #[test]
    fn test_rejects_missing_or_unknown_type() {
        assert!(!is_valid(&json!({"features": []})));
        assert!(!is_valid(&json!({"type": "Topology"})));
        assert!(!is_valid(&json!({"type": "featurecollection", "features": []})));
        assert!(!is_valid(&json!({"type": 7})));
    }

    #[test]
    fn test_feature_collection_requires_feature_array() {
        assert!(!is_valid(&json!({"type": "FeatureCollection"})));
        assert!(!is_valid(&json!({"type": "FeatureCollection", "features": {}})));
        assert!(!is_valid(&json!({"type": "FeatureCollection", "features": null})));
        assert!(is_valid(&json!({"type": "FeatureCollection", "features": []})));
    }

    #[test]
    fn test_other_types_are_shallow() {
        // Nothing beyond the type tag is inspected
        assert!(is_valid(&json!({"type": "Feature"})));
        assert!(is_valid(&json!({"type": "Polygon", "coordinates": "garbage"})));
        assert_eq!(
            check_document(&json!({"type": "MultiPolygon"})).unwrap(),
            DocumentType::Geometry(GeometryKind::MultiPolygon)
        );
    }

    #[test]
    fn test_error_reason() {
        let err = check_document(&json!({"type": "FeatureCollection"})).unwrap_err();
        assert!(matches!(err, FiremapError::InvalidDocument { .. }));
        assert!(err.to_string().contains("features"));
    }
}
