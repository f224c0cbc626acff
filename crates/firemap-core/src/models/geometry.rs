//! GeoJSON type tags recognized by the normalizer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Geometry type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    /// Parse a GeoJSON geometry `type` string
    pub fn from_type_str(s: &str) -> Option<Self> {
        match s {
            "Point" => Some(GeometryKind::Point),
            "LineString" => Some(GeometryKind::LineString),
            "Polygon" => Some(GeometryKind::Polygon),
            "MultiPoint" => Some(GeometryKind::MultiPoint),
            "MultiLineString" => Some(GeometryKind::MultiLineString),
            "MultiPolygon" => Some(GeometryKind::MultiPolygon),
            "GeometryCollection" => Some(GeometryKind::GeometryCollection),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
        }
    }

    /// Whether the normalizer computes an area for this kind
    pub fn is_areal(&self) -> bool {
        matches!(self, GeometryKind::Polygon | GeometryKind::MultiPolygon)
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level GeoJSON object type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    FeatureCollection,
    Feature,
    Geometry(GeometryKind),
}

impl DocumentType {
    /// Parse a GeoJSON `type` string from the closed set of object types
    pub fn from_type_str(s: &str) -> Option<Self> {
        match s {
            "FeatureCollection" => Some(DocumentType::FeatureCollection),
            "Feature" => Some(DocumentType::Feature),
            other => GeometryKind::from_type_str(other).map(DocumentType::Geometry),
        }
    }
}
