//! Conversion from GeoJSON geometry values to measurable `geo` shapes.

use geo::{Coord, LineString};
use serde_json::Value;

use crate::models::GeometryKind;

/// The measurable part of a feature geometry.
///
/// Polygons keep only their outer ring; holes never take part in
/// centroid or area calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Coord<f64>),
    Polygon { outer: LineString<f64> },
    /// Outer ring of every member polygon, in document order
    MultiPolygon { outers: Vec<LineString<f64>> },
    /// Recognized geometry that is not measured
    Unsupported(GeometryKind),
}

impl Shape {
    /// Read a GeoJSON geometry value.
    ///
    /// Returns `None` when the value is not a well-formed geometry; callers
    /// treat that the same as a geometry with nothing to measure.
    pub fn from_geojson(value: &Value) -> Option<Self> {
        if value.is_null() {
            return None;
        }
        let geometry = geojson::Geometry::from_json_value(value.clone()).ok()?;

        match geometry.value {
            geojson::Value::Point(position) => to_coord(&position).map(Shape::Point),
            geojson::Value::Polygon(rings) => Some(Shape::Polygon { outer: outer_ring(&rings) }),
            geojson::Value::MultiPolygon(polygons) => Some(Shape::MultiPolygon {
                outers: polygons.iter().map(|rings| outer_ring(rings)).collect(),
            }),
            geojson::Value::LineString(_) => Some(Shape::Unsupported(GeometryKind::LineString)),
            geojson::Value::MultiPoint(_) => Some(Shape::Unsupported(GeometryKind::MultiPoint)),
            geojson::Value::MultiLineString(_) => {
                Some(Shape::Unsupported(GeometryKind::MultiLineString))
            }
            geojson::Value::GeometryCollection(_) => {
                Some(Shape::Unsupported(GeometryKind::GeometryCollection))
            }
        }
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Shape::Point(_) => GeometryKind::Point,
            Shape::Polygon { .. } => GeometryKind::Polygon,
            Shape::MultiPolygon { .. } => GeometryKind::MultiPolygon,
            Shape::Unsupported(kind) => *kind,
        }
    }
}

/// Convert a GeoJSON position (`[lon, lat, ...]`) to a planar coordinate
fn to_coord(position: &[f64]) -> Option<Coord<f64>> {
    match position {
        [x, y, ..] => Some(Coord { x: *x, y: *y }),
        _ => None,
    }
}

/// First ring of a polygon, or an empty ring if it has none
fn outer_ring(rings: &[Vec<Vec<f64>>]) -> LineString<f64> {
    rings
        .first()
        .map(|ring| LineString::new(ring.iter().filter_map(|p| to_coord(p)).collect()))
        .unwrap_or_else(|| LineString::new(vec![]))
}
