//! Shoelace centroid and area over polygon outer rings.
//!
//! Coordinates are treated as planar `(longitude, latitude)` pairs. The
//! resulting area is in square degrees and only meant for relative
//! comparison on the map, not as a geodesic measurement.

use geo::{Coord, LineString};

use super::models::Shape;

/// Centroid and unsigned area of a single ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingMeasure {
    /// `None` only for an empty ring
    pub centroid: Option<Coord<f64>>,
    pub area: f64,
}

impl RingMeasure {
    fn degenerate(first: Option<Coord<f64>>) -> Self {
        Self { centroid: first, area: 0.0 }
    }
}

/// Measure a ring with the shoelace formula.
///
/// Rings with fewer than three distinct vertices, or a signed area of
/// exactly zero, report their first vertex and an area of zero.
pub fn measure_ring(ring: &LineString<f64>) -> RingMeasure {
    let first = ring.0.first().copied();
    if distinct_vertices(ring) < 3 {
        return RingMeasure::degenerate(first);
    }

    let mut closed = ring.clone();
    closed.close();

    let mut twice_area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for line in closed.lines() {
        let cross = line.start.x * line.end.y - line.end.x * line.start.y;
        twice_area += cross;
        cx += (line.start.x + line.end.x) * cross;
        cy += (line.start.y + line.end.y) * cross;
    }

    if twice_area == 0.0 {
        return RingMeasure::degenerate(first);
    }

    let factor = 3.0 * twice_area;
    RingMeasure {
        centroid: Some(Coord { x: cx / factor, y: cy / factor }),
        area: (twice_area / 2.0).abs(),
    }
}

fn distinct_vertices(ring: &LineString<f64>) -> usize {
    let mut coords: Vec<Coord<f64>> = ring.0.clone();
    coords.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    coords.dedup();
    coords.len()
}

/// Representative coordinate used to anchor labels and popups.
///
/// Points use themselves; polygons use the outer-ring centroid; multi
/// polygons use the centroid of their first member. Other kinds have none.
pub fn representative_point(shape: &Shape) -> Option<Coord<f64>> {
    match shape {
        Shape::Point(coord) => Some(*coord),
        Shape::Polygon { outer } => measure_ring(outer).centroid,
        Shape::MultiPolygon { outers } => outers.first().and_then(|r| measure_ring(r).centroid),
        Shape::Unsupported(_) => None,
    }
}

/// Approximate planar area; `None` for non-areal shapes.
///
/// A multi polygon sums the outer-ring area of every member.
pub fn approximate_area(shape: &Shape) -> Option<f64> {
    match shape {
        Shape::Polygon { outer } => Some(measure_ring(outer).area),
        Shape::MultiPolygon { outers } => Some(outers.iter().map(|r| measure_ring(r).area).sum()),
        Shape::Point(_) | Shape::Unsupported(_) => None,
    }
}
