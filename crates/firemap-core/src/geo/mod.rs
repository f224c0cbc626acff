//! Geo module for planar measurement
//!
//! Forecast geometries arrive as raw GeoJSON. This module lifts the parts
//! that matter for display (points and polygon outer rings) into `geo`
//! types and measures them.

pub mod measure;
pub mod models;

pub use measure::{approximate_area, measure_ring, representative_point, RingMeasure};
pub use models::Shape;
