//! Firemap Core - Wildfire forecast GeoJSON normalization
//!
//! This crate contains the domain models, configuration, and the pure
//! normalization pipeline that prepares forecast documents for display.

pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod processing;

pub use error::{FiremapError, Result};
pub use processing::{is_valid, Normalizer, NormalizerOptions};
