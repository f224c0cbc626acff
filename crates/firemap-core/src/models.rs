pub mod feature;
pub mod geometry;
pub mod property;
pub mod risk;

pub use feature::FeatureSummary;
pub use geometry::{DocumentType, GeometryKind};
pub use property::{Properties, PropertyValue};
pub use risk::RiskLevel;
