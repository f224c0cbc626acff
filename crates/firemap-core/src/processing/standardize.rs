//! Property key and value standardization.
//!
//! Forecast feeds name the same attribute many ways. Keys are renamed in a
//! single pass over [`RENAME_TABLE`], in table order. When a feature carries
//! two spellings of the same attribute (say `RISK_LEVEL` and `riskLevel`)
//! the one listed later wins and the other value is discarded; a renamed
//! value also replaces a canonical key that was already present.

use crate::models::risk::standardize_risk_text;
use crate::models::{Properties, PropertyValue};

/// Source key to canonical key, applied top to bottom
pub const RENAME_TABLE: &[(&str, &str)] = &[
    ("RISK_LEVEL", "risk_level"),
    ("riskLevel", "risk_level"),
    ("SEVERITY", "severity"),
    ("INTENSITY", "intensity"),
    ("TEMP", "temperature"),
    ("temperature_f", "temperature"),
    ("HUMIDITY", "humidity"),
    ("humidity_percent", "humidity"),
    ("WIND_SPEED", "wind_speed"),
    ("windSpeed", "wind_speed"),
    ("wind_mph", "wind_speed"),
    ("NAME", "name"),
    ("area_name", "name"),
    ("AREA_NAME", "name"),
    ("LAST_UPDATE", "last_update"),
    ("lastUpdate", "last_update"),
    ("FORECAST_TIME", "forecast_time"),
    ("forecastTime", "forecast_time"),
];

/// Keys whose textual values are mapped onto canonical risk levels
pub const RISK_VALUE_KEYS: &[&str] = &["risk_level", "severity"];

/// Rename known property keys to their canonical names.
pub fn standardize_keys(properties: &mut Properties) {
    for &(from, to) in RENAME_TABLE {
        if properties.rename(from, to) {
            tracing::trace!(from, to, "Renamed property");
        }
    }
}

/// Standardize textual risk values; other value kinds are left alone.
pub fn standardize_risk_values(properties: &mut Properties) {
    for &key in RISK_VALUE_KEYS {
        if let Some(PropertyValue::Text(text)) = properties.get_mut(key) {
            *text = standardize_risk_text(text);
        }
    }
}
