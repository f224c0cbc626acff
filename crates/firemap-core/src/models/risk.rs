//! Fire risk levels and the aliases forecast feeds use for them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FiremapError;

/// Canonical fire risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 5] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::VeryHigh,
        RiskLevel::Extreme,
    ];

    /// Canonical string form
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very_high",
            RiskLevel::Extreme => "extreme",
        }
    }

    /// Look up an already trimmed, lower-cased alias.
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias {
            "low" | "minimal" | "green" => Some(RiskLevel::Low),
            "moderate" | "medium" | "yellow" => Some(RiskLevel::Moderate),
            "high" | "orange" => Some(RiskLevel::High),
            "very high" | "very_high" | "veryhigh" => Some(RiskLevel::VeryHigh),
            "extreme" | "critical" | "red" => Some(RiskLevel::Extreme),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = FiremapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskLevel::from_alias(&s.trim().to_lowercase()).ok_or_else(|| {
            FiremapError::UnrecognizedValue {
                field: "risk_level".to_string(),
                value: s.to_string(),
            }
        })
    }
}

/// Standardize a textual risk value.
///
/// The text is trimmed and lower-cased; known aliases collapse to the
/// canonical name and anything else is returned in its cleaned form.
pub fn standardize_risk_text(raw: &str) -> String {
    let cleaned = raw.trim().to_lowercase();
    match RiskLevel::from_alias(&cleaned) {
        Some(level) => level.as_str().to_string(),
        None => cleaned,
    }
}
