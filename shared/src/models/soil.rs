//! Soil catalogue: moisture and growth adjustments per soil type

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SoilType {
    Clay,
    Sandy,
    Loamy,
    /// Unrecognised soil name; resolves to the Loamy profile
    Other(String),
}

impl SoilType {
    /// Exact canonical names only; anything else is `Other`
    pub fn parse(s: &str) -> Self {
        match s {
            "Clay" => SoilType::Clay,
            "Sandy" => SoilType::Sandy,
            "Loamy" => SoilType::Loamy,
            _ => SoilType::Other(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SoilType::Clay => "Clay",
            SoilType::Sandy => "Sandy",
            SoilType::Loamy => "Loamy",
            SoilType::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SoilType::Other(_))
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for SoilType {
    fn from(s: String) -> Self {
        SoilType::parse(&s)
    }
}

impl From<SoilType> for String {
    fn from(soil: SoilType) -> Self {
        soil.as_str().to_string()
    }
}

/// Per-soil adjustments applied on top of a crop profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilProfile {
    /// Added to the displayed soil moisture
    pub moisture_bonus: f64,
    /// Added to the weekly growth rate; negative slows growth
    pub growth_penalty: f64,
}

impl SoilProfile {
    pub const CLAY: SoilProfile = SoilProfile { moisture_bonus: 10.0, growth_penalty: -2.0 };
    pub const SANDY: SoilProfile = SoilProfile { moisture_bonus: -10.0, growth_penalty: 3.0 };
    pub const LOAMY: SoilProfile = SoilProfile { moisture_bonus: 5.0, growth_penalty: 0.0 };
}

/// Look up the adjustments for a soil type. Unknown soils get Loamy.
pub fn lookup_soil(soil: &SoilType) -> SoilProfile {
    match soil {
        SoilType::Clay => SoilProfile::CLAY,
        SoilType::Sandy => SoilProfile::SANDY,
        SoilType::Loamy | SoilType::Other(_) => SoilProfile::LOAMY,
    }
}
