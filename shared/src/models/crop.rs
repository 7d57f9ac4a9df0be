//! Crop catalogue: harvest durations and growth profile coefficients

use serde::{Deserialize, Serialize};

/// Crops with a dedicated entry in the lookup tables.
///
/// Anything else is kept verbatim in [`CropType::Other`] and resolves to
/// [`CropProfile::DEFAULT`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CropType {
    Rice,
    Wheat,
    Maize,
    Cotton,
    Sugarcane,
    Tomato,
    Potato,
    Onion,
    /// Unrecognised crop name, as supplied by the caller
    Other(String),
}

impl CropType {
    /// Every crop with its own table entry
    pub const KNOWN: [CropType; 8] = [
        CropType::Rice,
        CropType::Wheat,
        CropType::Maize,
        CropType::Cotton,
        CropType::Sugarcane,
        CropType::Tomato,
        CropType::Potato,
        CropType::Onion,
    ];

    /// Parse a crop name. Never fails: only the exact canonical name
    /// (`"Rice"`, not `"rice"` or `"Rice "`) selects a table entry, anything
    /// else becomes `Other` and is estimated with the default profile.
    pub fn parse(s: &str) -> Self {
        match s {
            "Rice" => CropType::Rice,
            "Wheat" => CropType::Wheat,
            "Maize" => CropType::Maize,
            "Cotton" => CropType::Cotton,
            "Sugarcane" => CropType::Sugarcane,
            "Tomato" => CropType::Tomato,
            "Potato" => CropType::Potato,
            "Onion" => CropType::Onion,
            _ => CropType::Other(s.to_string()),
        }
    }

    /// Forgiving match for search filters: ignores case and surrounding
    /// whitespace. Not used for growth estimates.
    pub fn matches_loosely(&self, query: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(query.trim())
    }

    pub fn as_str(&self) -> &str {
        match self {
            CropType::Rice => "Rice",
            CropType::Wheat => "Wheat",
            CropType::Maize => "Maize",
            CropType::Cotton => "Cotton",
            CropType::Sugarcane => "Sugarcane",
            CropType::Tomato => "Tomato",
            CropType::Potato => "Potato",
            CropType::Onion => "Onion",
            CropType::Other(name) => name,
        }
    }

    /// False when lookups for this crop will use the default profile
    pub fn is_known(&self) -> bool {
        !matches!(self, CropType::Other(_))
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for CropType {
    fn from(s: String) -> Self {
        CropType::parse(&s)
    }
}

impl From<CropType> for String {
    fn from(crop: CropType) -> Self {
        crop.as_str().to_string()
    }
}

/// Inclusive display bounds for a derived reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub low: f64,
    pub high: f64,
}

impl Range {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Point at `fraction` of the way from `low` to `high`
    pub fn at(&self, fraction: f64) -> f64 {
        self.low + (self.high - self.low) * fraction
    }
}

/// Growth profile for a crop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropProfile {
    /// Days from sowing to harvest maturity. Always positive.
    pub harvest_days: u32,
    /// Weekly growth percentage contribution
    pub base_growth_rate: f64,
    pub moisture_range: Range,
    pub rainfall_range: Range,
}

const RICE_GROWTH: (f64, Range, Range) = (15.0, Range::new(70.0, 90.0), Range::new(10.0, 25.0));
const WHEAT_GROWTH: (f64, Range, Range) = (12.0, Range::new(60.0, 80.0), Range::new(5.0, 15.0));
const MAIZE_GROWTH: (f64, Range, Range) = (18.0, Range::new(65.0, 85.0), Range::new(8.0, 20.0));
const COTTON_GROWTH: (f64, Range, Range) = (10.0, Range::new(50.0, 70.0), Range::new(3.0, 12.0));

impl CropProfile {
    /// Profile used for crops without a table entry
    pub const DEFAULT: CropProfile = CropProfile::from_parts(100, RICE_GROWTH);

    const fn from_parts(harvest_days: u32, growth: (f64, Range, Range)) -> Self {
        Self {
            harvest_days,
            base_growth_rate: growth.0,
            moisture_range: growth.1,
            rainfall_range: growth.2,
        }
    }
}

/// Look up the growth profile for a crop.
///
/// Total over every input. Only Rice, Wheat, Maize and Cotton carry their own
/// growth coefficients; the remaining crops have their own harvest duration
/// but share Rice's coefficients.
pub fn lookup_crop(crop: &CropType) -> CropProfile {
    match crop {
        CropType::Rice => CropProfile::from_parts(120, RICE_GROWTH),
        CropType::Wheat => CropProfile::from_parts(110, WHEAT_GROWTH),
        CropType::Maize => CropProfile::from_parts(90, MAIZE_GROWTH),
        CropType::Cotton => CropProfile::from_parts(180, COTTON_GROWTH),
        CropType::Sugarcane => CropProfile::from_parts(365, RICE_GROWTH),
        CropType::Tomato => CropProfile::from_parts(75, RICE_GROWTH),
        CropType::Potato => CropProfile::from_parts(90, RICE_GROWTH),
        CropType::Onion => CropProfile::from_parts(120, RICE_GROWTH),
        CropType::Other(_) => CropProfile::DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_requires_canonical_name() {
        assert_eq!(CropType::parse("Rice"), CropType::Rice);
        assert_eq!(CropType::parse("rice"), CropType::Other("rice".to_string()));
        assert_eq!(CropType::parse("Rice "), CropType::Other("Rice ".to_string()));
        assert_eq!(CropType::parse("MAIZE"), CropType::Other("MAIZE".to_string()));
    }

    #[test]
    fn test_non_canonical_name_gets_default_duration() {
        assert_eq!(lookup_crop(&CropType::parse("rice")).harvest_days, 100);
        assert_eq!(lookup_crop(&CropType::parse(" Wheat")).harvest_days, 100);
    }

    #[test]
    fn test_matches_loosely() {
        assert!(CropType::Onion.matches_loosely(" onion "));
        assert!(CropType::Rice.matches_loosely("RICE"));
        assert!(!CropType::Rice.matches_loosely("Wheat"));
        assert!(CropType::parse("Millet").matches_loosely("millet"));
    }

    #[test]
    fn test_parse_unknown_keeps_raw_name() {
        let crop = CropType::parse("Quinoa");
        assert_eq!(crop, CropType::Other("Quinoa".to_string()));
        assert!(!crop.is_known());
        assert_eq!(crop.to_string(), "Quinoa");
    }

    #[test]
    fn test_harvest_days_table() {
        let expected = [
            (CropType::Rice, 120),
            (CropType::Wheat, 110),
            (CropType::Maize, 90),
            (CropType::Cotton, 180),
            (CropType::Sugarcane, 365),
            (CropType::Tomato, 75),
            (CropType::Potato, 90),
            (CropType::Onion, 120),
        ];
        for (crop, days) in expected {
            assert_eq!(lookup_crop(&crop).harvest_days, days, "{}", crop);
        }
    }

    #[test]
    fn test_unknown_crop_uses_default() {
        let profile = lookup_crop(&CropType::parse("Unknown"));
        assert_eq!(profile, CropProfile::DEFAULT);
        assert_eq!(profile.harvest_days, 100);
        assert_eq!(profile.base_growth_rate, 15.0);
        assert_eq!(profile.moisture_range, Range::new(70.0, 90.0));
    }

    #[test]
    fn test_secondary_crops_share_rice_growth() {
        let rice = lookup_crop(&CropType::Rice);
        for crop in [CropType::Sugarcane, CropType::Tomato, CropType::Potato, CropType::Onion] {
            let profile = lookup_crop(&crop);
            assert_eq!(profile.base_growth_rate, rice.base_growth_rate);
            assert_eq!(profile.rainfall_range, rice.rainfall_range);
        }
    }

    #[test]
    fn test_every_known_crop_has_positive_harvest_days() {
        for crop in CropType::KNOWN.iter() {
            assert!(lookup_crop(crop).harvest_days > 0);
        }
    }

    #[test]
    fn test_lookup_is_stable() {
        assert_eq!(lookup_crop(&CropType::Cotton), lookup_crop(&CropType::Cotton));
    }

    #[test]
    fn test_serde_round_trips_through_name() {
        let json = serde_json::to_string(&CropType::Tomato).unwrap();
        assert_eq!(json, "\"Tomato\"");
        let parsed: CropType = serde_json::from_str("\"barley\"").unwrap();
        assert_eq!(parsed, CropType::Other("barley".to_string()));
    }

    proptest! {
        #[test]
        fn test_parse_is_total(name in ".{0,24}") {
            let crop = CropType::parse(&name);
            let profile = lookup_crop(&crop);
            prop_assert!(profile.harvest_days > 0);
            if !crop.is_known() {
                prop_assert_eq!(profile, CropProfile::DEFAULT);
                prop_assert_eq!(crop.to_string(), name);
            }
        }

        #[test]
        fn test_known_names_round_trip(crop in proptest::sample::select(CropType::KNOWN.to_vec())) {
            prop_assert_eq!(CropType::parse(crop.as_str()), crop.clone());
            let upper = crop.as_str().to_uppercase();
            prop_assert_eq!(CropType::parse(&upper), CropType::Other(upper.clone()));
            prop_assert!(crop.matches_loosely(&upper));
        }
    }
}
