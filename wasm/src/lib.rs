//! WebAssembly module for the FarmEase dashboard
//!
//! Provides client-side computation for:
//! - Harvest progress and countdown
//! - Six-week growth charts
//! - Offline validation of farm form fields

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::growth::*;
pub use shared::models::*;
pub use shared::validation::*;

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, JsValue> {
    parse_iso_date(field, value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// `today` falls back to the browser's local date when not supplied
fn resolve_today(today: Option<String>) -> Result<NaiveDate, JsValue> {
    match today {
        Some(date) => parse_date("today", &date),
        None => {
            let now = js_sys::Date::new_0();
            NaiveDate::from_ymd_opt(
                now.get_full_year() as i32,
                now.get_month() + 1,
                now.get_date(),
            )
            .ok_or_else(|| JsValue::from_str("Browser returned an invalid date"))
        }
    }
}

fn warn_fallback(crop: &CropType, soil: Option<&SoilType>) {
    if !crop.is_known() {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "Unknown crop '{}', using default growth profile",
            crop
        )));
    }
    if let Some(soil) = soil.filter(|s| !s.is_known()) {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "Unknown soil '{}', using Loamy profile",
            soil
        )));
    }
}

/// Harvest duration in days for a crop name
#[wasm_bindgen]
pub fn crop_harvest_days(crop_type: &str) -> u32 {
    lookup_crop(&CropType::parse(crop_type)).harvest_days
}

/// Harvest progress as JSON: `{"progress": 50.0, "daysToHarvest": 60}`
#[wasm_bindgen]
pub fn harvest_snapshot(
    crop_type: &str,
    soil_type: &str,
    sowing_date: &str,
    today: Option<String>,
) -> Result<String, JsValue> {
    let crop = CropType::parse(crop_type);
    let soil = SoilType::parse(soil_type);
    warn_fallback(&crop, None);
    let sowing = parse_date("sowingDate", sowing_date)?;
    let today = resolve_today(today)?;

    serde_json::to_string(&snapshot(&crop, &soil, sowing, today))
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Six-week growth chart as a JSON array of week points
#[wasm_bindgen]
pub fn growth_series(
    crop_type: &str,
    soil_type: &str,
    sowing_date: &str,
    today: Option<String>,
) -> Result<String, JsValue> {
    let crop = CropType::parse(crop_type);
    let soil = SoilType::parse(soil_type);
    warn_fallback(&crop, Some(&soil));
    let sowing = parse_date("sowingDate", sowing_date)?;
    let today = resolve_today(today)?;

    serde_json::to_string(&weekly_series(&crop, &soil, sowing, today))
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Check a sowing date before submitting the farm form
#[wasm_bindgen]
pub fn is_valid_sowing_date(sowing_date: &str) -> bool {
    parse_sowing_date(sowing_date).is_ok()
}

/// Check a plot area before submitting the farm form
#[wasm_bindgen]
pub fn is_valid_area(area: f64) -> bool {
    area.is_finite() && area > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_harvest_days() {
        assert_eq!(crop_harvest_days("Rice"), 120);
        assert_eq!(crop_harvest_days("Sugarcane"), 365);
        assert_eq!(crop_harvest_days("sugarcane"), 100);
        assert_eq!(crop_harvest_days("Millet"), 100);
    }

    #[test]
    fn test_harvest_snapshot_json() {
        let json = harvest_snapshot(
            "Wheat",
            "Clay",
            "2024-01-01",
            Some("2024-03-01".to_string()),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        // 60 of 110 days
        assert_eq!(value["progress"], 54.5);
        assert_eq!(value["daysToHarvest"], 50);
    }

    #[test]
    fn test_growth_series_json() {
        let json = growth_series(
            "Cotton",
            "Sandy",
            "2024-02-20",
            Some("2024-03-01".to_string()),
        )
        .unwrap();
        let points: Vec<WeekPoint> = serde_json::from_str(&json).unwrap();
        assert_eq!(points.len(), 6);
        assert_eq!(points[0].progress, 15.0);
        assert_eq!(points[1].progress, 12.0);
    }

    #[test]
    fn test_form_validation() {
        assert!(is_valid_sowing_date("2024-06-15"));
        assert!(!is_valid_sowing_date("15-06-2024"));
        assert!(is_valid_area(1.25));
        assert!(!is_valid_area(0.0));
        assert!(!is_valid_area(f64::NAN));
    }
}
