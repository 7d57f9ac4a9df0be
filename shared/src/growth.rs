//! Growth estimation engine
//!
//! Turns a crop, a soil and a sowing date into the figures shown on the farm
//! dashboard: a harvest countdown and a six-week growth chart. Every function
//! here is pure; the current date is always passed in by the caller.

use chrono::NaiveDate;

use crate::models::{lookup_crop, lookup_soil, CropType, HarvestSnapshot, SoilType, WeekPoint};

/// Number of points in a weekly growth series
pub const SERIES_WEEKS: u32 = 6;

/// Position within the crop's moisture range reported as soil moisture
const MOISTURE_FRACTION: f64 = 0.7;

/// Position within the crop's rainfall range reported as rainfall
const RAINFALL_FRACTION: f64 = 0.6;

/// Signed number of calendar days from `from` to `to`.
///
/// Negative when `from` lies in the future.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Round to one decimal place, halves away from zero
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Whole weeks since sowing, never less than one
pub fn elapsed_weeks(elapsed_days: i64) -> i64 {
    elapsed_days.div_euclid(7).max(1)
}

/// Harvest progress and countdown for a crop sown on `sowing_date`.
///
/// Sowing dates in the future are accepted and report zero progress. The soil
/// is part of the plot description but does not move the harvest date.
pub fn snapshot(
    crop: &CropType,
    _soil: &SoilType,
    sowing_date: NaiveDate,
    today: NaiveDate,
) -> HarvestSnapshot {
    let elapsed = days_between(sowing_date, today);
    // table entries are positive; the guard keeps the division defined
    let harvest_days = i64::from(lookup_crop(crop).harvest_days.max(1));

    let progress = (elapsed as f64 / harvest_days as f64 * 100.0).clamp(0.0, 100.0);

    HarvestSnapshot {
        progress: round1(progress),
        days_to_harvest: (harvest_days - elapsed).max(0),
    }
}

/// Synthetic six-week growth chart for a plot.
///
/// Weeks up to the elapsed week follow the soil-adjusted rate with a bonus of
/// two points per week; later weeks extrapolate from the unadjusted rate with
/// one point per week. The two branches do not join up, so the series can
/// drop after the current week. Neither branch has a lower bound.
pub fn weekly_series(
    crop: &CropType,
    soil: &SoilType,
    sowing_date: NaiveDate,
    today: NaiveDate,
) -> Vec<WeekPoint> {
    let crop_profile = lookup_crop(crop);
    let soil_profile = lookup_soil(soil);

    let weeks_elapsed = elapsed_weeks(days_between(sowing_date, today));
    let adjusted_rate = crop_profile.base_growth_rate + soil_profile.growth_penalty;

    let soil_moisture =
        round1(crop_profile.moisture_range.at(MOISTURE_FRACTION) + soil_profile.moisture_bonus);
    let rainfall = round1(crop_profile.rainfall_range.at(RAINFALL_FRACTION));

    (1..=SERIES_WEEKS)
        .map(|week| {
            let w = f64::from(week);
            let progress = if i64::from(week) <= weeks_elapsed {
                w * adjusted_rate + w * 2.0
            } else {
                weeks_elapsed as f64 * crop_profile.base_growth_rate + w
            };

            WeekPoint {
                week,
                progress: round1(progress.min(100.0)),
                soil_moisture,
                rainfall,
            }
        })
        .collect()
}
