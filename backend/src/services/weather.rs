//! Weather service
//!
//! Serves a fixed sample report; there is no live provider behind it.

use chrono::{Duration, NaiveDate};

use crate::models::{DailyForecast, WeatherReport};

pub const DEFAULT_LOCATION: &str = "Delhi";

/// (high, low, condition) for today and the next four days
const SAMPLE_FORECAST: [(i32, i32, &str); 5] = [
    (32, 24, "Sunny"),
    (30, 22, "Cloudy"),
    (28, 20, "Rainy"),
    (26, 18, "Stormy"),
    (29, 21, "Partly Cloudy"),
];

#[derive(Clone, Default)]
pub struct WeatherService;

impl WeatherService {
    pub fn new() -> Self {
        Self
    }

    /// Current conditions and five-day forecast for a location
    pub fn report(&self, location: Option<&str>, today: NaiveDate) -> WeatherReport {
        let location = location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LOCATION);

        let forecast = SAMPLE_FORECAST
            .iter()
            .enumerate()
            .map(|(offset, (high, low, condition))| DailyForecast {
                day: day_label(today, offset as i64),
                high: *high,
                low: *low,
                condition: condition.to_string(),
            })
            .collect();

        WeatherReport {
            location: location.to_string(),
            temperature: 28,
            humidity: 65,
            wind_speed: 12,
            condition: "Partly Cloudy".to_string(),
            forecast,
        }
    }
}

fn day_label(today: NaiveDate, offset: i64) -> String {
    match offset {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => (today + Duration::days(offset)).format("%A").to_string(),
    }
}
