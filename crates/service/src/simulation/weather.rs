use chrono::{Days, NaiveDate};
use models::conditions::{celsius_to_fahrenheit, WeatherForecast};
use rand::Rng;

use crate::errors::ServiceError;

pub const SUMMARIES: [&str; 10] = [
    "Freezing", "Bracing", "Chilly", "Cool", "Mild", "Warm", "Balmy", "Hot", "Sweltering", "Scorching",
];

pub const DEFAULT_FORECAST_DAYS: u32 = 5;
pub const MAX_FORECAST_DAYS: u32 = 14;

const MIN_TEMP_C: i32 = -20;
const MAX_TEMP_C: i32 = 55;

/// Daily forecast for the `days` days following `start`.
pub fn forecast<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDate,
    days: u32,
    location: Option<&str>,
) -> Result<Vec<WeatherForecast>, ServiceError> {
    if !(1..=MAX_FORECAST_DAYS).contains(&days) {
        return Err(ServiceError::InvalidInput(format!(
            "days must be between 1 and {}",
            MAX_FORECAST_DAYS
        )));
    }
    (1..=days)
        .map(|offset| -> Result<WeatherForecast, ServiceError> {
            let date = start
                .checked_add_days(Days::new(u64::from(offset)))
                .ok_or_else(|| ServiceError::Internal("forecast date out of range".into()))?;
            let temperature_c = rng.gen_range(MIN_TEMP_C..=MAX_TEMP_C);
            Ok(WeatherForecast {
                date,
                location: location.map(str::to_string),
                temperature_c,
                temperature_f: celsius_to_fahrenheit(temperature_c),
                summary: SUMMARIES[rng.gen_range(0..SUMMARIES.len())].to_string(),
            })
        })
        .collect()
}
